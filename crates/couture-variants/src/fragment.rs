//! Style fragments and whitespace tokenization.

use serde::{Deserialize, Deserializer};
use std::fmt;

/// Splits a class string into tokens.
///
/// Any run of Unicode whitespace separates tokens; leading and trailing
/// whitespace produce no empty tokens.
pub fn tokenize(classes: &str) -> impl Iterator<Item = &str> {
    classes.split_whitespace()
}

/// An ordered sequence of style tokens.
///
/// Tokens are opaque: the set never interprets them, it only guarantees that
/// none of them contains whitespace. Duplicates are allowed and kept.
///
/// # Example
///
/// ```rust
/// use couture_variants::FragmentSet;
///
/// let set = FragmentSet::parse("  h-9   px-4 text-sm ");
/// assert_eq!(set.tokens().collect::<Vec<_>>(), ["h-9", "px-4", "text-sm"]);
/// assert_eq!(set.to_string(), "h-9 px-4 text-sm");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FragmentSet {
    tokens: Vec<String>,
}

impl FragmentSet {
    /// Creates an empty fragment set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenizes a whitespace-separated class string.
    pub fn parse(classes: &str) -> Self {
        Self {
            tokens: tokenize(classes).map(str::to_owned).collect(),
        }
    }

    /// Iterates over the tokens in declaration order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for FragmentSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}

impl From<&str> for FragmentSet {
    fn from(classes: &str) -> Self {
        Self::parse(classes)
    }
}

impl From<String> for FragmentSet {
    fn from(classes: String) -> Self {
        Self::parse(&classes)
    }
}

impl<S: AsRef<str>> FromIterator<S> for FragmentSet {
    /// Collects entries, tokenizing each one so that an entry such as
    /// `"h-9 px-4"` still yields two tokens.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let tokens = iter
            .into_iter()
            .flat_map(|entry| {
                tokenize(entry.as_ref())
                    .map(str::to_owned)
                    .collect::<Vec<_>>()
            })
            .collect();
        Self { tokens }
    }
}

impl<'de> Deserialize<'de> for FragmentSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Accept `"h-9 px-4"`, `[h-9, px-4]` and `~` (no fragments).
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            One(String),
            Many(Vec<String>),
            Nothing(()),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::One(classes) => FragmentSet::parse(&classes),
            Raw::Many(entries) => entries.into_iter().collect(),
            Raw::Nothing(()) => FragmentSet::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_whitespace() {
        let set = FragmentSet::parse("\tbg-primary \n  text-white  ");
        assert_eq!(set.len(), 2);
        assert_eq!(set.to_string(), "bg-primary text-white");
    }

    #[test]
    fn test_parse_empty_and_blank() {
        assert!(FragmentSet::parse("").is_empty());
        assert!(FragmentSet::parse("   \t ").is_empty());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let set = FragmentSet::parse("border border");
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_from_iter_splits_entries() {
        let set: FragmentSet = vec!["h-9 px-4", "text-sm"].into_iter().collect();
        assert_eq!(set.tokens().collect::<Vec<_>>(), ["h-9", "px-4", "text-sm"]);
    }

    #[test]
    fn test_deserialize_string_list_and_null() {
        let one: FragmentSet = serde_yaml::from_str("\"h-9 px-4\"").unwrap();
        let many: FragmentSet = serde_yaml::from_str("[h-9, px-4]").unwrap();
        let none: FragmentSet = serde_yaml::from_str("~").unwrap();

        assert_eq!(one, many);
        assert!(none.is_empty());
    }
}
