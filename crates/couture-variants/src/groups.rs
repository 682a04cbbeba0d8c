//! Property-group classification for class conflict resolution.
//!
//! A property group names the visual property a token affects, such as
//! `background-color` or `padding-x`. Two tokens conflict only when this table
//! places them in the same group; nothing is inferred from the token text.
//! Tokens missing from the table never conflict with anything.

use std::collections::{BTreeMap, HashMap};

use thiserror::Error;

use crate::fragment::FragmentSet;

/// Error returned when a property-group table is malformed.
#[derive(Debug, Error)]
pub enum GroupError {
    /// A token was assigned to two different groups.
    #[error("token '{token}' is assigned to both '{first}' and '{second}'")]
    ConflictingGroup {
        token: String,
        first: String,
        second: String,
    },
    /// A group was declared with an empty or blank name.
    #[error("property group name cannot be empty")]
    EmptyGroupName,
    /// The YAML source could not be parsed.
    #[error("failed to parse property groups: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A table mapping style tokens to the property group they affect.
///
/// Configured once per fragment vocabulary and shared by every merge.
///
/// # Example
///
/// ```rust
/// use couture_variants::PropertyGroups;
///
/// let groups = PropertyGroups::builder()
///     .group("background-color", ["bg-blue", "bg-red"])
///     .group("text-color", ["text-white"])
///     .build()
///     .unwrap();
///
/// assert_eq!(groups.group_of("bg-red"), Some("background-color"));
/// assert_eq!(groups.group_of("p-4"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyGroups {
    by_token: HashMap<String, String>,
}

impl PropertyGroups {
    /// Creates an empty table; every token is its own group.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> PropertyGroupsBuilder {
        PropertyGroupsBuilder::default()
    }

    /// Parses a table from YAML.
    ///
    /// The document maps each group name to its tokens, given either as a
    /// list or as one whitespace-separated string:
    ///
    /// ```rust
    /// use couture_variants::PropertyGroups;
    ///
    /// let groups = PropertyGroups::from_yaml(r#"
    /// border-radius: rounded-lg rounded-xl rounded-full
    /// padding-x: [px-4, px-6]
    /// "#).unwrap();
    ///
    /// assert_eq!(groups.group_of("rounded-full"), Some("border-radius"));
    /// assert_eq!(groups.group_of("px-6"), Some("padding-x"));
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, GroupError> {
        if yaml.trim().is_empty() {
            return Ok(Self::new());
        }
        let table: BTreeMap<String, FragmentSet> = serde_yaml::from_str(yaml)?;
        table
            .into_iter()
            .fold(Self::builder(), |builder, (group, tokens)| {
                builder.group(group, tokens.tokens())
            })
            .build()
    }

    /// The group `token` belongs to, or `None` when it is unclassified.
    pub fn group_of(&self, token: &str) -> Option<&str> {
        self.by_token.get(token).map(String::as_str)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.by_token.contains_key(token)
    }

    /// Number of classified tokens.
    pub fn len(&self) -> usize {
        self.by_token.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_token.is_empty()
    }
}

/// Collects group assignments and validates them into [`PropertyGroups`].
#[derive(Debug, Clone, Default)]
pub struct PropertyGroupsBuilder {
    assignments: Vec<(String, Vec<String>)>,
}

impl PropertyGroupsBuilder {
    /// Assigns `tokens` to `group`. A group may be declared more than once;
    /// its tokens accumulate.
    pub fn group<I, S>(mut self, group: impl Into<String>, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens = tokens
            .into_iter()
            .flat_map(|entry| {
                crate::fragment::tokenize(entry.as_ref())
                    .map(str::to_owned)
                    .collect::<Vec<_>>()
            })
            .collect();
        self.assignments.push((group.into(), tokens));
        self
    }

    /// Builds the table, rejecting tokens assigned to two different groups.
    pub fn build(self) -> Result<PropertyGroups, GroupError> {
        let mut by_token: HashMap<String, String> = HashMap::new();
        for (group, tokens) in self.assignments {
            if group.trim().is_empty() {
                return Err(GroupError::EmptyGroupName);
            }
            for token in tokens {
                match by_token.get(&token) {
                    Some(existing) if *existing != group => {
                        return Err(GroupError::ConflictingGroup {
                            token,
                            first: existing.clone(),
                            second: group,
                        });
                    }
                    Some(_) => {}
                    None => {
                        by_token.insert(token, group.clone());
                    }
                }
            }
        }
        Ok(PropertyGroups { by_token })
    }
}
