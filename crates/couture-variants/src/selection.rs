//! Caller selections of variant values.

use std::collections::BTreeMap;

/// What a caller chose for one axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// A value name. It may or may not exist on the axis.
    Value(String),
    /// Explicitly unset; the axis default applies.
    Unset,
}

impl Choice {
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Choice::Value(value) => Some(value),
            Choice::Unset => None,
        }
    }
}

impl<S: Into<String>> From<Option<S>> for Choice {
    fn from(value: Option<S>) -> Self {
        value.map_or(Choice::Unset, |value| Choice::Value(value.into()))
    }
}

/// A mapping from axis names to chosen values, covering any subset of axes.
///
/// Selections are built per component invocation and read by resolution.
/// Axis names the schema does not declare are carried along untouched;
/// lenient resolution ignores them and strict resolution reports them.
///
/// # Example
///
/// ```rust
/// use couture_variants::Selection;
///
/// let selection = Selection::new()
///     .with("variant", "outline")
///     .with_optional("size", None::<&str>);
///
/// assert_eq!(selection.get("variant"), Some("outline"));
/// assert_eq!(selection.get("size"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    choices: BTreeMap<String, Choice>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `value` for `axis`, replacing any earlier choice.
    pub fn with(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        self.choices
            .insert(axis.into(), Choice::Value(value.into()));
        self
    }

    /// Marks `axis` as explicitly unset.
    pub fn unset(mut self, axis: impl Into<String>) -> Self {
        self.choices.insert(axis.into(), Choice::Unset);
        self
    }

    /// Selects `value` when present, otherwise marks the axis unset.
    ///
    /// Mirrors optional component props, where an omitted prop falls back to
    /// the axis default.
    pub fn with_optional<S: Into<String>>(mut self, axis: impl Into<String>, value: Option<S>) -> Self {
        self.choices.insert(axis.into(), Choice::from(value));
        self
    }

    /// Returns the selected value name for `axis`, if one was chosen.
    pub fn get(&self, axis: &str) -> Option<&str> {
        self.choices.get(axis).and_then(Choice::as_value)
    }

    pub fn choice(&self, axis: &str) -> Option<&Choice> {
        self.choices.get(axis)
    }

    /// Iterates over `(axis, choice)` pairs ordered by axis name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Choice)> {
        self.choices.iter().map(|(axis, choice)| (axis.as_str(), choice))
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Selection
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Selection::new(), |selection, (axis, value)| selection.with(axis, value))
    }
}
