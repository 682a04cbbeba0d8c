//! Variant axes and their fluent builder.

use super::error::SchemaError;
use crate::fragment::FragmentSet;

/// A validated variant axis: a closed set of named values, each mapped to a
/// [`FragmentSet`], plus the value used when the caller selects nothing.
///
/// Values keep their declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantAxis {
    name: String,
    values: Vec<(String, FragmentSet)>,
    default_index: usize,
}

impl VariantAxis {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the value applied when the selection is unset or invalid.
    pub fn default_value(&self) -> &str {
        &self.values[self.default_index].0
    }

    /// Fragments of the default value.
    pub fn default_fragments(&self) -> &FragmentSet {
        &self.values[self.default_index].1
    }

    /// Iterates over `(value, fragments)` pairs in declaration order.
    pub fn values(&self) -> impl Iterator<Item = (&str, &FragmentSet)> {
        self.values
            .iter()
            .map(|(name, fragments)| (name.as_str(), fragments))
    }

    pub fn value_names(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(name, _)| name.as_str())
    }

    /// Returns the fragments of `value`, or `None` if the axis does not declare it.
    pub fn get(&self, value: &str) -> Option<&FragmentSet> {
        self.lookup(value).map(|(_, fragments)| fragments)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.lookup(value).is_some()
    }

    /// Like [`get`](Self::get), but also returns the axis-owned value name.
    pub(crate) fn lookup(&self, value: &str) -> Option<(&str, &FragmentSet)> {
        self.values
            .iter()
            .find(|(name, _)| name == value)
            .map(|(name, fragments)| (name.as_str(), fragments))
    }
}

/// Builder for a [`VariantAxis`].
///
/// # Example
///
/// ```rust
/// use couture_variants::{Axis, VariantSchema};
///
/// let schema = VariantSchema::builder()
///     .axis(
///         Axis::new("size")
///             .value("sm", "h-9 px-4")
///             .value("md", "h-11 px-6")
///             .default_value("md"),
///     )
///     .build()
///     .unwrap();
///
/// assert_eq!(schema.axes()[0].default_value(), "md");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Axis {
    name: String,
    values: Vec<(String, FragmentSet)>,
    default: Option<String>,
}

impl Axis {
    /// Starts an axis with the given name and no values.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
            default: None,
        }
    }

    /// Declares a value, returning the updated builder for chaining.
    ///
    /// `fragments` accepts a class string (`"h-9 px-4"`) or an already-built
    /// [`FragmentSet`]. An empty string is a valid value that contributes nothing.
    pub fn value(mut self, name: impl Into<String>, fragments: impl Into<FragmentSet>) -> Self {
        self.values.push((name.into(), fragments.into()));
        self
    }

    /// Sets the value used when the caller selects nothing.
    pub fn default_value(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn build(self) -> Result<VariantAxis, SchemaError> {
        if self.name.trim().is_empty() {
            return Err(SchemaError::EmptyAxisName);
        }

        for (i, (value, _)) in self.values.iter().enumerate() {
            if value.trim().is_empty() {
                return Err(SchemaError::EmptyValueName {
                    axis: self.name.clone(),
                });
            }
            if self.values[..i].iter().any(|(earlier, _)| earlier == value) {
                return Err(SchemaError::DuplicateValue {
                    axis: self.name.clone(),
                    value: value.clone(),
                });
            }
        }

        let default = self
            .default
            .ok_or_else(|| SchemaError::MissingDefault(self.name.clone()))?;
        let default_index = self
            .values
            .iter()
            .position(|(value, _)| *value == default)
            .ok_or_else(|| SchemaError::UnknownDefault {
                axis: self.name.clone(),
                default,
            })?;

        Ok(VariantAxis {
            name: self.name,
            values: self.values,
            default_index,
        })
    }
}
