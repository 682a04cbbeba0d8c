//! Variant resolution: mapping a selection onto a schema.
//!
//! Resolution never fails. For every axis, in schema order, the selected
//! value's fragments are used when the value exists on the axis; anything else
//! (no choice, an explicit unset, a value outside the axis) falls back to the
//! axis default. Axis names the schema does not declare are ignored.
//!
//! [`VariantSchema::resolve_strict`] performs the same resolution but reports
//! unknown axes and values instead of falling back, which is useful while
//! developing component call sites.

use thiserror::Error;
use tracing::debug;

use crate::fragment::FragmentSet;
use crate::schema::{VariantAxis, VariantSchema};
use crate::selection::{Choice, Selection};

/// The outcome of resolving one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedAxis<'a> {
    /// Axis name.
    pub axis: &'a str,
    /// Value whose fragments were applied.
    pub value: &'a str,
    pub fragments: &'a FragmentSet,
    /// `true` when the axis default was applied instead of a selected value.
    pub defaulted: bool,
}

/// One resolved [`FragmentSet`] per schema axis, in schema order.
///
/// Borrows from the schema it was resolved against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedFragments<'a> {
    entries: Vec<ResolvedAxis<'a>>,
}

impl<'a> ResolvedFragments<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedAxis<'a>> {
        self.entries.iter()
    }

    /// The resolved entry for `axis`, if the schema declares it.
    pub fn get(&self, axis: &str) -> Option<&ResolvedAxis<'a>> {
        self.entries.iter().find(|entry| entry.axis == axis)
    }

    /// Fragment sets in schema order, one per axis.
    pub fn fragment_sets(&self) -> impl Iterator<Item = &'a FragmentSet> + '_ {
        self.entries.iter().map(|entry| entry.fragments)
    }

    /// All tokens of all axes, flattened in schema order.
    pub fn tokens(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.fragment_sets().flat_map(FragmentSet::tokens)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A problem found by strict resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The selection names an axis the schema does not declare.
    #[error("unknown variant axis '{axis}'")]
    UnknownAxis { axis: String },
    /// The selected value is not one of the axis's values.
    #[error("'{value}' is not a value of axis '{axis}' (expected one of: {})", .allowed.join(", "))]
    UnknownValue {
        axis: String,
        value: String,
        allowed: Vec<String>,
    },
}

/// Every problem found by strict resolution, ordered by axis name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid variant selection: {}", join_errors(.0))]
pub struct SelectionErrors(Vec<SelectionError>);

impl SelectionErrors {
    pub fn errors(&self) -> &[SelectionError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for SelectionErrors {
    type Item = SelectionError;
    type IntoIter = std::vec::IntoIter<SelectionError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

fn join_errors(errors: &[SelectionError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl VariantSchema {
    /// Resolves `selection` against this schema, falling back to axis
    /// defaults wherever the selection is missing or invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use couture_variants::{Axis, Selection, VariantSchema};
    ///
    /// let schema = VariantSchema::builder()
    ///     .axis(Axis::new("size").value("sm", "h-9").value("md", "h-11").default_value("md"))
    ///     .build()
    ///     .unwrap();
    ///
    /// let resolved = schema.resolve(&Selection::new().with("size", "lg"));
    /// let entry = resolved.get("size").unwrap();
    /// assert_eq!(entry.value, "md");
    /// assert!(entry.defaulted);
    /// ```
    pub fn resolve(&self, selection: &Selection) -> ResolvedFragments<'_> {
        let entries = self
            .axes()
            .iter()
            .map(|axis| resolve_axis(axis, selection))
            .collect();
        ResolvedFragments { entries }
    }

    /// Resolves `selection`, reporting unknown axes and values as errors.
    ///
    /// Explicitly unset axes are not errors. On success the result is
    /// identical to [`resolve`](Self::resolve).
    pub fn resolve_strict(
        &self,
        selection: &Selection,
    ) -> Result<ResolvedFragments<'_>, SelectionErrors> {
        let errors: Vec<SelectionError> = selection
            .iter()
            .filter_map(|(name, choice)| {
                let Some(axis) = self.axis(name) else {
                    return Some(SelectionError::UnknownAxis {
                        axis: name.to_string(),
                    });
                };
                match choice {
                    Choice::Value(value) if !axis.contains(value) => {
                        Some(SelectionError::UnknownValue {
                            axis: name.to_string(),
                            value: value.clone(),
                            allowed: axis.value_names().map(str::to_owned).collect(),
                        })
                    }
                    _ => None,
                }
            })
            .collect();

        if errors.is_empty() {
            Ok(self.resolve(selection))
        } else {
            Err(SelectionErrors(errors))
        }
    }
}

fn resolve_axis<'a>(axis: &'a VariantAxis, selection: &Selection) -> ResolvedAxis<'a> {
    if let Some(selected) = selection.get(axis.name()) {
        if let Some((value, fragments)) = axis.lookup(selected) {
            return ResolvedAxis {
                axis: axis.name(),
                value,
                fragments,
                defaulted: false,
            };
        }
        debug!(
            axis = axis.name(),
            value = selected,
            default = axis.default_value(),
            "unknown variant value, falling back to default"
        );
    }

    ResolvedAxis {
        axis: axis.name(),
        value: axis.default_value(),
        fragments: axis.default_fragments(),
        defaulted: true,
    }
}
