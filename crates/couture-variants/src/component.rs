//! Component styles: a base appearance plus a variant schema.

use serde::Deserialize;
use serde_yaml::Mapping;

use crate::fragment::FragmentSet;
use crate::groups::PropertyGroups;
use crate::merge::ClassMerger;
use crate::resolve::SelectionErrors;
use crate::schema::{SchemaError, VariantSchema};
use crate::selection::Selection;

/// The complete style declaration of a component.
///
/// Combines the base fragments every instance receives with the component's
/// [`VariantSchema`]. [`classes`](Self::classes) runs resolution and merging
/// in one step.
///
/// # Example
///
/// ```rust
/// use couture_variants::{Axis, ComponentStyle, PropertyGroups, Selection, VariantSchema};
///
/// let schema = VariantSchema::builder()
///     .axis(Axis::new("size").value("sm", "h-9").value("md", "h-11").default_value("md"))
///     .axis(
///         Axis::new("variant")
///             .value("primary", "bg-blue")
///             .value("outline", "border-blue")
///             .default_value("primary"),
///     )
///     .build()
///     .unwrap();
/// let button = ComponentStyle::new("button", "inline-flex", schema);
/// let groups = PropertyGroups::new();
///
/// let classes = button.classes(&Selection::new().with("size", "lg"), Some("  text-white  "), &groups);
/// assert_eq!(classes, "inline-flex h-11 bg-blue text-white");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentStyle {
    name: String,
    base: FragmentSet,
    schema: VariantSchema,
}

impl ComponentStyle {
    pub fn new(name: impl Into<String>, base: impl Into<FragmentSet>, schema: VariantSchema) -> Self {
        Self {
            name: name.into(),
            base: base.into(),
            schema,
        }
    }

    /// Parses a component declaration from YAML.
    ///
    /// ```rust
    /// use couture_variants::ComponentStyle;
    ///
    /// let card = ComponentStyle::from_yaml(r#"
    /// name: card
    /// base: overflow-hidden transition-all
    /// variants:
    ///   padding:
    ///     default: none
    ///     values:
    ///       none: ""
    ///       sm: p-4
    /// "#).unwrap();
    ///
    /// assert_eq!(card.name(), "card");
    /// assert_eq!(card.schema().len(), 1);
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct ComponentDef {
            name: String,
            #[serde(default)]
            base: FragmentSet,
            #[serde(default)]
            variants: Mapping,
        }

        let def: ComponentDef = serde_yaml::from_str(yaml)?;
        Ok(Self {
            name: def.name,
            base: def.base,
            schema: VariantSchema::from_mapping(def.variants)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base(&self) -> &FragmentSet {
        &self.base
    }

    pub fn schema(&self) -> &VariantSchema {
        &self.schema
    }

    /// Resolves `selection` leniently and merges base, variants and
    /// `raw_override` into the final class string.
    pub fn classes(
        &self,
        selection: &Selection,
        raw_override: Option<&str>,
        groups: &PropertyGroups,
    ) -> String {
        let resolved = self.schema.resolve(selection);
        ClassMerger::new(groups).merge(&self.base, &resolved, raw_override)
    }

    /// Like [`classes`](Self::classes), but rejects unknown axes and values.
    pub fn classes_strict(
        &self,
        selection: &Selection,
        raw_override: Option<&str>,
        groups: &PropertyGroups,
    ) -> Result<String, SelectionErrors> {
        let resolved = self.schema.resolve_strict(selection)?;
        Ok(ClassMerger::new(groups).merge(&self.base, &resolved, raw_override))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Axis;

    fn badge() -> ComponentStyle {
        let schema = VariantSchema::builder()
            .axis(
                Axis::new("variant")
                    .value("default", "bg-white/10 text-white")
                    .value("tag", "bg-black/50 normal-case")
                    .default_value("default"),
            )
            .build()
            .unwrap();
        ComponentStyle::new("badge", "inline-flex uppercase", schema)
    }

    fn groups() -> PropertyGroups {
        PropertyGroups::builder()
            .group("text-transform", ["uppercase", "normal-case"])
            .group("background-color", ["bg-white/10", "bg-black/50"])
            .build()
            .unwrap()
    }

    #[test]
    fn test_variant_overrides_base() {
        let classes = badge().classes(&Selection::new().with("variant", "tag"), None, &groups());
        assert_eq!(classes, "inline-flex bg-black/50 normal-case");
    }

    #[test]
    fn test_override_replaces_variant() {
        let classes = badge().classes(&Selection::new(), Some("bg-black/50"), &groups());
        assert_eq!(classes, "inline-flex uppercase text-white bg-black/50");
    }

    #[test]
    fn test_strict_matches_lenient_on_valid_input() {
        let badge = badge();
        let selection = Selection::new().with("variant", "tag");
        assert_eq!(
            badge.classes_strict(&selection, Some("p-1"), &groups()).unwrap(),
            badge.classes(&selection, Some("p-1"), &groups())
        );
    }

    #[test]
    fn test_strict_rejects_unknown_value() {
        let result = badge().classes_strict(&Selection::new().with("variant", "neon"), None, &groups());
        assert!(result.is_err());
    }

    #[test]
    fn test_from_yaml_defaults() {
        let component = ComponentStyle::from_yaml("name: divider").unwrap();
        assert!(component.base().is_empty());
        assert!(component.schema().is_empty());
        assert_eq!(component.classes(&Selection::new(), None, &PropertyGroups::new()), "");
    }

    #[test]
    fn test_from_yaml_rejects_unknown_fields() {
        let err = ComponentStyle::from_yaml("name: x\nbase_classes: p-4").unwrap_err();
        assert!(matches!(err, SchemaError::Yaml(_)));
    }
}
