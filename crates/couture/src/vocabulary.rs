//! The property-group vocabulary shared by every kit component.
//!
//! The table lives in `styles/property-groups.yaml` and is embedded at
//! compile time, then parsed once on first use.

use couture_variants::{ClassMerger, PropertyGroups};
use once_cell::sync::Lazy;
use tracing::debug;

const PROPERTY_GROUPS_YAML: &str = include_str!("../styles/property-groups.yaml");

static PROPERTY_GROUPS: Lazy<PropertyGroups> = Lazy::new(|| {
    let groups = PropertyGroups::from_yaml(PROPERTY_GROUPS_YAML)
        .expect("embedded property-group table is valid");
    debug!(tokens = groups.len(), "loaded kit property groups");
    groups
});

/// The kit's property-group table.
pub fn property_groups() -> &'static PropertyGroups {
    &PROPERTY_GROUPS
}

/// A merger bound to the kit vocabulary.
pub fn merger() -> ClassMerger<'static> {
    ClassMerger::new(property_groups())
}

/// Merges class strings with the kit vocabulary; later parts win conflicts.
///
/// ```rust
/// use couture::cn;
///
/// assert_eq!(cn(["p-6 pt-0", "p-4 text-white"]), "pt-0 p-4 text-white");
/// ```
pub fn cn<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    merger().join(parts)
}
