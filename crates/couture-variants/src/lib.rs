//! # Couture Variants
//!
//! Variant schemas and conflict-aware class merging for component styling.
//!
//! A component declares a base appearance and a set of named *variant axes*
//! (`variant`, `size`, `rounded`, ...). Each axis maps a closed set of values
//! to style fragments and names a default. Rendering a component is then two
//! pure steps:
//!
//! 1. **Resolution** ([`VariantSchema::resolve`]): the caller's [`Selection`]
//!    picks one value per axis. Missing, unset, or unknown values fall back to
//!    the axis default, so a typo in a cosmetic prop never breaks rendering.
//! 2. **Merging** ([`ClassMerger`]): base fragments, resolved fragments and the
//!    caller's raw override are combined into one class string. Later tokens
//!    replace earlier ones only when the [`PropertyGroups`] table puts them in
//!    the same property group; exact duplicates collapse to their first
//!    position.
//!
//! Neither step keeps state between calls. Schemas and group tables are
//! validated once when built and are read-only afterwards.
//!
//! ## Quick Example
//!
//! ```rust
//! use couture_variants::{Axis, ComponentStyle, PropertyGroups, Selection, VariantSchema};
//!
//! let schema = VariantSchema::builder()
//!     .axis(
//!         Axis::new("size")
//!             .value("sm", "h-9 px-4 rounded-lg")
//!             .value("md", "h-11 px-6 rounded-lg")
//!             .default_value("md"),
//!     )
//!     .axis(
//!         Axis::new("rounded")
//!             .value("default", "")
//!             .value("full", "rounded-full")
//!             .default_value("default"),
//!     )
//!     .build()?;
//!
//! let groups = PropertyGroups::builder()
//!     .group("border-radius", ["rounded-lg", "rounded-full"])
//!     .build()?;
//!
//! let button = ComponentStyle::new("button", "inline-flex font-bold", schema);
//! let selection = Selection::new().with("size", "sm").with("rounded", "full");
//!
//! assert_eq!(
//!     button.classes(&selection, None, &groups),
//!     "inline-flex font-bold h-9 px-4 rounded-full"
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Strict Mode
//!
//! [`VariantSchema::resolve_strict`] and [`ComponentStyle::classes_strict`]
//! report unknown axes and values as [`SelectionErrors`] instead of falling
//! back. Use them in development tooling; the lenient path is unchanged.

mod component;
mod fragment;
mod groups;
mod merge;
mod resolve;
mod schema;
mod selection;

pub use component::ComponentStyle;
pub use fragment::{tokenize, FragmentSet};
pub use groups::{GroupError, PropertyGroups, PropertyGroupsBuilder};
pub use merge::ClassMerger;
pub use resolve::{ResolvedAxis, ResolvedFragments, SelectionError, SelectionErrors};
pub use schema::{Axis, SchemaBuilder, SchemaError, VariantAxis, VariantSchema};
pub use selection::{Choice, Selection};
