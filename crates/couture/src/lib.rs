//! # Couture
//!
//! Style declarations for the Golden Air UI kit, resolved with
//! [`couture_variants`].
//!
//! Every component exposes a `classes(selection, class_name)` function that
//! returns the final class string for the rendering layer: base classes, then
//! the selected (or default) value of each variant axis, then the caller's
//! `class_name`. Conflicts are settled with the kit's property-group
//! vocabulary, so a caller's `bg-white` replaces the variant's `bg-primary`
//! while leaving `text-white` alone.
//!
//! ```rust
//! use couture::components::button;
//! use couture::Selection;
//!
//! let selection = Selection::new().with("variant", "ghost").with("size", "sm");
//! let classes = button::classes(&selection, Some("rounded-full"));
//!
//! assert!(classes.contains("text-primary hover:text-primary/80"));
//! assert!(classes.ends_with("h-9 px-4 text-sm rounded-full"));
//! ```
//!
//! Unknown variant values never fail; they fall back to the axis default.
//! Use [`Component::classes_strict`] to surface them during development.

pub mod components;
mod vocabulary;

pub use components::{Component, UnknownComponent};
pub use couture_variants::{Selection, SelectionError, SelectionErrors};
pub use vocabulary::{cn, merger, property_groups};
