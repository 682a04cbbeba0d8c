//! Button styles.
//!
//! Axes: `variant` (primary by default), `size` (md by default) and `rounded`.
//! `rounded=full` overrides the corner radius every size declares.

use couture_variants::{Axis, ComponentStyle, Selection, VariantSchema};
use once_cell::sync::Lazy;

use crate::vocabulary::property_groups;

const BASE: &str = "inline-flex items-center justify-center gap-2 font-bold \
    transition-all duration-300 focus:outline-none focus:ring-2 focus:ring-primary/50 \
    focus:ring-offset-2 focus:ring-offset-background-dark \
    disabled:opacity-50 disabled:pointer-events-none";

/// Sizes that render a square, icon-only button.
pub const ICON_ONLY_SIZES: [&str; 3] = ["icon", "icon-sm", "icon-lg"];

static BUTTON: Lazy<ComponentStyle> = Lazy::new(|| {
    let schema = VariantSchema::builder()
        .axis(
            Axis::new("variant")
                .value(
                    "primary",
                    "bg-primary hover:bg-primary/90 text-white shadow-lg shadow-primary/20 \
                     hover:shadow-xl hover:shadow-primary/30",
                )
                .value(
                    "secondary",
                    "bg-white/5 backdrop-blur-sm border border-white/10 text-white \
                     hover:bg-white/10 hover:border-white/20",
                )
                .value(
                    "outline",
                    "border-2 border-primary text-primary hover:bg-primary hover:text-white",
                )
                .value("ghost", "text-primary hover:text-primary/80 hover:bg-primary/5")
                .value("link", "text-primary underline-offset-4 hover:underline")
                .value(
                    "icon",
                    "bg-white/10 backdrop-blur-md text-white hover:bg-white hover:text-primary",
                )
                .value(
                    "icon-ghost",
                    "text-white/70 hover:text-white hover:bg-white/10 backdrop-blur-sm",
                )
                .default_value("primary"),
        )
        .axis(
            Axis::new("size")
                .value("sm", "h-9 px-4 text-sm rounded-lg")
                .value("md", "h-11 px-6 text-sm rounded-lg")
                .value("lg", "h-12 px-8 text-base rounded-lg")
                .value("xl", "h-14 px-10 text-base rounded-xl")
                .value(
                    "icon",
                    "h-10 w-10 rounded-full inline-flex items-center justify-center",
                )
                .value(
                    "icon-sm",
                    "h-8 w-8 rounded-full inline-flex items-center justify-center",
                )
                .value(
                    "icon-lg",
                    "h-12 w-12 rounded-full inline-flex items-center justify-center",
                )
                .default_value("md"),
        )
        .axis(
            Axis::new("rounded")
                .value("default", "")
                .value("full", "rounded-full")
                .default_value("default"),
        )
        .build()
        .expect("button variant schema is well-formed");
    ComponentStyle::new("button", BASE, schema)
});

pub fn style() -> &'static ComponentStyle {
    &BUTTON
}

/// Class string for a button with the given selection and caller classes.
pub fn classes(selection: &Selection, class_name: Option<&str>) -> String {
    style().classes(selection, class_name, property_groups())
}

/// Whether the selection resolves to an icon-only size.
///
/// Icon-only buttons render their leading icon alone and drop the label
/// icons. An invalid size resolves to the default and is not icon-only.
pub fn is_icon_only(selection: &Selection) -> bool {
    style()
        .schema()
        .resolve(selection)
        .get("size")
        .is_some_and(|size| ICON_ONLY_SIZES.contains(&size.value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_button() {
        let classes = classes(&Selection::new(), None);
        assert!(classes.starts_with("inline-flex items-center justify-center gap-2 font-bold"));
        assert!(classes.contains("bg-primary"));
        assert!(classes.ends_with("h-11 px-6 text-sm rounded-lg"));
    }

    #[test]
    fn test_rounded_full_overrides_size_radius() {
        let selection = Selection::new().with("size", "sm").with("rounded", "full");
        let classes = classes(&selection, None);
        assert!(classes.ends_with("h-9 px-4 text-sm rounded-full"));
        assert!(!classes.contains("rounded-lg"));
    }

    #[test]
    fn test_icon_size_dedupes_layout_classes() {
        let selection = Selection::new().with("variant", "icon").with("size", "icon");
        let classes = classes(&selection, None);
        assert_eq!(classes.matches("inline-flex").count(), 1);
        assert_eq!(classes.matches("justify-center").count(), 1);
        assert!(classes.ends_with("h-10 w-10 rounded-full"));
    }

    #[test]
    fn test_override_replaces_border_width() {
        let classes = classes(&Selection::new().with("variant", "outline"), Some("border"));
        assert!(!classes.contains("border-2"));
        assert!(classes.ends_with("rounded-lg border"));
    }

    #[test]
    fn test_is_icon_only() {
        assert!(is_icon_only(&Selection::new().with("size", "icon-sm")));
        assert!(!is_icon_only(&Selection::new().with("size", "lg")));
        assert!(!is_icon_only(&Selection::new().with("size", "icon-xl")));
        assert!(!is_icon_only(&Selection::new()));
    }
}
