//! Icon glyph sizing.
//!
//! The glyph lookup itself is external; this only decides the classes of the
//! glyph container and its font variation settings.

use couture_variants::{Axis, ComponentStyle, Selection, VariantSchema};
use once_cell::sync::Lazy;

use crate::vocabulary::property_groups;

static ICON: Lazy<ComponentStyle> = Lazy::new(|| {
    let schema = VariantSchema::builder()
        .axis(
            Axis::new("size")
                .value("xs", "text-[14px]")
                .value("sm", "text-[16px]")
                .value("md", "text-[20px]")
                .value("lg", "text-[24px]")
                .value("xl", "text-[28px]")
                .value("2xl", "text-[32px]")
                .value("3xl", "text-[40px]")
                .value("4xl", "text-[48px]")
                .default_value("md"),
        )
        .build()
        .expect("icon variant schema is well-formed");
    ComponentStyle::new("icon", "material-symbols-outlined select-none", schema)
});

pub fn style() -> &'static ComponentStyle {
    &ICON
}

pub fn classes(selection: &Selection, class_name: Option<&str>) -> String {
    style().classes(selection, class_name, property_groups())
}

/// `font-variation-settings` for a filled or outlined glyph.
pub fn font_variation_settings(filled: bool) -> &'static str {
    if filled {
        "'FILL' 1, 'wght' 400, 'GRAD' 0, 'opsz' 24"
    } else {
        "'FILL' 0, 'wght' 400, 'GRAD' 0, 'opsz' 24"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_sizes() {
        assert_eq!(
            classes(&Selection::new(), None),
            "material-symbols-outlined select-none text-[20px]"
        );
        assert_eq!(
            classes(&Selection::new().with("size", "2xl"), None),
            "material-symbols-outlined select-none text-[32px]"
        );
    }

    #[test]
    fn test_caller_size_wins() {
        assert_eq!(
            classes(&Selection::new().with("size", "xs"), Some("text-[48px] text-primary")),
            "material-symbols-outlined select-none text-[48px] text-primary"
        );
    }

    #[test]
    fn test_font_variation_settings() {
        assert!(font_variation_settings(true).starts_with("'FILL' 1"));
        assert!(font_variation_settings(false).starts_with("'FILL' 0"));
    }
}
