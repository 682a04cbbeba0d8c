//! Text input styles and the parts around the field.
//!
//! The size axis is named `inputSize`, leaving `size` to the native
//! attribute of the element.

use couture_variants::{Axis, ComponentStyle, Selection, VariantSchema};
use once_cell::sync::Lazy;

use crate::vocabulary::{cn, property_groups};

const FIELD_STATES: &str = "focus:ring-2 focus:ring-primary/50 focus:border-primary \
    placeholder:text-gray-400 dark:placeholder:text-text-muted text-gray-900 dark:text-white";

static INPUT: Lazy<ComponentStyle> = Lazy::new(|| {
    let schema = VariantSchema::builder()
        .axis(
            Axis::new("variant")
                .value(
                    "default",
                    format!(
                        "bg-white dark:bg-surface-dark border border-gray-200 \
                         dark:border-[#324467] rounded-lg {FIELD_STATES}"
                    ),
                )
                .value(
                    "glass",
                    "bg-white/5 backdrop-blur-md border border-white/10 rounded-lg \
                     focus:ring-2 focus:ring-primary/50 focus:border-primary/50 \
                     placeholder:text-white/40 text-white",
                )
                .value(
                    "search",
                    format!(
                        "bg-white dark:bg-[#1c1f27] border border-gray-200 \
                         dark:border-[#3b4354] rounded-full {FIELD_STATES}"
                    ),
                )
                .default_value("default"),
        )
        .axis(
            Axis::new("inputSize")
                .value("sm", "h-9 px-3 text-sm")
                .value("md", "h-11 px-4 text-sm")
                .value("lg", "h-12 px-4 text-base")
                .value("xl", "h-14 px-5 text-base")
                .default_value("md"),
        )
        .build()
        .expect("input variant schema is well-formed");
    ComponentStyle::new(
        "input",
        "w-full transition-all duration-200 focus:outline-none \
         disabled:opacity-50 disabled:cursor-not-allowed",
        schema,
    )
});

pub fn style() -> &'static ComponentStyle {
    &INPUT
}

pub fn classes(selection: &Selection, class_name: Option<&str>) -> String {
    style().classes(selection, class_name, property_groups())
}

/// Elements rendered around the input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputPart {
    Wrapper,
    Label,
    LeftIcon,
    RightIcon,
    Error,
    Hint,
}

impl InputPart {
    pub fn base(self) -> &'static str {
        match self {
            InputPart::Wrapper => "w-full",
            InputPart::Label => "block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2",
            InputPart::LeftIcon => {
                "absolute left-3 top-1/2 -translate-y-1/2 text-gray-400 \
                 dark:text-text-muted pointer-events-none"
            }
            InputPart::RightIcon => {
                "absolute right-3 top-1/2 -translate-y-1/2 text-gray-400 \
                 dark:text-text-muted hover:text-gray-600 dark:hover:text-white transition-colors"
            }
            InputPart::Error => "mt-1.5 text-sm text-red-500 flex items-center gap-1",
            InputPart::Hint => "mt-1.5 text-sm text-gray-500 dark:text-text-muted",
        }
    }

    pub fn classes(self, class_name: Option<&str>) -> String {
        cn([self.base(), class_name.unwrap_or_default()])
    }
}

/// The message part shown under the field: an error replaces the hint.
pub fn message_part(has_error: bool, has_hint: bool) -> Option<InputPart> {
    match (has_error, has_hint) {
        (true, _) => Some(InputPart::Error),
        (false, true) => Some(InputPart::Hint),
        (false, false) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_input() {
        let classes = classes(&Selection::new(), None);
        assert!(classes.starts_with("w-full transition-all duration-200"));
        assert!(classes.contains("rounded-lg focus:ring-2"));
        assert!(classes.ends_with("h-11 px-4 text-sm"));
    }

    #[test]
    fn test_size_axis_is_named_input_size() {
        let lenient = classes(&Selection::new().with("size", "xl"), None);
        assert!(lenient.ends_with("h-11 px-4 text-sm"));

        let sized = classes(&Selection::new().with("inputSize", "xl"), None);
        assert!(sized.ends_with("h-14 px-5 text-base"));
    }

    #[test]
    fn test_search_variant() {
        let classes = classes(&Selection::new().with("variant", "search"), None);
        assert!(classes.contains("rounded-full"));
        assert!(classes.contains("dark:border-[#3b4354]"));
        assert!(!classes.contains("rounded-lg"));
    }

    #[test]
    fn test_override_with_left_icon_padding() {
        let classes = classes(&Selection::new(), Some("px-10"));
        assert!(classes.ends_with("h-11 text-sm px-10"));
    }

    #[test]
    fn test_message_part() {
        assert_eq!(message_part(true, true), Some(InputPart::Error));
        assert_eq!(message_part(false, true), Some(InputPart::Hint));
        assert_eq!(message_part(false, false), None);
        assert_eq!(
            InputPart::Hint.classes(Some("text-red-500")),
            "mt-1.5 text-sm dark:text-text-muted text-red-500"
        );
    }
}
