//! Card styles, card sections and card images.

use couture_variants::{Axis, ComponentStyle, Selection, VariantSchema};
use once_cell::sync::Lazy;

use crate::vocabulary::{cn, property_groups};

static CARD: Lazy<ComponentStyle> = Lazy::new(|| {
    let schema = VariantSchema::builder()
        .axis(
            Axis::new("variant")
                .value(
                    "default",
                    "bg-white dark:bg-surface-dark border border-gray-200 \
                     dark:border-white/5 rounded-xl",
                )
                .value(
                    "glass",
                    "bg-white/5 dark:bg-[#1c1f27]/60 backdrop-blur-xl border border-white/10 \
                     rounded-2xl",
                )
                .value(
                    "elevated",
                    "bg-white dark:bg-surface-dark rounded-2xl shadow-xl shadow-black/5 \
                     dark:shadow-black/20 border border-gray-100 dark:border-[#232f48]",
                )
                .value(
                    "feature",
                    "bg-gray-50 dark:bg-[#1a2230] rounded-2xl border border-gray-200 \
                     dark:border-white/5 hover:border-primary/30 group",
                )
                .value("image", "rounded-2xl group cursor-pointer")
                .default_value("default"),
        )
        .axis(
            Axis::new("hover")
                .value("none", "")
                .value(
                    "lift",
                    "hover:-translate-y-1 hover:shadow-2xl hover:shadow-primary/10",
                )
                .value(
                    "glow",
                    "hover:shadow-2xl hover:shadow-primary/20 hover:border-primary/20",
                )
                .value("scale", "hover:scale-[1.02]")
                .default_value("none"),
        )
        .axis(
            Axis::new("padding")
                .value("none", "")
                .value("sm", "p-4")
                .value("md", "p-6")
                .value("lg", "p-8")
                .value("xl", "p-10")
                .default_value("none"),
        )
        .build()
        .expect("card variant schema is well-formed");
    ComponentStyle::new("card", "overflow-hidden transition-all duration-300", schema)
});

pub fn style() -> &'static ComponentStyle {
    &CARD
}

pub fn classes(selection: &Selection, class_name: Option<&str>) -> String {
    style().classes(selection, class_name, property_groups())
}

/// Sections laid out inside a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardPart {
    Header,
    Title,
    Description,
    Content,
    Footer,
}

impl CardPart {
    pub const ALL: [CardPart; 5] = [
        CardPart::Header,
        CardPart::Title,
        CardPart::Description,
        CardPart::Content,
        CardPart::Footer,
    ];

    pub fn base(self) -> &'static str {
        match self {
            CardPart::Header => "flex flex-col space-y-1.5 p-6",
            CardPart::Title => "text-xl font-bold leading-tight text-gray-900 dark:text-white",
            CardPart::Description => "text-sm text-gray-500 dark:text-text-muted",
            CardPart::Content => "p-6 pt-0",
            CardPart::Footer => "flex items-center p-6 pt-0",
        }
    }

    pub fn classes(self, class_name: Option<&str>) -> String {
        cn([self.base(), class_name.unwrap_or_default()])
    }
}

/// Aspect ratio of a [card image](image_classes).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AspectRatio {
    Square,
    #[default]
    Video,
    Portrait,
    Wide,
}

impl AspectRatio {
    pub fn class(self) -> &'static str {
        match self {
            AspectRatio::Square => "aspect-square",
            AspectRatio::Video => "aspect-video",
            AspectRatio::Portrait => "aspect-[3/4]",
            AspectRatio::Wide => "aspect-[4/3]",
        }
    }
}

/// Classes of the `<img>` filling a card image frame.
pub const IMAGE_FILL: &str = "absolute inset-0 w-full h-full object-cover \
    transition-transform duration-700 group-hover:scale-110";

/// Classes of the overlay drawn over a card image.
pub const IMAGE_OVERLAY: &str = "absolute inset-0";

/// Classes of the container holding children over a card image.
pub const IMAGE_CAPTION: &str = "absolute inset-0 flex flex-col justify-end p-4";

/// Classes of a card image frame.
pub fn image_classes(aspect: AspectRatio, class_name: Option<&str>) -> String {
    cn([
        "relative overflow-hidden",
        aspect.class(),
        class_name.unwrap_or_default(),
    ])
}
