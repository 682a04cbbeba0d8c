//! Badge styles and the labelled badge presets.

use couture_variants::{Axis, ComponentStyle, Selection, VariantSchema};
use once_cell::sync::Lazy;

use crate::vocabulary::property_groups;

static BADGE: Lazy<ComponentStyle> = Lazy::new(|| {
    let schema = VariantSchema::builder()
        .axis(
            Axis::new("variant")
                .value(
                    "default",
                    "bg-white/10 backdrop-blur-md text-white border border-white/20",
                )
                .value("primary", "bg-primary/80 backdrop-blur-md text-white")
                .value(
                    "gold",
                    "bg-gold-accent/20 text-gold-accent border border-gold-accent/30",
                )
                .value(
                    "success",
                    "bg-emerald-500/20 text-emerald-400 border border-emerald-500/30",
                )
                .value(
                    "tag",
                    "bg-black/50 backdrop-blur-md text-white border border-white/10 \
                     normal-case tracking-normal",
                )
                .value("label", "bg-primary/20 text-primary normal-case tracking-normal")
                .value(
                    "outline",
                    "bg-transparent border border-white/30 text-white backdrop-blur-sm",
                )
                .value("solid", "bg-surface-dark text-white border border-white/5")
                .default_value("default"),
        )
        .axis(
            Axis::new("size")
                .value("xs", "text-[9px] px-2 py-0.5 rounded")
                .value("sm", "text-[10px] px-2.5 py-1 rounded-md")
                .value("md", "text-[10px] px-3 py-1.5 rounded-full")
                .value("lg", "text-xs px-4 py-2 rounded-full")
                .default_value("md"),
        )
        .build()
        .expect("badge variant schema is well-formed");
    ComponentStyle::new(
        "badge",
        "inline-flex items-center gap-1.5 font-bold uppercase tracking-widest",
        schema,
    )
});

pub fn style() -> &'static ComponentStyle {
    &BADGE
}

pub fn classes(selection: &Selection, class_name: Option<&str>) -> String {
    style().classes(selection, class_name, property_groups())
}

/// Badges with a fixed variant, icon and label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgePreset {
    Exclusive,
    Bestseller,
    New,
    Verified,
}

impl BadgePreset {
    pub const ALL: [BadgePreset; 4] = [
        BadgePreset::Exclusive,
        BadgePreset::Bestseller,
        BadgePreset::New,
        BadgePreset::Verified,
    ];

    /// The `variant` value this preset forces.
    pub fn variant(self) -> &'static str {
        match self {
            BadgePreset::Exclusive => "default",
            BadgePreset::Bestseller => "primary",
            BadgePreset::New => "gold",
            BadgePreset::Verified => "success",
        }
    }

    /// Leading icon name, if the preset shows one.
    pub fn icon(self) -> Option<&'static str> {
        match self {
            BadgePreset::Exclusive => Some("auto_awesome"),
            BadgePreset::Bestseller => Some("star"),
            BadgePreset::New => None,
            BadgePreset::Verified => Some("verified"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BadgePreset::Exclusive => "Exclusif",
            BadgePreset::Bestseller => "Meilleure Vente",
            BadgePreset::New => "Nouveau",
            BadgePreset::Verified => "Vérifié",
        }
    }

    /// Selection for this preset. The size stays caller-controlled; the
    /// variant cannot be overridden.
    pub fn selection(self, size: Option<&str>) -> Selection {
        Selection::new()
            .with_optional("size", size)
            .with("variant", self.variant())
    }

    pub fn classes(self, size: Option<&str>, class_name: Option<&str>) -> String {
        classes(&self.selection(size), class_name)
    }
}
