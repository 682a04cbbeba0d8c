//! Kit components and their style declarations.
//!
//! Each module owns one [`ComponentStyle`], built once on first use, plus the
//! component-specific helpers (presets, sections, size predicates).
//! [`Component`] names them uniformly for tooling.

pub mod badge;
pub mod button;
pub mod card;
pub mod icon;
pub mod input;

use std::fmt;
use std::str::FromStr;

use couture_variants::{ComponentStyle, Selection, SelectionErrors};
use thiserror::Error;

use crate::vocabulary::property_groups;

/// A component with a variant schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Button,
    Badge,
    Card,
    Input,
    Icon,
}

impl Component {
    pub const ALL: [Component; 5] = [
        Component::Button,
        Component::Badge,
        Component::Card,
        Component::Input,
        Component::Icon,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Component::Button => "button",
            Component::Badge => "badge",
            Component::Card => "card",
            Component::Input => "input",
            Component::Icon => "icon",
        }
    }

    pub fn style(self) -> &'static ComponentStyle {
        match self {
            Component::Button => button::style(),
            Component::Badge => badge::style(),
            Component::Card => card::style(),
            Component::Input => input::style(),
            Component::Icon => icon::style(),
        }
    }

    /// Resolves `selection` leniently and merges `class_name` last.
    pub fn classes(self, selection: &Selection, class_name: Option<&str>) -> String {
        self.style()
            .classes(selection, class_name, property_groups())
    }

    /// Like [`classes`](Self::classes), but rejects unknown axes and values.
    pub fn classes_strict(
        self,
        selection: &Selection,
        class_name: Option<&str>,
    ) -> Result<String, SelectionErrors> {
        self.style()
            .classes_strict(selection, class_name, property_groups())
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown component name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown component '{name}' (expected one of: button, badge, card, input, icon)")]
pub struct UnknownComponent {
    name: String,
}

impl FromStr for Component {
    type Err = UnknownComponent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Component::ALL
            .into_iter()
            .find(|component| component.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownComponent {
                name: wanted.to_string(),
            })
    }
}
