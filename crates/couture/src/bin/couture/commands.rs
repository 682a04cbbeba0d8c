//! Subcommand implementations. Each renders its output to a string.

use std::fmt::Write;

use anyhow::{Context, Result};
use console::style;
use couture::components::badge::BadgePreset;
use couture::{Component, Selection};
use serde::Serialize;

use crate::cli::Assignment;

/// Serializable view of one variant axis.
#[derive(Debug, Serialize)]
pub struct AxisSummary {
    pub name: String,
    pub default: String,
    pub values: Vec<ValueSummary>,
}

#[derive(Debug, Serialize)]
pub struct ValueSummary {
    pub name: String,
    pub classes: String,
}

pub fn selection_from(assignments: &[Assignment]) -> Selection {
    assignments.iter().fold(Selection::new(), |selection, assignment| {
        selection.with_optional(assignment.axis.as_str(), assignment.value.as_deref())
    })
}

pub fn render_classes(
    component: Component,
    assignments: &[Assignment],
    class: Option<&str>,
    strict: bool,
) -> Result<String> {
    let selection = selection_from(assignments);
    if strict {
        component
            .classes_strict(&selection, class)
            .with_context(|| format!("cannot resolve {component} classes"))
    } else {
        Ok(component.classes(&selection, class))
    }
}

pub fn axis_summaries(component: Component) -> Vec<AxisSummary> {
    component
        .style()
        .schema()
        .axes()
        .iter()
        .map(|axis| AxisSummary {
            name: axis.name().to_string(),
            default: axis.default_value().to_string(),
            values: axis
                .values()
                .map(|(name, fragments)| ValueSummary {
                    name: name.to_string(),
                    classes: fragments.to_string(),
                })
                .collect(),
        })
        .collect()
}

pub fn render_axes(component: Component, json: bool) -> Result<String> {
    let summaries = axis_summaries(component);
    if json {
        return serde_json::to_string_pretty(&summaries).context("failed to serialize axes");
    }

    let mut out = String::new();
    writeln!(out, "{}", style(component).bold().cyan())?;
    writeln!(out, "  {} {}", style("base").dim(), component.style().base())?;
    for axis in &summaries {
        writeln!(
            out,
            "  {} {}",
            style(&axis.name).bold(),
            style(format!("(default: {})", axis.default)).dim()
        )?;
        for value in &axis.values {
            let marker = if value.name == axis.default { "*" } else { " " };
            writeln!(out, "    {marker} {:<12} {}", value.name, value.classes)?;
        }
    }
    Ok(out)
}

pub fn render_showcase() -> Result<String> {
    let mut out = String::new();
    for component in Component::ALL {
        writeln!(out, "{}", style(component).bold().cyan())?;
        for axis in component.style().schema().axes() {
            for value in axis.value_names() {
                let selection = Selection::new().with(axis.name(), value);
                let label = format!("{}={}", axis.name(), value);
                writeln!(
                    out,
                    "  {:<20} {}",
                    style(label).yellow(),
                    component.classes(&selection, None)
                )?;
            }
        }
        writeln!(out)?;
    }

    writeln!(out, "{}", style("badge presets").bold().cyan())?;
    for preset in BadgePreset::ALL {
        writeln!(
            out,
            "  {:<20} {}",
            style(preset.label()).yellow(),
            preset.classes(None, None)
        )?;
    }
    Ok(out)
}
