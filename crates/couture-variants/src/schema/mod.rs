//! Variant schemas: ordered axes of mutually exclusive style values.
//!
//! This module provides:
//!
//! - [`VariantSchema`]: The validated, immutable set of axes for a component
//! - [`SchemaBuilder`] and [`Axis`]: Fluent construction with definition-time checks
//! - [`VariantAxis`]: A single validated axis
//! - [`SchemaError`]: Errors raised while building a schema

mod axis;
mod error;

pub use axis::{Axis, VariantAxis};
pub use error::SchemaError;

use serde::Deserialize;
use serde_yaml::Mapping;

use crate::fragment::FragmentSet;

/// The validated variant axes of a component, in declaration order.
///
/// A built schema always satisfies its invariants: axis names are unique,
/// value names are unique within each axis, and every axis has a default that
/// it declares. Schemas are immutable and can be shared freely across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantSchema {
    axes: Vec<VariantAxis>,
}

impl VariantSchema {
    /// Creates a schema with no axes.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Parses a schema from YAML.
    ///
    /// Axes are declared as a mapping, in declaration order. Each axis names
    /// its default and maps value names to class strings (or lists of classes):
    ///
    /// ```rust
    /// use couture_variants::VariantSchema;
    ///
    /// let schema = VariantSchema::from_yaml(r#"
    /// size:
    ///   default: md
    ///   values:
    ///     sm: h-9 px-4
    ///     md: h-11 px-6
    /// rounded:
    ///   default: default
    ///   values:
    ///     default: ""
    ///     full: [rounded-full]
    /// "#).unwrap();
    ///
    /// let names: Vec<_> = schema.axes().iter().map(|a| a.name()).collect();
    /// assert_eq!(names, ["size", "rounded"]);
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        if yaml.trim().is_empty() {
            return Ok(Self::empty());
        }
        let mapping: Mapping = serde_yaml::from_str(yaml)?;
        Self::from_mapping(mapping)
    }

    pub(crate) fn from_mapping(mapping: Mapping) -> Result<Self, SchemaError> {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct AxisDef {
            #[serde(default)]
            default: Option<String>,
            values: Mapping,
        }

        let mut builder = Self::builder();
        for (name, def) in mapping {
            let name: String = serde_yaml::from_value(name)?;
            let def: AxisDef = serde_yaml::from_value(def)?;

            let mut axis = Axis::new(name);
            if let Some(default) = def.default {
                axis = axis.default_value(default);
            }
            for (value, fragments) in def.values {
                let value: String = serde_yaml::from_value(value)?;
                let fragments: FragmentSet = serde_yaml::from_value(fragments)?;
                axis = axis.value(value, fragments);
            }
            builder = builder.axis(axis);
        }
        builder.build()
    }

    /// Axes in declaration order.
    pub fn axes(&self) -> &[VariantAxis] {
        &self.axes
    }

    pub fn axis(&self, name: &str) -> Option<&VariantAxis> {
        self.axes.iter().find(|axis| axis.name() == name)
    }

    pub fn len(&self) -> usize {
        self.axes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }
}

/// Collects axes and validates them into a [`VariantSchema`].
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    axes: Vec<Axis>,
}

impl SchemaBuilder {
    /// Appends an axis, returning the updated builder for chaining.
    pub fn axis(mut self, axis: Axis) -> Self {
        self.axes.push(axis);
        self
    }

    /// Validates every axis and returns the schema.
    ///
    /// Fails on the first problem found, in declaration order.
    pub fn build(self) -> Result<VariantSchema, SchemaError> {
        let mut axes: Vec<VariantAxis> = Vec::with_capacity(self.axes.len());
        for axis in self.axes {
            if axes.iter().any(|built| built.name() == axis.name()) {
                return Err(SchemaError::DuplicateAxis(axis.name().to_string()));
            }
            axes.push(axis.build()?);
        }
        Ok(VariantSchema { axes })
    }
}
