//! Schema validation errors.

use thiserror::Error;

/// Error returned when a variant schema is malformed.
///
/// Schemas are checked once, when they are built, so these errors surface at
/// definition time and never during resolution.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// An axis was declared with an empty or blank name.
    #[error("variant axis name cannot be empty")]
    EmptyAxisName,
    /// A value was declared with an empty or blank name.
    #[error("axis '{axis}' declares a value with an empty name")]
    EmptyValueName { axis: String },
    /// Two axes share a name.
    #[error("duplicate variant axis '{0}'")]
    DuplicateAxis(String),
    /// An axis declares the same value twice.
    #[error("axis '{axis}' declares value '{value}' more than once")]
    DuplicateValue { axis: String, value: String },
    /// An axis has no default value.
    #[error("axis '{0}' has no default value")]
    MissingDefault(String),
    /// The default names a value the axis does not declare.
    #[error("default '{default}' of axis '{axis}' is not one of its values")]
    UnknownDefault { axis: String, default: String },
    /// The YAML source could not be parsed.
    #[error("failed to parse variant schema: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
