//! Settings error types

use thiserror::Error;

use crate::fields::SettingsField;

/// Errors raised when a value cannot be stored in a settings field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// Numeric field received text with no leading digits
    #[error("Invalid {field} value: {value}")]
    InvalidNumber { field: SettingsField, value: String },

    /// No settings field has this name
    #[error("Unknown settings field: {0}")]
    UnknownField(String),
}

/// Preset key that is not in the catalog
///
/// Kept separate from [`SettingsError`] so a typo in a preset key is never
/// confused with a typo in a field name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown theme preset '{0}'")]
pub struct UnknownPreset(pub String);
