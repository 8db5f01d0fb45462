//! Error types for field accessors.

use thiserror::Error;

/// Result type alias for field accessor operations.
pub type UtilsResult<T> = Result<T, UtilsError>;

/// Errors raised while decoding field values.
///
/// Lookups never fail; only values that must be parsed (colors, dates) do.
#[derive(Error, Debug)]
pub enum UtilsError {
    #[error("Invalid color value: {0}")]
    ColorParse(String),

    #[error("Color field has no value and its spec has no default")]
    MissingColor,

    #[error("Cannot parse date '{value}' with format '{format}'")]
    DateParse { value: String, format: String },

    #[error("Invalid ISO date: {0}")]
    InvalidIso(String),
}
