//! Error types for the types crate.

use thiserror::Error;

/// Result type alias for document and type conversion operations.
pub type TypesResult<T> = Result<T, TypesError>;

/// Errors that can occur while reading or writing field documents.
#[derive(Error, Debug)]
pub enum TypesError {
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("Unknown color format: {0}")]
    UnknownColorFormat(String),

    #[error("Unrecognized disabled date entry: {0}")]
    InvalidDisabledDate(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TypesError::UnsupportedFormat("xml".to_string());
        assert_eq!(err.to_string(), "Unsupported document format: xml");

        let err = TypesError::UnknownColorFormat("cmyk".to_string());
        assert!(err.to_string().contains("cmyk"));
    }
}
