//! Text encodings for spec and data documents.
//!
//! Specs are configuration owned by the caller and may be stored as JSON,
//! YAML or TOML. This module only converts text; reading files is left to
//! the caller.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{TypesError, TypesResult};

/// Encoding of a spec or data document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
    Toml,
}

impl DocumentFormat {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => Some(DocumentFormat::Json),
            "yaml" | "yml" => Some(DocumentFormat::Yaml),
            "toml" => Some(DocumentFormat::Toml),
            _ => None,
        }
    }

    /// Pick the format from a file's extension.
    pub fn from_path(path: impl AsRef<Path>) -> TypesResult<Self> {
        let path = path.as_ref();
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| TypesError::UnsupportedFormat(path.display().to_string()))
    }
}

/// Decode a document.
pub fn parse_document<T: DeserializeOwned>(content: &str, format: DocumentFormat) -> TypesResult<T> {
    debug!("Parsing {:?} document ({} bytes)", format, content.len());

    let value = match format {
        DocumentFormat::Json => serde_json::from_str(content)?,
        DocumentFormat::Yaml => serde_yaml::from_str(content)?,
        DocumentFormat::Toml => toml::from_str(content)?,
    };
    Ok(value)
}

/// Encode a document.
pub fn render_document<T: Serialize>(value: &T, format: DocumentFormat) -> TypesResult<String> {
    let content = match format {
        DocumentFormat::Json => serde_json::to_string_pretty(value)?,
        DocumentFormat::Yaml => serde_yaml::to_string(value)?,
        DocumentFormat::Toml => toml::to_string_pretty(value)?,
    };
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::SelectData;

    #[test]
    fn test_format_from_path() {
        assert_eq!(DocumentFormat::from_path("spec.json").unwrap(), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path("a/b/spec.YML").unwrap(), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path("spec.toml").unwrap(), DocumentFormat::Toml);
        assert!(DocumentFormat::from_path("spec.xml").is_err());
        assert!(DocumentFormat::from_path("spec").is_err());
    }

    #[test]
    fn test_parse_toml_select_data() {
        let data: SelectData = parse_document(
            "[[value]]\nid = \"a\"\nvalue = \"A\"\n",
            DocumentFormat::Toml,
        )
        .unwrap();
        assert_eq!(data.value.len(), 1);
        assert_eq!(data.value[0].id, "a");
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let result: TypesResult<SelectData> = parse_document("{ nope", DocumentFormat::Json);
        assert!(matches!(result, Err(TypesError::Json(_))));
    }
}
