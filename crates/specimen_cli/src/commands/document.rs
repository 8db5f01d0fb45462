//! Reading and writing spec and data documents.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use specimen_types::{parse_document, render_document, DocumentFormat};

/// Load a document, picking its encoding from the file extension.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let format = DocumentFormat::from_path(path)?;
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    parse_document(&content, format).with_context(|| format!("Invalid document {}", path.display()))
}

/// Load a data document, or start from an empty one when the file is missing.
pub fn load_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        debug!("No data at {}, starting empty", path.display());
        DocumentFormat::from_path(path)?;
        return Ok(T::default());
    }
    load(path)
}

/// Write a document in the encoding of its file extension.
pub fn save<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let format = DocumentFormat::from_path(path)?;
    let content = render_document(value, format)?;

    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Saved {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use specimen_types::{OptionValue, SelectData};
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load() {
        let temp = tempdir().unwrap();

        for name in ["data.json", "data.yaml", "data.toml"] {
            let path = temp.path().join(name);
            let data = SelectData {
                value: vec![OptionValue::new("a", 1)],
            };

            save(&path, &data).unwrap();
            let loaded: SelectData = load(&path).unwrap();
            assert_eq!(loaded, data, "{} did not survive", name);
        }
    }

    #[test]
    fn test_missing_data_is_empty() {
        let temp = tempdir().unwrap();
        let data: SelectData = load_or_default(&temp.path().join("new.yaml")).unwrap();
        assert!(data.value.is_empty());

        assert!(load_or_default::<SelectData>(&temp.path().join("new.xml")).is_err());
        assert!(load::<SelectData>(&temp.path().join("missing.json")).is_err());
    }
}
