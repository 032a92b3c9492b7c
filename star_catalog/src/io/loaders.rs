use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

/// Loads the raw BSC5P catalog container.
///
/// The container must be a JSON array. Its entries are returned untouched so
/// that a malformed entry only affects itself during conversion.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load every catalog entry from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Vec<Value>> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

        Self::load_from_str(&content)
            .with_context(|| format!("Failed to parse catalog file: {}", path.display()))
    }

    /// Load every catalog entry from a JSON string
    pub fn load_from_str(json_str: &str) -> Result<Vec<Value>> {
        let mut deserializer = serde_json::Deserializer::from_str(json_str);
        let entries: Vec<Value> = serde_path_to_error::deserialize(&mut deserializer)
            .map_err(|e| {
                anyhow::anyhow!(
                    "Catalog must be a JSON array of star entries (at '{}'): {}",
                    e.path(),
                    e.inner()
                )
            })?;
        deserializer
            .end()
            .context("Unexpected trailing content after catalog array")?;

        Ok(entries)
    }
}
