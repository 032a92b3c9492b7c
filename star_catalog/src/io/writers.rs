use anyhow::{Context, Result};
use std::path::Path;

use crate::core::domain::StarEntry;

/// Writes the star map consumed by the viewer.
pub struct StarMapWriter;

impl StarMapWriter {
    /// Serialize stars as a JSON array indented with two spaces.
    ///
    /// No trailing newline is appended.
    pub fn to_pretty_json(stars: &[StarEntry]) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(stars).context("Failed to serialize star map")
    }

    /// Replace the contents of `path` with the serialized star map.
    ///
    /// The whole document is built in memory first; the file is only touched
    /// once serialization has succeeded.
    pub fn write_to_file(path: &Path, stars: &[StarEntry]) -> Result<()> {
        let bytes = Self::to_pretty_json(stars)?;
        std::fs::write(path, bytes)
            .with_context(|| format!("Failed to write star map: {}", path.display()))
    }

    /// Read back a star map written by [`StarMapWriter::write_to_file`]
    pub fn read_from_file(path: &Path) -> Result<Vec<StarEntry>> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read star map: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid star map JSON: {}", path.display()))
    }
}
