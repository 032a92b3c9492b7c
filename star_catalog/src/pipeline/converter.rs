use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

use crate::core::domain::{StarEntry, NAKED_EYE_LIMIT};
use crate::core::error::RecordError;
use crate::io::{CatalogLoader, StarMapWriter};
use crate::transformations::{convert_value, sort_by_magnitude};

/// Configuration for the conversion pipeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionConfig {
    /// Faintest magnitude kept in the star map (inclusive)
    pub mag_limit: f64,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            mag_limit: NAKED_EYE_LIMIT,
        }
    }
}

/// Counts of what happened to each catalog entry during one pass.
///
/// `converted + rejected()` always equals `total_records`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionStats {
    pub total_records: usize,
    pub converted: usize,
    pub invalid_records: usize,
    pub missing_magnitude: usize,
    pub unparsable_magnitude: usize,
    pub too_faint: usize,
}

impl ConversionStats {
    /// Count a rejected record under its reason
    pub fn record(&mut self, error: &RecordError) {
        match error {
            RecordError::MissingMagnitude => self.missing_magnitude += 1,
            RecordError::UnparsableMagnitude(_) => self.unparsable_magnitude += 1,
            RecordError::TooFaint { .. } => self.too_faint += 1,
            RecordError::NotAnObject
            | RecordError::InvalidField { .. }
            | RecordError::Malformed(_) => self.invalid_records += 1,
        }
    }

    pub fn rejected(&self) -> usize {
        self.invalid_records + self.missing_magnitude + self.unparsable_magnitude + self.too_faint
    }
}

/// Result of a conversion pass
#[derive(Debug, Clone)]
pub struct ConversionResult {
    /// Star map entries, brightest first
    pub stars: Vec<StarEntry>,
    pub stats: ConversionStats,
}

impl ConversionResult {
    pub fn count(&self) -> usize {
        self.stars.len()
    }
}

/// Converts a BSC5P catalog into the star map format
pub struct ConversionPipeline {
    config: ConversionConfig,
}

impl ConversionPipeline {
    /// Create a new pipeline with default configuration
    pub fn new() -> Self {
        Self {
            config: ConversionConfig::default(),
        }
    }

    /// Create a pipeline with custom configuration
    pub fn with_config(config: ConversionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Convert already loaded catalog entries.
    ///
    /// Entries that fail to convert are counted in the stats and left out; they
    /// never abort the pass.
    pub fn process_records(&self, entries: &[Value]) -> ConversionResult {
        let mut stats = ConversionStats {
            total_records: entries.len(),
            ..ConversionStats::default()
        };

        let mut stars = Vec::with_capacity(entries.len());
        for entry in entries {
            match convert_value(entry, self.config.mag_limit) {
                Ok(star) => stars.push(star),
                Err(e) => stats.record(&e),
            }
        }
        sort_by_magnitude(&mut stars);
        stats.converted = stars.len();

        ConversionResult { stars, stats }
    }

    /// Convert a catalog given as a JSON string
    pub fn process_json_str(&self, json_str: &str) -> Result<ConversionResult> {
        let entries =
            CatalogLoader::load_from_str(json_str).context("Failed to load catalog JSON")?;
        Ok(self.process_records(&entries))
    }

    /// Convert the catalog at `input` and write the star map to `output`.
    ///
    /// The output file is only written once the complete star map has been
    /// built; a fatal error while loading leaves it untouched.
    pub fn process_file(&self, input: &Path, output: &Path) -> Result<ConversionResult> {
        let entries = CatalogLoader::load_from_file(input)?;
        let result = self.process_records(&entries);

        StarMapWriter::write_to_file(output, &result.stars)?;

        log::info!(
            "Converted {} stars from {} to {}",
            result.count(),
            input.display(),
            output.display()
        );
        log::debug!(
            "Rejected {} of {} entries: {} invalid, {} without magnitude, {} unparsable magnitude, {} fainter than {}",
            result.stats.rejected(),
            result.stats.total_records,
            result.stats.invalid_records,
            result.stats.missing_magnitude,
            result.stats.unparsable_magnitude,
            result.stats.too_faint,
            self.config.mag_limit
        );

        Ok(result)
    }
}

impl Default for ConversionPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert the catalog at `input_path` into a star map at `output_path`.
///
/// Returns the number of stars written.
pub fn convert(input_path: &Path, output_path: &Path) -> Result<usize> {
    ConversionPipeline::new()
        .process_file(input_path, output_path)
        .map(|result| result.count())
}
