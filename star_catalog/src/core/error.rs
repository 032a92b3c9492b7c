//! Error types for record-level conversion failures.
//!
//! A `RecordError` only ever excludes the record it was raised for; the
//! conversion pass counts it and moves on to the next record.

/// Result type for per-record operations
pub type RecordResult<T> = Result<T, RecordError>;

/// Reason a catalog record was left out of the star map
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    #[error("Record is not a JSON object")]
    NotAnObject,

    #[error("Invalid field {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Invalid record: {0}")]
    Malformed(String),

    #[error("Missing visual magnitude")]
    MissingMagnitude,

    #[error("Unparsable visual magnitude: {0}")]
    UnparsableMagnitude(String),

    #[error("Magnitude {mag} is fainter than the limit {limit}")]
    TooFaint { mag: f64, limit: f64 },
}

impl RecordError {
    pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        RecordError::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    /// Whether the record was dropped because of broken coordinate data rather
    /// than its magnitude.
    pub fn is_invalid_record(&self) -> bool {
        matches!(
            self,
            RecordError::NotAnObject | RecordError::InvalidField { .. } | RecordError::Malformed(_)
        )
    }
}
