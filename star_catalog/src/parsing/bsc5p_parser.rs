use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::core::domain::{Declination, RightAscension};
use crate::core::error::{RecordError, RecordResult};

/// Scalar as it may appear in a catalog field.
///
/// Catalog dumps are inconsistent about numeric fields: the same column can hold
/// `12`, `12.0` or `"12"` depending on the exporter. Every numeric field is read
/// into this enum first and coerced afterwards.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CoercibleValue {
    Int(i64),
    Float(f64),
    Text(String),
    Flag(bool),
}

impl CoercibleValue {
    /// Coerce to an integer component.
    ///
    /// Floats are truncated toward zero, booleans count as 0/1 and strings must
    /// hold an integer literal once surrounding whitespace is trimmed.
    pub fn as_integer(&self) -> Result<i64, String> {
        match self {
            CoercibleValue::Int(i) => Ok(*i),
            CoercibleValue::Float(f) => {
                let truncated = f.trunc();
                if truncated.is_finite()
                    && truncated >= i64::MIN as f64
                    && truncated < i64::MAX as f64
                {
                    Ok(truncated as i64)
                } else {
                    Err(format!("{} is out of integer range", f))
                }
            }
            CoercibleValue::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|e| format!("{:?} is not an integer: {}", s, e)),
            CoercibleValue::Flag(b) => Ok(i64::from(*b)),
        }
    }

    /// Coerce to a finite floating-point component.
    pub fn as_float(&self) -> Result<f64, String> {
        let value = match self {
            CoercibleValue::Int(i) => *i as f64,
            CoercibleValue::Float(f) => *f,
            CoercibleValue::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|e| format!("{:?} is not a number: {}", s, e))?,
            CoercibleValue::Flag(b) => f64::from(u8::from(*b)),
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(format!("{} is not finite", value))
        }
    }
}

/// A present field must hold a scalar; an explicit `null` is not "absent".
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<CoercibleValue>, D::Error>
where
    D: Deserializer<'de>,
{
    CoercibleValue::deserialize(deserializer).map(Some)
}

/// Raw JSON structure of one BSC5P catalog entry.
///
/// Only the fields needed for the star map are decoded; every other catalog
/// column is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStarRecord {
    #[serde(rename = "hoursRaJ2000", default, deserialize_with = "deserialize_present")]
    pub hours_ra: Option<CoercibleValue>,
    #[serde(rename = "minutesRaJ2000", default, deserialize_with = "deserialize_present")]
    pub minutes_ra: Option<CoercibleValue>,
    #[serde(rename = "secondsRaJ2000", default, deserialize_with = "deserialize_present")]
    pub seconds_ra: Option<CoercibleValue>,
    #[serde(rename = "signDecJ2000", default)]
    pub sign_dec: Option<Value>,
    #[serde(rename = "degreesDecJ2000", default, deserialize_with = "deserialize_present")]
    pub degrees_dec: Option<CoercibleValue>,
    #[serde(rename = "minutesDecJ2000", default, deserialize_with = "deserialize_present")]
    pub minutes_dec: Option<CoercibleValue>,
    #[serde(rename = "secondsDecJ2000", default, deserialize_with = "deserialize_present")]
    pub seconds_dec: Option<CoercibleValue>,
    #[serde(rename = "visualMagnitude", default)]
    pub visual_magnitude: Option<CoercibleValue>,
}

impl RawStarRecord {
    /// Decode one catalog entry.
    ///
    /// Anything that is not an object, or that holds a nested value where a
    /// scalar is expected, is rejected for this record only.
    pub fn from_value(value: &Value) -> RecordResult<Self> {
        if !value.is_object() {
            return Err(RecordError::NotAnObject);
        }
        serde_path_to_error::deserialize(value).map_err(|e| {
            RecordError::Malformed(format!("{}: {}", e.path(), e.inner()))
        })
    }

    pub fn right_ascension(&self) -> RecordResult<RightAscension> {
        Ok(RightAscension::new(
            integer_component(&self.hours_ra, "hoursRaJ2000")?,
            integer_component(&self.minutes_ra, "minutesRaJ2000")?,
            float_component(&self.seconds_ra, "secondsRaJ2000")?,
        ))
    }

    /// Only the exact string `"-"` marks a southern declination; a missing or
    /// unexpected sign reads as positive.
    pub fn declination(&self) -> RecordResult<Declination> {
        let negative = matches!(&self.sign_dec, Some(Value::String(s)) if s == "-");
        Ok(Declination::new(
            negative,
            integer_component(&self.degrees_dec, "degreesDecJ2000")?,
            integer_component(&self.minutes_dec, "minutesDecJ2000")?,
            float_component(&self.seconds_dec, "secondsDecJ2000")?,
        ))
    }

    /// Parse the visual magnitude.
    ///
    /// Absent, null, empty and blank magnitudes are `MissingMagnitude`; text that
    /// does not hold a finite number is `UnparsableMagnitude`.
    pub fn magnitude(&self) -> RecordResult<f64> {
        match &self.visual_magnitude {
            None => Err(RecordError::MissingMagnitude),
            Some(CoercibleValue::Text(s)) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(RecordError::MissingMagnitude);
                }
                match trimmed.parse::<f64>() {
                    Ok(mag) if mag.is_finite() => Ok(mag),
                    _ => Err(RecordError::UnparsableMagnitude(s.clone())),
                }
            }
            Some(CoercibleValue::Int(i)) => Ok(*i as f64),
            Some(CoercibleValue::Float(f)) => Ok(*f),
            Some(CoercibleValue::Flag(b)) => Err(RecordError::UnparsableMagnitude(b.to_string())),
        }
    }
}

fn integer_component(value: &Option<CoercibleValue>, field: &'static str) -> RecordResult<i64> {
    match value {
        None => Ok(0),
        Some(v) => v
            .as_integer()
            .map_err(|reason| RecordError::invalid_field(field, reason)),
    }
}

fn float_component(value: &Option<CoercibleValue>, field: &'static str) -> RecordResult<f64> {
    match value {
        None => Ok(0.0),
        Some(v) => v
            .as_float()
            .map_err(|reason| RecordError::invalid_field(field, reason)),
    }
}

/// Decode every entry of a loaded catalog, keeping failures in place.
pub fn parse_records(values: &[Value]) -> Vec<RecordResult<RawStarRecord>> {
    values.iter().map(RawStarRecord::from_value).collect()
}
