//! Domain models for catalog stars and their sky coordinates.
//!
//! This module provides the core data structures that describe a star on its way
//! from the sexagesimal catalog representation to the decimal star map record
//! consumed by the viewer.

use serde::{Deserialize, Serialize};

/// Faintest apparent visual magnitude kept in the star map (naked-eye limit).
pub const NAKED_EYE_LIMIT: f64 = 6.5;

/// Fractional digits kept for right ascension and declination.
pub const COORDINATE_DECIMALS: u32 = 6;

/// Fractional digits kept for the visual magnitude.
pub const MAGNITUDE_DECIMALS: u32 = 2;

/// A single star map record.
///
/// `ra` is expressed in decimal hours, `dec` in decimal degrees and `mag` is the
/// apparent visual magnitude. Fields serialize in `ra, dec, mag` order.
///
/// # Examples
///
/// ```
/// use star_catalog::core::domain::StarEntry;
///
/// let star = StarEntry::new(6.752481, -16.716116, -1.46);
/// let json = serde_json::to_string(&star).unwrap();
/// assert_eq!(json, r#"{"ra":6.752481,"dec":-16.716116,"mag":-1.46}"#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarEntry {
    pub ra: f64,
    pub dec: f64,
    pub mag: f64,
}

impl StarEntry {
    pub fn new(ra: f64, dec: f64, mag: f64) -> Self {
        Self { ra, dec, mag }
    }
}

/// Right ascension in sexagesimal hours, minutes and seconds.
///
/// # Examples
///
/// ```
/// use star_catalog::core::domain::RightAscension;
///
/// let ra = RightAscension::new(1, 30, 0.0);
/// assert_eq!(ra.to_decimal_hours(), 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RightAscension {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: f64,
}

impl RightAscension {
    pub fn new(hours: i64, minutes: i64, seconds: f64) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Returns the right ascension in decimal hours.
    ///
    /// No wraparound is applied: components outside their usual ranges are
    /// summed as given.
    pub fn to_decimal_hours(&self) -> f64 {
        self.hours as f64 + (self.minutes as f64 / 60.0) + (self.seconds / 3600.0)
    }
}

/// Declination in sexagesimal degrees, minutes and seconds with a separate sign.
///
/// The catalog stores the sign apart from the components so that declinations
/// between 0 and -1 degree keep their sign.
///
/// # Examples
///
/// ```
/// use star_catalog::core::domain::Declination;
///
/// let dec = Declination::new(true, 0, 30, 0.0);
/// assert_eq!(dec.to_decimal_degrees(), -0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Declination {
    pub negative: bool,
    pub degrees: i64,
    pub minutes: i64,
    pub seconds: f64,
}

impl Declination {
    pub fn new(negative: bool, degrees: i64, minutes: i64, seconds: f64) -> Self {
        Self {
            negative,
            degrees,
            minutes,
            seconds,
        }
    }

    /// Returns the declination in signed decimal degrees.
    pub fn to_decimal_degrees(&self) -> f64 {
        let magnitude =
            self.degrees as f64 + (self.minutes as f64 / 60.0) + (self.seconds / 3600.0);
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_ascension_components() {
        let ra = RightAscension::new(6, 45, 9.0);
        assert!((ra.to_decimal_hours() - 6.7525).abs() < 1e-12);
    }

    #[test]
    fn test_right_ascension_is_not_wrapped() {
        let ra = RightAscension::new(25, 0, 0.0);
        assert_eq!(ra.to_decimal_hours(), 25.0);
    }

    #[test]
    fn test_declination_sign() {
        let north = Declination::new(false, 10, 0, 0.0);
        let south = Declination::new(true, 10, 0, 0.0);
        assert_eq!(north.to_decimal_degrees(), 10.0);
        assert_eq!(south.to_decimal_degrees(), -10.0);
    }

    #[test]
    fn test_declination_seconds() {
        let dec = Declination::new(true, 16, 42, 58.0);
        let expected = -(16.0 + 42.0 / 60.0 + 58.0 / 3600.0);
        assert!((dec.to_decimal_degrees() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_star_entry_roundtrip_field_order() {
        let star = StarEntry::new(1.5, -10.0, 1.0);
        let json = serde_json::to_string(&star).unwrap();
        assert_eq!(json, r#"{"ra":1.5,"dec":-10.0,"mag":1.0}"#);
    }
}
