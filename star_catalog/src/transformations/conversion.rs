use serde_json::Value;

use crate::core::domain::{StarEntry, COORDINATE_DECIMALS, MAGNITUDE_DECIMALS};
use crate::core::error::{RecordError, RecordResult};
use crate::parsing::bsc5p_parser::RawStarRecord;
use crate::transformations::filtering::is_naked_eye_visible;

/// Round `value` to `decimals` fractional digits.
///
/// Goes through the fixed-point formatter so the result is the double closest
/// to the correctly rounded decimal, not an artifact of scaling by a power of ten.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    format!("{:.*}", decimals as usize, value)
        .parse()
        .unwrap_or(value)
}

/// Convert one decoded catalog record into a star map entry.
///
/// Coordinates are converted first, then the magnitude is parsed and checked
/// against `mag_limit`. A magnitude equal to the limit is kept. The limit is
/// applied to the parsed magnitude, before rounding.
pub fn convert_record(record: &RawStarRecord, mag_limit: f64) -> RecordResult<StarEntry> {
    let ra = record.right_ascension()?.to_decimal_hours();
    let dec = record.declination()?.to_decimal_degrees();

    let mag = record.magnitude()?;
    if !is_naked_eye_visible(mag, mag_limit) {
        return Err(RecordError::TooFaint {
            mag,
            limit: mag_limit,
        });
    }

    Ok(StarEntry::new(
        round_to(ra, COORDINATE_DECIMALS),
        round_to(dec, COORDINATE_DECIMALS),
        round_to(mag, MAGNITUDE_DECIMALS),
    ))
}

/// Decode and convert a raw JSON catalog entry.
pub fn convert_value(value: &Value, mag_limit: f64) -> RecordResult<StarEntry> {
    let record = RawStarRecord::from_value(value)?;
    convert_record(&record, mag_limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::NAKED_EYE_LIMIT;
    use proptest::prelude::*;
    use serde_json::json;

    fn convert(entry: Value) -> RecordResult<StarEntry> {
        convert_value(&entry, NAKED_EYE_LIMIT)
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.23456789, 6), 1.234568);
        assert_eq!(round_to(-16.7161111111, 6), -16.716111);
        assert_eq!(round_to(6.499, 2), 6.5);
        assert_eq!(round_to(2.0, 2), 2.0);
    }

    #[test]
    fn test_reference_record() {
        let star = convert(json!({
            "hoursRaJ2000": 1,
            "minutesRaJ2000": 30,
            "secondsRaJ2000": 0,
            "signDecJ2000": "-",
            "degreesDecJ2000": 10,
            "minutesDecJ2000": 0,
            "secondsDecJ2000": 0,
            "visualMagnitude": "1.0"
        }))
        .unwrap();

        assert_eq!(star, StarEntry::new(1.5, -10.0, 1.0));
    }

    #[test]
    fn test_sirius_rounding() {
        let star = convert(json!({
            "hoursRaJ2000": 6,
            "minutesRaJ2000": 45,
            "secondsRaJ2000": 8.9,
            "signDecJ2000": "-",
            "degreesDecJ2000": 16,
            "minutesDecJ2000": 42,
            "secondsDecJ2000": 58,
            "visualMagnitude": "-1.46"
        }))
        .unwrap();

        assert_eq!(star.ra, 6.752472);
        assert_eq!(star.dec, -16.716111);
        assert_eq!(star.mag, -1.46);
    }

    #[test]
    fn test_magnitude_threshold_boundary() {
        let at_limit = convert(json!({ "visualMagnitude": "6.50" })).unwrap();
        assert_eq!(at_limit.mag, 6.5);

        let err = convert(json!({ "visualMagnitude": "6.51" })).unwrap_err();
        assert_eq!(
            err,
            RecordError::TooFaint {
                mag: 6.51,
                limit: NAKED_EYE_LIMIT
            }
        );
    }

    #[test]
    fn test_limit_checked_before_rounding() {
        assert!(convert(json!({ "visualMagnitude": "6.504" })).is_err());
    }

    #[test]
    fn test_magnitude_rejections() {
        assert_eq!(
            convert(json!({ "visualMagnitude": "" })),
            Err(RecordError::MissingMagnitude)
        );
        assert_eq!(convert(json!({})), Err(RecordError::MissingMagnitude));
        assert!(matches!(
            convert(json!({ "visualMagnitude": "abc" })),
            Err(RecordError::UnparsableMagnitude(_))
        ));
    }

    #[test]
    fn test_missing_hours_defaults_to_zero() {
        let star = convert(json!({
            "minutesRaJ2000": 15,
            "visualMagnitude": "2.0"
        }))
        .unwrap();
        assert_eq!(star.ra, 0.25);
    }

    #[test]
    fn test_coordinate_error_wins_over_magnitude() {
        let err = convert(json!({
            "hoursRaJ2000": "bad",
            "visualMagnitude": "9.0"
        }))
        .unwrap_err();
        assert!(err.is_invalid_record());
    }

    #[test]
    fn test_custom_limit() {
        let entry = json!({ "visualMagnitude": "4.0" });
        assert!(convert_value(&entry, 3.0).is_err());
        assert!(convert_value(&entry, 4.0).is_ok());
    }

    fn fraction_digits(value: f64) -> usize {
        let text = value.to_string();
        text.split_once('.').map(|(_, frac)| frac.len()).unwrap_or(0)
    }

    proptest! {
        #[test]
        fn prop_round_to_limits_fraction_digits(value in -1e6..1e6f64, decimals in 0u32..7) {
            let rounded = round_to(value, decimals);
            prop_assert!(fraction_digits(rounded) <= decimals as usize);
            prop_assert!((rounded - value).abs() <= 0.5 * 10f64.powi(-(decimals as i32)) + 1e-9);
        }

        #[test]
        fn prop_converted_magnitude_within_limit(mag in -2.0..12.0f64) {
            let entry = json!({ "visualMagnitude": mag.to_string() });
            match convert(entry) {
                Ok(star) => {
                    prop_assert!(mag <= NAKED_EYE_LIMIT);
                    prop_assert!(star.mag <= NAKED_EYE_LIMIT);
                }
                Err(err) => {
                    let too_faint = matches!(err, RecordError::TooFaint { .. });
                    prop_assert!(too_faint);
                    prop_assert!(mag > NAKED_EYE_LIMIT);
                }
            }
        }

        #[test]
        fn prop_ra_in_day_for_normalized_input(
            hours in 0i64..24,
            minutes in 0i64..60,
            seconds in 0.0..59.99f64,
        ) {
            let entry = json!({
                "hoursRaJ2000": hours,
                "minutesRaJ2000": minutes,
                "secondsRaJ2000": seconds,
                "visualMagnitude": "1.0"
            });
            let star = convert(entry).unwrap();
            prop_assert!(star.ra >= 0.0 && star.ra < 24.0);
            prop_assert!(fraction_digits(star.ra) <= COORDINATE_DECIMALS as usize);
        }
    }
}
