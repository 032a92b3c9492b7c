//! Decoders for raw star catalog entries.
//!
//! This module turns the loosely typed JSON entries of the BSC5P catalog into
//! [`bsc5p_parser::RawStarRecord`] values and coerces their sexagesimal and
//! magnitude fields. Every failure here is scoped to a single record.
//!
//! # Example
//!
//! ```
//! use star_catalog::parsing::RawStarRecord;
//!
//! let entry = serde_json::json!({
//!     "hoursRaJ2000": "5",
//!     "minutesRaJ2000": 55,
//!     "secondsRaJ2000": 10.3,
//!     "visualMagnitude": "0.50"
//! });
//! let record = RawStarRecord::from_value(&entry).unwrap();
//! assert_eq!(record.right_ascension().unwrap().hours, 5);
//! assert_eq!(record.magnitude().unwrap(), 0.5);
//! ```

pub mod bsc5p_parser;


pub use bsc5p_parser::{parse_records, CoercibleValue, RawStarRecord};
