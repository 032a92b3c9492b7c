//! Coordinate conversion and star map shaping.
//!
//! This module turns decoded catalog records into star map entries and orders
//! the result for the viewer.
//!
//! # Modules
//!
//! - [`conversion`]: Sexagesimal to decimal conversion, rounding, per-record conversion
//! - [`filtering`]: Naked-eye visibility limit and magnitude ordering
//!
//! # Example
//!
//! ```
//! use star_catalog::core::domain::NAKED_EYE_LIMIT;
//! use star_catalog::transformations::{convert_value, sort_by_magnitude};
//!
//! let entries = [
//!     serde_json::json!({ "hoursRaJ2000": 2, "visualMagnitude": "2.0" }),
//!     serde_json::json!({ "hoursRaJ2000": 5, "visualMagnitude": "0.5" }),
//! ];
//! let mut stars: Vec<_> = entries
//!     .iter()
//!     .filter_map(|e| convert_value(e, NAKED_EYE_LIMIT).ok())
//!     .collect();
//! sort_by_magnitude(&mut stars);
//! assert_eq!(stars[0].ra, 5.0);
//! ```

pub mod conversion;
pub mod filtering;

pub use conversion::{convert_record, convert_value, round_to};
pub use filtering::{is_naked_eye_visible, is_sorted_by_magnitude, sort_by_magnitude};
