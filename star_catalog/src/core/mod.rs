//! Core domain models for the star catalog converter.
//!
//! This module defines the output star record, the sexagesimal coordinate
//! types read from the catalog, and the record-level error taxonomy.

pub mod domain;
pub mod error;

pub use domain::{
    Declination, RightAscension, StarEntry, COORDINATE_DECIMALS, MAGNITUDE_DECIMALS,
    NAKED_EYE_LIMIT,
};
pub use error::{RecordError, RecordResult};
