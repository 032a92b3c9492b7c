//! Star catalog converter.
//!
//! Converts the BSC5P JSON catalog (sexagesimal right ascension and declination,
//! textual visual magnitude) into the compact `{ra, dec, mag}` star map read by
//! the star-map viewer.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`core`] | [`StarEntry`](core::StarEntry), sexagesimal angles, [`RecordError`](core::RecordError) |
//! | [`parsing`] | Raw catalog entry decoding and field coercion |
//! | [`transformations`] | Decimal conversion, rounding, visibility limit, ordering |
//! | [`io`] | Catalog loader and star map writer |
//! | [`pipeline`] | [`ConversionPipeline`](pipeline::ConversionPipeline) and [`convert`] |
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::Path;
//!
//! let count = star_catalog::convert(
//!     Path::new("/tmp/BSC5P-JSON/bsc5p_min.json"),
//!     Path::new("stars.json"),
//! )?;
//! println!("{} stars", count);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod core;
pub mod io;
pub mod parsing;
pub mod pipeline;
pub mod transformations;

pub use pipeline::convert;
