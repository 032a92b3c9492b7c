//! File input and output for the converter.
//!
//! [`loaders::CatalogLoader`] reads the raw catalog container and
//! [`writers::StarMapWriter`] persists the star map. Every error raised here is
//! fatal for the run.
//!
//! # Example
//!
//! ```no_run
//! use star_catalog::io::CatalogLoader;
//! use std::path::Path;
//!
//! let entries = CatalogLoader::load_from_file(Path::new("bsc5p_min.json"))
//!     .expect("Failed to load");
//! println!("Loaded {} catalog entries", entries.len());
//! ```

pub mod loaders;
pub mod writers;


pub use loaders::CatalogLoader;
pub use writers::StarMapWriter;
