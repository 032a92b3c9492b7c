//! End-to-end catalog conversion.
//!
//! Loading, per-record conversion, ordering and writing are chained here.
//! [`convert`] is the single-call entry point used by the CLI.

pub mod converter;


pub use converter::{
    convert, ConversionConfig, ConversionPipeline, ConversionResult, ConversionStats,
};
