//! Star catalog converter binary
//!
//! Converts the BSC5P JSON catalog into the star map consumed by the viewer.
//!
//! # Usage
//!
//! ```bash
//! # Fixed default paths
//! cargo run --bin convert-catalog
//!
//! # Explicit paths
//! cargo run --bin convert-catalog -- --input bsc5p_min.json --output stars.json
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log filter (default: info, debug with `--verbose`)

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

const DEFAULT_INPUT: &str = "/tmp/BSC5P-JSON/bsc5p_min.json";
const DEFAULT_OUTPUT: &str = "stars.json";

#[derive(Parser, Debug)]
#[command(name = "convert-catalog")]
#[command(about = "Convert the BSC5P star catalog into a naked-eye star map")]
#[command(version)]
struct Args {
    /// BSC5P catalog JSON file
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Star map JSON file to (over)write
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Diagnostics go to stderr, the confirmation line to stdout
    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let count = star_catalog::convert(&args.input, &args.output).inspect_err(|e| {
        tracing::error!("Conversion failed: {:#}", e);
    })?;

    println!(
        "Successfully created {} with {} stars",
        args.output.display(),
        count
    );
    Ok(())
}
