// combcheck-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Combcheck: combed frame range scanner",
    long_about = "Checks for combed frames and frame ranges in TV cap sources \
                  and generates range reports plus a chapter file for use in \
                  vsedit and similar applications."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scans a video file for combed frame ranges and writes the reports
    Scan(ScanArgs),
}

#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// A (typically interlaced) input video file to be scanned for combed frames
    #[arg(required = true, value_name = "FILENAME")]
    pub input: PathBuf,

    /// Filename base for all generated files (defaults to FILENAME)
    #[arg(short = 'o', long = "output", value_name = "BASE")]
    pub output: Option<PathBuf>,

    /// Detect uncombed frame ranges instead of combed ones
    #[arg(long)]
    pub inverse: bool,

    /// Range merging threshold
    #[arg(long, value_name = "N", default_value_t = 2,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub threshold: u64,

    /// Minimum number of frames required for a range
    #[arg(long = "min-range", value_name = "N", default_value_t = 1,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub min_range: u64,

    /// Comma separated list of frame IDs to be duplicated before the scan
    #[arg(long = "dup-frames", value_name = "ID1,ID2,…")]
    pub dup_frames: Option<String>,
}
