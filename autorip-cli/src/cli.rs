// autorip-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use autorip_core::config::{DEFAULT_CACHE_SIZE_MIB, DEFAULT_MIN_LENGTH_SECS};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Autorip: MakeMKV disc ripping automation",
    long_about = "Drives makemkvcon to enumerate drives, scan discs, and rip the best title via the autorip-core library."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the makemkvcon executable (auto-detected when omitted)
    #[arg(long, global = true, value_name = "PATH", env = "AUTORIP_MAKEMKVCON")]
    pub makemkvcon: Option<PathBuf>,

    /// Path to a makemkv profile XML file
    #[arg(long, global = true, value_name = "PATH")]
    pub profile: Option<PathBuf>,

    /// Read cache size in MiB passed to makemkvcon
    #[arg(long, global = true, value_name = "MIB", default_value_t = DEFAULT_CACHE_SIZE_MIB)]
    pub cache: u32,

    /// Minimum title length in seconds; shorter titles are ignored
    #[arg(long, global = true, value_name = "SECONDS", default_value_t = DEFAULT_MIN_LENGTH_SECS)]
    pub min_length: u32,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lists the optical drives detected by makemkvcon
    Drives,
    /// Scans the disc in a drive and prints its titles
    Scan(ScanArgs),
    /// Rips the best (or a chosen) title of a disc to a directory
    Rip(RipArgs),
}

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Drive index to scan (defaults to the only drive present)
    #[arg(short, long, value_name = "INDEX")]
    pub drive: Option<usize>,

    #[command(flatten)]
    pub weights: WeightArgs,
}

#[derive(Args, Debug)]
pub struct RipArgs {
    /// Drive index to rip from (defaults to the only drive present)
    #[arg(short, long, value_name = "INDEX")]
    pub drive: Option<usize>,

    /// Title index to rip, overriding heuristic selection
    #[arg(short, long, value_name = "INDEX")]
    pub title: Option<usize>,

    /// Directory where the ripped title will be saved
    #[arg(short = 'o', long = "output", required = true, value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    #[command(flatten)]
    pub weights: WeightArgs,
}

/// Overrides for the best-title heuristic weights.
#[derive(Args, Debug)]
pub struct WeightArgs {
    /// Weight given to the longest title(s)
    #[arg(long, value_name = "WEIGHT")]
    pub longest_weight: Option<i64>,

    /// Weight given to title(s) with angle one
    #[arg(long, value_name = "WEIGHT")]
    pub angle_one_weight: Option<i64>,

    /// Weight given to title(s) with the most chapters
    #[arg(long, value_name = "WEIGHT")]
    pub most_chapters_weight: Option<i64>,

    /// Weight given to title(s) with the most streams
    #[arg(long, value_name = "WEIGHT")]
    pub most_streams_weight: Option<i64>,
}
