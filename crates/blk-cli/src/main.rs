//! blk command-line tool — decode, inspect, and validate the block-storage
//! `.dat` container files written by a Bitcoin Core node.
//!
//! # Command overview
//!
//! ```text
//! blk <COMMAND> [OPTIONS]
//!
//! Commands:
//!   decode     Decode blocks and print a full report (text or JSON Lines)
//!   inspect    Print a one-line, header-only summary of each block
//!   validate   Check a file or directory for structural correctness
//!   help       Print help information
//!
//! Global options:
//!   -v, --verbose    Enable verbose logging (debug level)
//!   -h, --help       Print help
//!   -V, --version    Print version
//! ```
//!
//! `decode` and `validate` accept either a single `.dat` file or a
//! directory, in which case every `blk*.dat` file is processed in name
//! order with the truncated-tail remainder carried across file
//! boundaries.
//!
//! # Exit codes
//!
//! | Code | Meaning                                 |
//! |------|-----------------------------------------|
//! | 0    | Success                                 |
//! | 1    | Error (I/O failure, malformed block)    |
//!
//! All error details are written to stderr so stdout can be piped cleanly.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod cmd_decode;
mod cmd_inspect;
mod cmd_validate;
mod files;
mod report;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// The blk command-line tool.
///
/// Decode, inspect, and validate block-storage `.dat` container files.
#[derive(Parser)]
#[command(name = "blk", version, about = "Block-storage file decoder CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (debug level; RUST_LOG overrides).
    #[arg(short, long, global = true)]
    verbose: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Decode blocks and print a full per-block report.
    Decode(DecodeArgs),
    /// Print a one-line, header-only summary of each block in a file.
    Inspect(InspectArgs),
    /// Check a file or directory for structural correctness.
    Validate(ValidateArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `blk decode`.
///
/// Decodes every block in the input and prints the full report — envelope,
/// header, and each transaction's inputs and outputs. `--start`/`--end`
/// bound the printed block index range without skipping any decoding (the
/// stream is self-describing, so earlier blocks must be walked to locate
/// later ones).
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// A `.dat` file, or a directory containing `blk*.dat` files.
    pub path: PathBuf,

    /// First block index (across all files) to print.
    #[arg(long, default_value_t = 0)]
    pub start: usize,

    /// Stop printing at this block index (exclusive).
    #[arg(long)]
    pub end: Option<usize>,

    /// Emit one JSON object per block (JSON Lines) instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `blk inspect`.
///
/// Walks the block records of a single file and prints one line per block
/// using the header-only decode entry point — the transaction area is
/// located but not decoded, so this is cheap even for large files.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to the `.dat` file to inspect.
    pub file: PathBuf,

    /// Inspect only the block at this zero-based index.
    #[arg(long)]
    pub block: Option<usize>,
}

/// Arguments for `blk validate`.
///
/// Runs a full decode over the input and reports per-file checkmarks and
/// totals, or the first structural error with its file context.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// A `.dat` file, or a directory containing `blk*.dat` files.
    pub path: PathBuf,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();

    let result = match cli.command {
        Commands::Decode(args) => cmd_decode::run(&args),
        Commands::Inspect(args) => cmd_inspect::run(&args),
        Commands::Validate(args) => cmd_validate::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
