//! Implementation of `blk validate`.
//!
//! Runs a full structural decode over the input — every envelope checked
//! against its declared size, every header decoded, every transaction
//! walked — and reports either per-file checkmarks (`✓`) or the first
//! diagnostic failure (`✗`).
//!
//! # Success output
//!
//! ```text
//! ✓ blk00000.dat: 119965 blocks
//! ✓ blk00001.dat: 128376 blocks
//! ✓ Stream: ended on a record boundary
//! 248341 blocks valid
//! ```
//!
//! # Failure output
//!
//! ```text
//! ✗ blk00001.dat: declared block size 285 does not match actual span 280
//! ```

use std::fs;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use blk_decoder::decode_chunk;
use tracing::info;

use crate::{ValidateArgs, files};

/// Run the `blk validate` command.
///
/// Prints a validation report to stdout and returns `Ok(())` on success.
/// On any structural error, prints a `✗` diagnostic and returns `Err`,
/// which the main dispatcher converts to exit code 1.
///
/// # Errors
///
/// Returns an error if a file cannot be read or any block fails to
/// decode.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let paths = files::dat_files(&args.path)?;

    let mut carry = Vec::new();
    let mut total = 0usize;
    let started = Instant::now();

    for path in &paths {
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        let bytes =
            fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;

        match decode_chunk(&bytes, &carry) {
            Ok(out) => {
                println!(
                    "✓ {name}: {} block{}",
                    out.blocks.len(),
                    if out.blocks.len() == 1 { "" } else { "s" }
                );
                total += out.blocks.len();
                carry = out.remainder;
            }
            Err(e) => {
                println!("✗ {name}: {e}");
                return Err(anyhow!("validation failed"));
            }
        }
    }

    if carry.is_empty() {
        println!("✓ Stream: ended on a record boundary");
    } else {
        println!("✗ Stream: {} bytes of an incomplete final record", carry.len());
        return Err(anyhow!("validation failed"));
    }

    info!(blocks = total, elapsed = ?started.elapsed(), "validation finished");
    println!("{total} block{} valid", if total == 1 { "" } else { "s" });
    Ok(())
}
