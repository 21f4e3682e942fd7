//! Implementation of `blk decode`.
//!
//! Reads the input file(s) in name order, splits each into block records
//! with the remainder carried across file boundaries, and prints a full
//! report per block.
//!
//! # Output format
//!
//! ```text
//! Block 0
//! Magic:       F9BEB4D9
//! Size:        285
//! Hash:        000000000019D6689C085AE165831E934FF763AE46A2A6C172B3F1B60A8CE26F
//! ...
//! Tx 0:
//!   Version:  1
//!   Inputs:   1
//!   ...
//! ```
//!
//! With `--json`, one JSON object per block on its own line (JSON Lines),
//! suitable for piping into `jq`.

use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};
use blk_decoder::decode_chunk;
use tracing::{debug, info, warn};

use crate::{DecodeArgs, files, report};

/// Run the `blk decode` command.
///
/// # Errors
///
/// Returns an error if a file cannot be read or any block in the stream
/// is structurally malformed. Decoding stops at the first bad block —
/// skipping it silently could hide corruption.
pub fn run(args: &DecodeArgs) -> Result<()> {
    let paths = files::dat_files(&args.path)?;
    let end = args.end.unwrap_or(usize::MAX);

    let mut carry = Vec::new();
    let mut index = 0usize;

    for path in &paths {
        let started = Instant::now();
        let bytes =
            fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
        debug!(
            file = %path.display(),
            bytes = bytes.len(),
            carry = carry.len(),
            "read file"
        );

        let out = decode_chunk(&bytes, &carry)
            .with_context(|| format!("failed to decode {}", path.display()))?;
        carry = out.remainder;
        info!(
            file = %path.display(),
            blocks = out.blocks.len(),
            elapsed = ?started.elapsed(),
            "decoded file"
        );

        for block in &out.blocks {
            if index >= args.start && index < end {
                if args.json {
                    println!("{}", report::json(index, block));
                } else {
                    println!("{}", report::text(index, block));
                }
            }
            index += 1;
        }

        if index >= end {
            break;
        }
    }

    if !carry.is_empty() {
        warn!(
            bytes = carry.len(),
            "stream ended inside a block record; no following file to complete it"
        );
    }

    Ok(())
}
