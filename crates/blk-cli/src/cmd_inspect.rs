//! Implementation of `blk inspect`.
//!
//! Walks the block records of one file and prints a one-line summary per
//! block from the header-only decode entry point. Frame extents come from
//! the declared size field, so the transaction area is skipped over
//! without being decoded.
//!
//! # Output format
//!
//! ```text
//! Block 0: 000000000019D6689C085AE165831E934FF763AE46A2A6C172B3F1B60A8CE26F  v1  2009-01-03 18:15:05  285 bytes, 1 tx
//! Block 1: 00000000839A8E6886AB5951D76F411475428AFC90947EE320161BBF18EB6048  v1  2009-01-09 02:54:25  215 bytes, 1 tx
//! ---
//! 2 blocks, 0 bytes left over
//! ```

use std::fs;

use anyhow::{Context, Result};
use blk_decoder::{decode_header, stream::find_marker};
use blk_wire::compact_size::decode_compact_size;
use blk_wire::frame::BlockFrame;

use crate::InspectArgs;

/// Run the `blk inspect` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or a record's header is
/// malformed. A truncated final record is reported, not an error — that
/// is the normal shape of a file whose last block continues in the next
/// one.
pub fn run(args: &InspectArgs) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;

    let mut cursor = 0;
    let mut index = 0usize;
    let mut leftover = 0usize;

    while let Some(found) = find_marker(&bytes[cursor..]) {
        let start = cursor + found;
        match BlockFrame::read_from(&bytes[start..])
            .with_context(|| format!("bad record at offset {start}"))?
        {
            Some((frame, consumed)) => {
                if args.block.is_none_or(|target| target == index) {
                    let candidate = &bytes[start..start + consumed];
                    let header = decode_header(candidate)
                        .with_context(|| format!("bad header at offset {start}"))?;
                    let time = header.time().map_or_else(
                        || header.timestamp.to_string(),
                        |t| t.format("%Y-%m-%d %H:%M:%S").to_string(),
                    );
                    println!(
                        "Block {index}: {}  v{}  {time}  {} bytes, {}",
                        header.hash_hex(),
                        header.version,
                        frame.declared_size,
                        tx_count_label(frame.body),
                    );
                }
                index += 1;
                cursor = start + consumed;
            }
            None => {
                leftover = bytes.len() - start;
                break;
            }
        }
    }

    println!("---");
    println!(
        "{index} block{}, {leftover} bytes left over",
        if index == 1 { "" } else { "s" }
    );
    Ok(())
}

/// Formats the declared transaction count, or a placeholder when the
/// count field itself is malformed (inspect stays header-only and does
/// not fail on a bad transaction area).
fn tx_count_label(body: &[u8]) -> String {
    match body.get(80..).map(decode_compact_size) {
        Some(Ok(cs)) => format!("{} tx", cs.value),
        _ => "? tx".to_string(),
    }
}
