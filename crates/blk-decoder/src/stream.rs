//! Splitting a raw byte stream into block records.
//!
//! A block-storage file is a sequence of marker-delimited records, but a
//! single read (or a single file) does not necessarily end on a record
//! boundary: the last record may be cut mid-way, to be continued by the
//! next file's bytes. The splitter therefore works on chunks and threads
//! an explicit carry value between calls:
//!
//! ```text
//!   carry ──┐
//!           ▼
//!   ┌───────┬──────────────────────────────┐
//!   │ carry │ chunk                        │
//!   └───────┴──────────────────────────────┘
//!     scan → block, block, block, │ tail │
//!                                 └──────┴──→ remainder (next call's carry)
//! ```
//!
//! The carry is a plain value owned by the caller's loop — there is no
//! splitter state and no global.

use std::borrow::Cow;

use blk_types::Block;
use blk_wire::frame::{BlockFrame, MAGIC};

use crate::decoder::decode_block;
use crate::error::DecodeError;

/// The result of splitting and decoding one chunk.
#[derive(Debug, Default)]
pub struct ChunkDecode {
    /// Fully decoded blocks, in strictly increasing byte-offset order —
    /// the on-disk sequence, which is not necessarily chain order.
    pub blocks: Vec<Block>,

    /// Bytes of a trailing record that could not be completed from this
    /// chunk. Prepend to the next chunk via the `carry` argument; empty
    /// when the chunk ended exactly on a record boundary.
    pub remainder: Vec<u8>,
}

/// Split one chunk of a block stream into records and decode each one.
///
/// `carry` is the remainder returned by the previous call (empty for the
/// first chunk). The chunk is scanned for occurrences of the 4-byte magic
/// marker; each marker starts one candidate record whose extent is given
/// by its declared size. Bytes between records that are not a marker —
/// the zero padding at a file's tail, typically — are skipped by the
/// scan. A record whose declared size wants more bytes than the chunk
/// holds becomes the remainder, as does a bare partial marker (1–3 bytes)
/// at the very end.
///
/// # Errors
///
/// Any [`DecodeError`] from decoding a complete candidate record. Errors
/// are surfaced, never skipped: a malformed block ends the call so the
/// caller can decide what to do with it.
pub fn decode_chunk(chunk: &[u8], carry: &[u8]) -> Result<ChunkDecode, DecodeError> {
    let data: Cow<'_, [u8]> = if carry.is_empty() {
        Cow::Borrowed(chunk)
    } else {
        let mut joined = Vec::with_capacity(carry.len() + chunk.len());
        joined.extend_from_slice(carry);
        joined.extend_from_slice(chunk);
        Cow::Owned(joined)
    };

    let mut cursor = 0;
    let mut blocks = Vec::new();

    loop {
        let Some(found) = find_marker(&data[cursor..]) else {
            // No complete marker ahead. A marker prefix cut by the chunk
            // boundary still has to be carried, or the next chunk would
            // never see the record it starts.
            let remainder = partial_marker_suffix(&data[cursor..]).to_vec();
            return Ok(ChunkDecode { blocks, remainder });
        };
        let start = cursor + found;

        match BlockFrame::read_from(&data[start..])? {
            Some((_, consumed)) => {
                let block = decode_block(&data[start..start + consumed])?;
                blocks.push(block);
                cursor = start + consumed;
            }
            None => {
                // Truncated tail: declared size exceeds the available
                // bytes. Carry everything from its marker onwards.
                let remainder = data[start..].to_vec();
                return Ok(ChunkDecode { blocks, remainder });
            }
        }
    }
}

/// Byte offset of the next complete magic marker, if any.
///
/// Public so that header-only tooling can walk record boundaries without
/// paying for full transaction decoding.
#[must_use]
pub fn find_marker(buf: &[u8]) -> Option<usize> {
    buf.windows(MAGIC.len()).position(|window| window == MAGIC)
}

/// The longest strict suffix of `buf` (at most 3 bytes) that is a prefix
/// of the magic marker.
fn partial_marker_suffix(buf: &[u8]) -> &[u8] {
    let longest = buf.len().min(MAGIC.len() - 1);
    for take in (1..=longest).rev() {
        let suffix = &buf[buf.len() - take..];
        if MAGIC.starts_with(suffix) {
            return suffix;
        }
    }
    &[]
}
