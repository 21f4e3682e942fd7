use blk_types::Block;
use blk_types::error::RecordError;
use blk_types::header::{BlockHeader, HEADER_LEN};
use blk_types::transaction::Transaction;
use blk_wire::compact_size::decode_compact_size;
use blk_wire::error::WireError;
use blk_wire::frame::{BlockFrame, FRAME_OVERHEAD};

use crate::error::DecodeError;

/// Decode one complete block record.
///
/// `candidate` is the full byte span of a single record: marker, size
/// field, 80-byte header, transaction area. Decoding proceeds in order:
///
///   1. **Envelope**: Validate the magic marker and read the declared
///      size, then check it against the candidate's actual span. The two
///      must agree exactly (`declared == candidate.len() - 8`); a
///      mismatch in either direction fails with
///      [`DecodeError::SizeMismatch`] and is never silently ignored.
///   2. **Header**: Decode the six fixed-width fields and compute the
///      identifying hash from the raw 80 bytes.
///   3. **Transactions**: Decode the transaction count, then decode that
///      many transactions in sequence, each one's start offset computed
///      from the end of the previous one.
///   4. **Termination**: Fail with [`DecodeError::TrailingData`] if bytes
///      remain after the last transaction.
///
/// # Errors
///
/// - [`DecodeError::Wire`] for a bad marker or a record shorter than the
///   8-byte envelope.
/// - [`DecodeError::SizeMismatch`] when the size field disagrees with the
///   actual span.
/// - [`DecodeError::Record`] for header or transaction decode failures.
/// - [`DecodeError::TrailingData`] for leftover bytes.
pub fn decode_block(candidate: &[u8]) -> Result<Block, DecodeError> {
    let Some((frame, consumed)) = BlockFrame::read_from(candidate)? else {
        if candidate.len() < FRAME_OVERHEAD {
            return Err(WireError::BufferTooShort {
                field: "block record",
                expected: FRAME_OVERHEAD,
                actual: candidate.len(),
            }
            .into());
        }
        // Complete envelope, but the declared size wants more bytes than
        // the candidate holds.
        let declared = u32::from_le_bytes([candidate[4], candidate[5], candidate[6], candidate[7]]);
        return Err(DecodeError::SizeMismatch {
            declared,
            actual: candidate.len() - FRAME_OVERHEAD,
        });
    };

    if consumed != candidate.len() {
        // The declared size stops short of the candidate's actual span.
        return Err(DecodeError::SizeMismatch {
            declared: frame.declared_size,
            actual: candidate.len() - FRAME_OVERHEAD,
        });
    }

    let header = BlockHeader::decode(frame.body)?;

    let tx_area = &frame.body[HEADER_LEN..];
    let tx_count = decode_compact_size(tx_area).map_err(|source| RecordError::Count {
        field: "transaction count",
        source,
    })?;

    let mut cursor = tx_count.encoded_len;
    let mut transactions = Vec::new();
    for _ in 0..tx_count.value {
        let (tx, used) = Transaction::decode(&tx_area[cursor..])?;
        transactions.push(tx);
        cursor += used;
    }

    if cursor < tx_area.len() {
        return Err(DecodeError::TrailingData {
            extra_bytes: tx_area.len() - cursor,
        });
    }

    Ok(Block {
        magic: [candidate[0], candidate[1], candidate[2], candidate[3]],
        declared_size: frame.declared_size,
        header,
        tx_count: tx_count.value,
        transactions,
    })
}

/// Decode only the header of a block record.
///
/// The lightweight inspection entry point: validates the marker, then
/// decodes the 80 bytes after the envelope. The size field and the
/// transaction area are not examined, so this succeeds on records whose
/// transaction area is truncated or malformed.
///
/// # Errors
///
/// - [`DecodeError::Wire`] for a bad or missing marker, or fewer than
///   88 bytes of input.
pub fn decode_header(candidate: &[u8]) -> Result<BlockHeader, DecodeError> {
    let marker = candidate.get(..4).ok_or(WireError::BufferTooShort {
        field: "magic marker",
        expected: 4,
        actual: candidate.len(),
    })?;
    if marker != blk_wire::frame::MAGIC {
        return Err(WireError::InvalidMagic {
            found: [marker[0], marker[1], marker[2], marker[3]],
        }
        .into());
    }

    let header = BlockHeader::decode(candidate.get(FRAME_OVERHEAD..).unwrap_or(&[]))?;
    Ok(header)
}
