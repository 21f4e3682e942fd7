use std::fmt;

use blk_wire::endian;
use blk_wire::error::WireError;
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use crate::error::RecordError;

/// Length of the fixed block header in bytes.
pub const HEADER_LEN: usize = 80;

/// The fixed 80-byte block header.
///
/// Field layout (offsets within the header; every multi-byte field is
/// stored little-endian on disk):
///
/// ```text
/// ┌────────┬─────────┬──────────────────────────────────┐
/// │ Offset │ Size    │ Field                            │
/// ├────────┼─────────┼──────────────────────────────────┤
/// │ 0      │ 4 bytes │ version (signed)                 │
/// │ 4      │ 32 bytes│ previous block hash              │
/// │ 36     │ 32 bytes│ merkle root                      │
/// │ 68     │ 4 bytes │ timestamp (Unix seconds)         │
/// │ 72     │ 4 bytes │ difficulty bits                  │
/// │ 76     │ 4 bytes │ nonce                            │
/// └────────┴─────────┴──────────────────────────────────┘
/// ```
///
/// The 32-byte hash fields keep their raw on-disk order here; the
/// `*_hex` accessors byte-reverse for display. `hash` is derived at
/// decode time — double SHA-256 over the raw 80 bytes — and is immutable
/// afterwards, like every other field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockHeader {
    pub version: i32,
    pub prev_block: [u8; 32],
    pub merkle_root: [u8; 32],
    pub timestamp: u32,
    pub bits: [u8; 4],
    pub nonce: u32,

    /// Double SHA-256 of the raw header bytes, internal (non-reversed)
    /// byte order. This is the block's canonical identifying hash.
    pub hash: [u8; 32],
}

impl BlockHeader {
    /// Decode the header from the first [`HEADER_LEN`] bytes of the slice.
    ///
    /// The identifying hash is computed here, from the raw bytes as they
    /// sit on disk — hashing a byte-reversed header produces a different
    /// (wrong) digest.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::BufferTooShort`] (as a [`RecordError`]) when
    /// fewer than 80 bytes are supplied.
    pub fn decode(buf: &[u8]) -> Result<Self, RecordError> {
        let raw: &[u8; HEADER_LEN] =
            buf.get(..HEADER_LEN)
                .and_then(|b| b.try_into().ok())
                .ok_or(WireError::BufferTooShort {
                    field: "block header",
                    expected: HEADER_LEN,
                    actual: buf.len(),
                })?;

        let hash: [u8; 32] = Sha256::digest(Sha256::digest(raw)).into();

        let mut prev_block = [0u8; 32];
        prev_block.copy_from_slice(&raw[4..36]);
        let mut merkle_root = [0u8; 32];
        merkle_root.copy_from_slice(&raw[36..68]);

        Ok(Self {
            version: i32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]),
            prev_block,
            merkle_root,
            timestamp: u32::from_le_bytes([raw[68], raw[69], raw[70], raw[71]]),
            bits: [raw[72], raw[73], raw[74], raw[75]],
            nonce: u32::from_le_bytes([raw[76], raw[77], raw[78], raw[79]]),
            hash,
        })
    }

    /// The identifying hash, byte-reversed into display order.
    #[must_use]
    pub fn hash_hex(&self) -> String {
        endian::reversed_hex(&self.hash)
    }

    /// The previous-block reference, byte-reversed into display order.
    #[must_use]
    pub fn prev_block_hex(&self) -> String {
        endian::reversed_hex(&self.prev_block)
    }

    /// The merkle root, byte-reversed into display order.
    #[must_use]
    pub fn merkle_root_hex(&self) -> String {
        endian::reversed_hex(&self.merkle_root)
    }

    /// The difficulty bits, byte-reversed into display order.
    #[must_use]
    pub fn bits_hex(&self) -> String {
        endian::reversed_hex(&self.bits)
    }

    /// The timestamp as a UTC datetime, widened from the unsigned 32-bit
    /// source field.
    #[must_use]
    pub fn time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(i64::from(self.timestamp), 0)
    }
}

impl fmt::Display for BlockHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hash:        {}", self.hash_hex())?;
        writeln!(f, "Version:     {}", self.version)?;
        writeln!(f, "Prev Block:  {}", self.prev_block_hex())?;
        writeln!(f, "Merkle Root: {}", self.merkle_root_hex())?;
        match self.time() {
            Some(t) => writeln!(
                f,
                "Timestamp:   {} ({})",
                t.format("%Y-%m-%d %H:%M:%S UTC"),
                self.timestamp
            )?,
            None => writeln!(f, "Timestamp:   {}", self.timestamp)?,
        }
        writeln!(f, "Bits:        {}", self.bits_hex())?;
        write!(f, "Nonce:       {}", u64::from(self.nonce))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The genesis block header: version 1, zero previous block, the
    /// well-known merkle root, timestamp 2009-01-03 18:15:05 UTC.
    fn genesis_header() -> Vec<u8> {
        let mut h = Vec::with_capacity(HEADER_LEN);
        h.extend_from_slice(&1i32.to_le_bytes());
        h.extend_from_slice(&[0u8; 32]);
        h.extend_from_slice(
            &hex::decode("3ba3edfd7a7b12b27ac72c3e67768f617fc81bc3888a51323a9fb8aa4b1e5e4a")
                .unwrap(),
        );
        h.extend_from_slice(&1_231_006_505u32.to_le_bytes());
        h.extend_from_slice(&[0xFF, 0xFF, 0x00, 0x1D]);
        h.extend_from_slice(&2_083_236_893u32.to_le_bytes());
        h
    }

    #[test]
    fn genesis_header_fields() {
        let header = BlockHeader::decode(&genesis_header()).unwrap();
        assert_eq!(header.version, 1);
        assert_eq!(header.prev_block, [0u8; 32]);
        assert_eq!(header.timestamp, 1_231_006_505);
        assert_eq!(header.bits_hex(), "1D00FFFF");
        assert_eq!(header.nonce, 2_083_236_893);
    }

    #[test]
    fn genesis_header_hash() {
        let header = BlockHeader::decode(&genesis_header()).unwrap();
        assert_eq!(
            header.hash_hex(),
            "000000000019D6689C085AE165831E934FF763AE46A2A6C172B3F1B60A8CE26F"
        );
    }

    #[test]
    fn genesis_merkle_root_displays_reversed() {
        let header = BlockHeader::decode(&genesis_header()).unwrap();
        assert_eq!(
            header.merkle_root_hex(),
            "4A5E1E4BAAB89F3A32518A88C31BC87F618F76673E2CC77AB2127B7AFDEDA33B"
        );
    }

    #[test]
    fn decode_is_deterministic() {
        let bytes = genesis_header();
        let a = BlockHeader::decode(&bytes).unwrap();
        let b = BlockHeader::decode(&bytes).unwrap();
        assert_eq!(a.hash, b.hash);
        assert_eq!(a, b);
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        // The header decoder only ever looks at the first 80 bytes.
        let mut bytes = genesis_header();
        let reference = BlockHeader::decode(&bytes).unwrap();
        bytes.extend_from_slice(&[0xAA; 40]);
        assert_eq!(BlockHeader::decode(&bytes).unwrap(), reference);
    }

    #[test]
    fn short_input_is_rejected() {
        let bytes = genesis_header();
        let result = BlockHeader::decode(&bytes[..79]);
        assert!(matches!(
            result,
            Err(RecordError::Wire(blk_wire::WireError::BufferTooShort {
                field: "block header",
                expected: HEADER_LEN,
                actual: 79,
            }))
        ));
    }

    #[test]
    fn timestamp_widens_to_datetime() {
        let header = BlockHeader::decode(&genesis_header()).unwrap();
        let t = header.time().unwrap();
        assert_eq!(t.format("%Y-%m-%d %H:%M:%S").to_string(), "2009-01-03 18:15:05");
    }
}
