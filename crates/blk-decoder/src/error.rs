use blk_types::RecordError;
use blk_wire::WireError;

/// Errors from block-level decoding and stream splitting.
///
/// Error hierarchy:
///
/// ```text
///   DecodeError
///   ├── SizeMismatch          ← declared vs. actual block span disagree
///   ├── TrailingData          ← bytes left over after the last transaction
///   ├── Record(RecordError)   ← from header/transaction decoding
///   └── Wire(WireError)       ← from frame/compact-size primitives
/// ```
///
/// None of these are recovered internally. A malformed block is surfaced,
/// not skipped — silently skipping could hide data corruption, so the
/// caller decides whether to skip, abort, or log.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The size field disagrees with the actual byte span of the record.
    ///
    /// This is the primary integrity check the decoder performs. Both
    /// numbers exclude the 8 bytes of marker and size field.
    #[error("declared block size {declared} does not match actual span {actual}")]
    SizeMismatch { declared: u32, actual: usize },

    /// Bytes remained in the block's span after the declared number of
    /// transactions had been decoded.
    #[error("{extra_bytes} bytes left over after the last transaction")]
    TrailingData { extra_bytes: usize },

    /// A header or transaction record failed to decode.
    #[error(transparent)]
    Record(#[from] RecordError),

    /// A wire primitive failed.
    #[error(transparent)]
    Wire(#[from] WireError),
}
