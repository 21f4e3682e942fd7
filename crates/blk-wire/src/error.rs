/// Errors produced by the byte-level wire primitives.
///
/// Every variant carries the context needed to point at the offending
/// field in a malformed record: the field name where one exists, and the
/// expected-versus-actual byte counts. Nothing here is recovered
/// internally — a malformed byte range is a permanent condition for that
/// range, and the caller decides whether to skip, abort, or log.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// A fixed-width field demanded more bytes than the buffer holds.
    #[error("{field}: need {expected} bytes, got {actual}")]
    BufferTooShort {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A compact-size discriminator demanded trailing bytes that the
    /// buffer does not hold.
    #[error("malformed compact-size: discriminator demands {needed} bytes, {available} available")]
    MalformedCompactSize { needed: usize, available: usize },

    /// The 4 bytes at a block-record start did not match the magic marker.
    #[error("invalid magic marker: expected F9 BE B4 D9, got {found:02X?}")]
    InvalidMagic { found: [u8; 4] },

    /// A hexadecimal string could not be parsed.
    #[error(transparent)]
    Hex(#[from] hex::FromHexError),
}
