use blk_wire::WireError;

/// Errors from decoding the typed records inside a block's byte span.
///
/// Error hierarchy:
///
/// ```text
///   RecordError
///   ├── Wire(WireError)      ← fixed-width field ran out of bytes
///   ├── Count                ← a compact-size count/length field is malformed
///   ├── ScriptBounds         ← declared script length overruns the buffer
///   └── SegwitNotSupported   ← extended transaction encoding detected
/// ```
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// A fixed-width field could not be read.
    #[error(transparent)]
    Wire(#[from] WireError),

    /// A compact-size field (a count or a script length) is malformed.
    ///
    /// Wraps the underlying [`WireError`] with the name of the field being
    /// decoded, so a truncated input count reads differently from a
    /// truncated script length.
    #[error("{field}: {source}")]
    Count {
        field: &'static str,
        source: WireError,
    },

    /// A script's declared length would read past the end of the buffer.
    #[error("{field}: declared length {declared} exceeds {available} available bytes")]
    ScriptBounds {
        field: &'static str,
        declared: u64,
        available: usize,
    },

    /// The transaction begins with the segregated-witness marker byte
    /// (0x00 where the input count belongs). That encoding stores witness
    /// data this decoder does not model; it is rejected outright rather
    /// than misread as an empty input list.
    #[error("transaction uses the extended witness encoding, which is not supported")]
    SegwitNotSupported,
}
