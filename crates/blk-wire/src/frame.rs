use crate::error::WireError;

/// Magic marker opening every block record in a block-storage file.
///
/// Stored as raw bytes rather than a u32 so byte order never enters the
/// comparison — it is always these 4 bytes in this order.
pub const MAGIC: [u8; 4] = [0xF9, 0xBE, 0xB4, 0xD9];

/// Bytes occupied by the marker plus the size field.
pub const FRAME_OVERHEAD: usize = 8;

/// The wire envelope wrapping every block record.
///
/// ```text
/// ┌────────┬─────────┬──────────────────────────────────────┐
/// │ Offset │ Size    │ Description                          │
/// ├────────┼─────────┼──────────────────────────────────────┤
/// │ 0      │ 4 bytes │ Magic marker: F9 BE B4 D9            │
/// │ 4      │ 4 bytes │ declared_size, little-endian — byte  │
/// │        │         │ count following this field           │
/// │ 8      │ size    │ body: 80-byte header + tx area       │
/// └────────┴─────────┴──────────────────────────────────────┘
/// ```
///
/// The frame borrows its body from the caller's buffer; nothing is copied
/// at this layer and the source bytes are never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockFrame<'a> {
    /// Byte count declared by the size field (excludes marker and size
    /// field themselves).
    pub declared_size: u32,

    /// The `declared_size` bytes following the size field.
    pub body: &'a [u8],
}

impl<'a> BlockFrame<'a> {
    /// Read one block frame from the front of the provided slice.
    ///
    /// # Returns
    ///
    /// - `Ok(Some((frame, consumed)))` for a complete frame, where
    ///   `consumed` is `FRAME_OVERHEAD + declared_size`.
    /// - `Ok(None)` when the slice starts a frame but does not hold all of
    ///   it — fewer than 8 bytes, or fewer than the declared size demands.
    ///   The caller carries the partial bytes forward as a remainder and
    ///   retries once more input arrives.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::InvalidMagic`] when the first 4 bytes are
    /// present but are not the marker. A partial marker prefix (1–3 bytes)
    /// is treated as an incomplete frame, not a mismatch.
    pub fn read_from(buf: &'a [u8]) -> Result<Option<(Self, usize)>, WireError> {
        if buf.len() < 4 {
            return if MAGIC.starts_with(buf) {
                Ok(None)
            } else {
                Err(WireError::BufferTooShort {
                    field: "magic marker",
                    expected: 4,
                    actual: buf.len(),
                })
            };
        }

        if buf[0..4] != MAGIC {
            let found = [buf[0], buf[1], buf[2], buf[3]];
            return Err(WireError::InvalidMagic { found });
        }

        if buf.len() < FRAME_OVERHEAD {
            return Ok(None);
        }
        let declared_size = u32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);

        let body_end = FRAME_OVERHEAD + declared_size as usize;
        let Some(body) = buf.get(FRAME_OVERHEAD..body_end) else {
            // Truncated tail: the declared size exceeds the available bytes.
            return Ok(None);
        };

        Ok(Some((
            Self {
                declared_size,
                body,
            },
            body_end,
        )))
    }
}
