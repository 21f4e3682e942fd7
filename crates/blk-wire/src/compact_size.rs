use crate::error::WireError;

/// Maximum number of bytes a compact-size encoding can occupy.
/// 1 discriminator byte + 8 value bytes.
pub const MAX_COMPACT_SIZE_BYTES: usize = 9;

/// A decoded compact-size integer: the value and the number of bytes it
/// occupied on the wire.
///
/// `encoded_len` is always 1, 3, 5, or 9. Every variable-length field in
/// the container format — transaction counts, input counts, output counts,
/// script lengths — is preceded by one of these, so the consumed length is
/// as important as the value: it is what advances the caller's cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompactSize {
    pub value: u64,
    pub encoded_len: usize,
}

/// Decode a compact-size integer from the front of the provided slice.
///
/// The first byte is a discriminator selecting the width:
///
/// | Discriminator | Consumes (total) | Value source               |
/// |---------------|------------------|----------------------------|
/// | 0x00–0xFC     | 1                | the discriminator itself   |
/// | 0xFD          | 3                | next 2 bytes, little-endian |
/// | 0xFE          | 5                | next 4 bytes, little-endian |
/// | 0xFF          | 9                | next 8 bytes, little-endian |
///
/// # Errors
///
/// Returns [`WireError::MalformedCompactSize`] when the input is empty or
/// shorter than the discriminator demands.
pub fn decode_compact_size(buf: &[u8]) -> Result<CompactSize, WireError> {
    let &discriminator = buf.first().ok_or(WireError::MalformedCompactSize {
        needed: 1,
        available: 0,
    })?;

    let (value, encoded_len) = match discriminator {
        0x00..=0xFC => (u64::from(discriminator), 1),
        0xFD => (u64::from(u16::from_le_bytes(tail::<2>(buf)?)), 3),
        0xFE => (u64::from(u32::from_le_bytes(tail::<4>(buf)?)), 5),
        0xFF => (u64::from_le_bytes(tail::<8>(buf)?), 9),
    };

    Ok(CompactSize { value, encoded_len })
}

/// Read the `N` value bytes that follow the discriminator.
fn tail<const N: usize>(buf: &[u8]) -> Result<[u8; N], WireError> {
    buf.get(1..1 + N)
        .and_then(|b| <[u8; N]>::try_from(b).ok())
        .ok_or(WireError::MalformedCompactSize {
            needed: N + 1,
            available: buf.len(),
        })
}

/// Encode a `u64` as a minimal-width compact-size into the provided buffer.
///
/// # Returns
///
/// The number of bytes written (1, 3, 5, or 9).
///
/// # Panics
///
/// Panics if `buf` is shorter than the required encoding length.
/// A [`MAX_COMPACT_SIZE_BYTES`]-byte buffer is always sufficient.
pub fn encode_compact_size(value: u64, buf: &mut [u8]) -> usize {
    match value {
        0..=0xFC => {
            #[allow(clippy::cast_possible_truncation)]
            {
                buf[0] = value as u8;
            }
            1
        }
        0xFD..=0xFFFF => {
            buf[0] = 0xFD;
            #[allow(clippy::cast_possible_truncation)]
            buf[1..3].copy_from_slice(&(value as u16).to_le_bytes());
            3
        }
        0x1_0000..=0xFFFF_FFFF => {
            buf[0] = 0xFE;
            #[allow(clippy::cast_possible_truncation)]
            buf[1..5].copy_from_slice(&(value as u32).to_le_bytes());
            5
        }
        _ => {
            buf[0] = 0xFF;
            buf[1..9].copy_from_slice(&value.to_le_bytes());
            9
        }
    }
}
