//! Byte-order conversion between the little-endian layout used on disk
//! and the big-endian form used for integer parsing and human display.
//!
//! Hashes, sizes, and every multi-byte integer in the container format are
//! stored little-endian; block explorers and the reference documentation
//! print them big-endian. Reversal is self-inverse, so the same functions
//! serve both directions.

use crate::error::WireError;

/// Reverse the byte order of a slice, returning a new vector.
///
/// Works on any length, including empty. The input is never mutated.
#[must_use]
pub fn reversed(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().rev().copied().collect()
}

/// Uppercase hex string of the raw bytes, in the order given.
#[must_use]
pub fn hex_upper(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// Uppercase hex string of the byte-reversed slice.
///
/// This is the standard on-disk → display conversion: a 32-byte hash read
/// straight from a record prints in the familiar explorer form only after
/// its bytes are reversed.
#[must_use]
pub fn reversed_hex(bytes: &[u8]) -> String {
    hex::encode_upper(reversed(bytes))
}

/// Byte-swap a hex string: parse it, reverse the bytes, re-encode uppercase.
///
/// # Example
///
/// ```
/// let swapped = blk_wire::endian::swap_hex(
///     "6FE28C0AB6F1B372C1A6A246AE63F74F931E8365E15A089C68D6190000000000",
/// ).unwrap();
/// assert_eq!(
///     swapped,
///     "000000000019D6689C085AE165831E934FF763AE46A2A6C172B3F1B60A8CE26F",
/// );
/// ```
///
/// # Errors
///
/// Returns [`WireError::Hex`] for odd-length or non-hex input.
pub fn swap_hex(s: &str) -> Result<String, WireError> {
    let bytes = hex::decode(s)?;
    Ok(reversed_hex(&bytes))
}
