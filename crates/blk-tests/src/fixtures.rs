//! Shared byte fixtures for integration tests and benchmarks.
//!
//! Two kinds: the real genesis block record (a known-good, externally
//! verifiable input), and synthetic records built field by field so tests
//! can vary counts and script lengths freely.

use blk_wire::compact_size::{MAX_COMPACT_SIZE_BYTES, encode_compact_size};
use blk_wire::frame::MAGIC;

/// The complete genesis block record as it sits in `blk00000.dat`:
/// marker, size field (285), 80-byte header, and the single coinbase
/// transaction. 293 bytes in total.
pub const GENESIS_RECORD_HEX: &str = "\
f9beb4d91d010000010000000000000000000000000000000000000000000000\
0000000000000000000000003ba3edfd7a7b12b27ac72c3e67768f617fc81bc3\
888a51323a9fb8aa4b1e5e4a29ab5f49ffff001d1dac2b7c0101000000010000\
000000000000000000000000000000000000000000000000000000000000ffff\
ffff4d04ffff001d0104455468652054696d65732030332f4a616e2f32303039\
204368616e63656c6c6f72206f6e206272696e6b206f66207365636f6e642062\
61696c6f757420666f722062616e6b73ffffffff0100f2052a01000000434104\
678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb6\
49f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5f\
ac00000000";

/// The genesis block's identifying hash, display order.
pub const GENESIS_HASH: &str =
    "000000000019D6689C085AE165831E934FF763AE46A2A6C172B3F1B60A8CE26F";

/// The genesis block's merkle root, display order.
pub const GENESIS_MERKLE_ROOT: &str =
    "4A5E1E4BAAB89F3A32518A88C31BC87F618F76673E2CC77AB2127B7AFDEDA33B";

/// The genesis record as bytes.
///
/// # Panics
///
/// Never — the constant is valid hex.
#[must_use]
pub fn genesis_record() -> Vec<u8> {
    hex::decode(GENESIS_RECORD_HEX).expect("fixture constant is valid hex")
}

/// Append a minimal-width compact-size to `buf`.
pub fn push_compact_size(buf: &mut Vec<u8>, value: u64) {
    let mut tmp = [0u8; MAX_COMPACT_SIZE_BYTES];
    let n = encode_compact_size(value, &mut tmp);
    buf.extend_from_slice(&tmp[..n]);
}

/// A synthetic transaction: one input per entry of `inputs` (source txid
/// filled with the given byte, the given unlocking script), one output
/// per entry of `outputs` (value, locking script).
#[must_use]
pub fn transaction(inputs: &[(u8, &[u8])], outputs: &[(u64, &[u8])]) -> Vec<u8> {
    let mut buf = 1i32.to_le_bytes().to_vec();
    push_compact_size(&mut buf, inputs.len() as u64);
    for &(txid_byte, script) in inputs {
        buf.extend_from_slice(&[txid_byte; 32]);
        buf.extend_from_slice(&[0xFF; 4]);
        push_compact_size(&mut buf, script.len() as u64);
        buf.extend_from_slice(script);
        buf.extend_from_slice(&[0xFF; 4]);
    }
    push_compact_size(&mut buf, outputs.len() as u64);
    for &(value, script) in outputs {
        buf.extend_from_slice(&value.to_le_bytes());
        push_compact_size(&mut buf, script.len() as u64);
        buf.extend_from_slice(script);
    }
    buf.extend_from_slice(&0u32.to_le_bytes());
    buf
}

/// A synthetic block record wrapping the given transactions. `seed`
/// varies the header's hash fields and nonce so records built in a loop
/// stay distinguishable.
///
/// # Panics
///
/// Panics if the body exceeds `u32::MAX` bytes — not reachable from test
/// inputs.
#[must_use]
pub fn record(seed: u8, txs: &[Vec<u8>]) -> Vec<u8> {
    let mut body = 1i32.to_le_bytes().to_vec();
    body.extend_from_slice(&[seed; 32]);
    body.extend_from_slice(&[seed.wrapping_add(1); 32]);
    body.extend_from_slice(&1_231_006_505u32.to_le_bytes());
    body.extend_from_slice(&[0xFF, 0xFF, 0x00, 0x1D]);
    body.extend_from_slice(&u32::from(seed).to_le_bytes());
    push_compact_size(&mut body, txs.len() as u64);
    for tx in txs {
        body.extend_from_slice(tx);
    }

    let mut rec = MAGIC.to_vec();
    rec.extend_from_slice(&u32::try_from(body.len()).unwrap().to_le_bytes());
    rec.extend_from_slice(&body);
    rec
}
