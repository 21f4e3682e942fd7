#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: cursor-threaded transaction decoding.
//
// Catches bugs in:
// - Script bounds checks (declared length vs. available bytes)
// - Cursor advancement across variable-length records
// - Oversized counts
fuzz_target!(|data: &[u8]| {
    if let Ok((_, consumed)) = blk_types::Transaction::decode(data) {
        assert!(consumed <= data.len());
    }
});
