#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: 80-byte header decoding.
//
// The decoder must never panic on short input, and the derived hash must
// be stable for identical bytes.
fuzz_target!(|data: &[u8]| {
    if let Ok(a) = blk_types::BlockHeader::decode(data) {
        let b = blk_types::BlockHeader::decode(data).unwrap();
        assert_eq!(a.hash, b.hash);
    }
});
