#![no_main]

use blk_wire::compact_size::{MAX_COMPACT_SIZE_BYTES, decode_compact_size, encode_compact_size};
use libfuzzer_sys::fuzz_target;

// Fuzz target: compact-size encode→decode roundtrip.
//
// Encodes an arbitrary u64, decodes it back, and asserts the value and
// the consumed length survive intact.
fuzz_target!(|value: u64| {
    let mut buf = [0u8; MAX_COMPACT_SIZE_BYTES];
    let len = encode_compact_size(value, &mut buf);

    let decoded = decode_compact_size(&buf[..len]).unwrap();
    assert_eq!(decoded.value, value);
    assert_eq!(decoded.encoded_len, len);
});
