#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: compact-size decoding.
//
// Catches bugs in:
// - Discriminator dispatch
// - Truncated wide forms
// - Little-endian value assembly
fuzz_target!(|data: &[u8]| {
    let _ = blk_wire::compact_size::decode_compact_size(data);
});
