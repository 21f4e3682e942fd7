#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: full block-record decoding.
//
// Exercises the whole pipeline: envelope, size validation, header,
// transaction walk, trailing-data check.
fuzz_target!(|data: &[u8]| {
    let _ = blk_decoder::decode_block(data);
});
