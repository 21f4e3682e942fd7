#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: block frame envelope parsing.
//
// Catches bugs in:
// - Magic marker validation
// - Partial-frame detection (the Ok(None) path)
// - Declared-size arithmetic near usize limits
fuzz_target!(|data: &[u8]| {
    let _ = blk_wire::frame::BlockFrame::read_from(data);
});
