#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: stream splitting with remainder carry.
//
// Input format:
//   byte 0: split point (as a fraction of the input)
//   bytes 1..: the stream
//
// Splits the stream at an arbitrary point and feeds it as two chunks with
// the remainder carried between them; whatever decodes must match the
// single-chunk decode of the same bytes.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let stream = &data[1..];
    let cut = (data[0] as usize * stream.len()) / 256;

    let whole = blk_decoder::decode_chunk(stream, &[]);

    let first = blk_decoder::decode_chunk(&stream[..cut], &[]);
    let Ok(first) = first else { return };
    let second = blk_decoder::decode_chunk(&stream[cut..], &first.remainder);

    if let (Ok(whole), Ok(second)) = (whole, second) {
        assert_eq!(
            whole.blocks.len(),
            first.blocks.len() + second.blocks.len()
        );
        assert_eq!(whole.remainder, second.remainder);
    }
});
