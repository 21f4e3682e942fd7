//! Conformance tests against externally verifiable values.
//!
//! The genesis block is the one record whose every field is documented in
//! the reference material: its hash, merkle root, timestamp, nonce, and
//! coinbase scripts are fixed for all time. Decoding it end-to-end pins
//! the whole pipeline — envelope validation, endian handling, the
//! double-SHA256 identifying hash, compact-size walking, and the
//! cursor-threaded transaction decode — to known-good output.
//!
//! The rendered report is additionally held in insta inline snapshots so
//! a formatting regression shows up as a readable diff.

use blk_decoder::{decode_block, decode_chunk, decode_header};
use blk_tests::fixtures::{GENESIS_HASH, GENESIS_MERKLE_ROOT, genesis_record};
use blk_wire::compact_size::decode_compact_size;
use insta::assert_snapshot;

// ── Genesis block, full decode ────────────────────────────────────────────────

#[test]
fn genesis_block_decodes() {
    let block = decode_block(&genesis_record()).expect("genesis record must decode");

    assert_eq!(block.magic_hex(), "F9BEB4D9");
    assert_eq!(block.declared_size, 285);
    assert_eq!(block.header.hash_hex(), GENESIS_HASH);
    assert_eq!(block.header.version, 1);
    assert_eq!(block.header.prev_block, [0u8; 32]);
    assert_eq!(block.header.merkle_root_hex(), GENESIS_MERKLE_ROOT);
    assert_eq!(block.header.timestamp, 1_231_006_505);
    assert_eq!(block.header.bits_hex(), "1D00FFFF");
    assert_eq!(block.header.nonce, 2_083_236_893);
    assert_eq!(block.tx_count, 1);
}

#[test]
fn genesis_coinbase_transaction() {
    let block = decode_block(&genesis_record()).unwrap();
    let tx = &block.transactions[0];

    assert_eq!(tx.version, 1);
    assert_eq!(tx.lock_time, 0);

    assert_eq!(tx.inputs.len(), 1);
    let input = &tx.inputs[0];
    assert!(input.is_coinbase());
    assert_eq!(input.script_sig.len(), 77);
    // "The Times 03/Jan/2009 Chancellor on brink of second bailout for banks"
    assert!(
        input
            .script_sig
            .windows(9)
            .any(|w| w == b"The Times")
    );
    assert_eq!(input.sequence, [0xFF; 4]);

    assert_eq!(tx.outputs.len(), 1);
    let output = &tx.outputs[0];
    assert_eq!(output.value, 5_000_000_000);
    assert_eq!(output.script_pubkey.len(), 67);
    assert_eq!(output.script_pubkey[0], 0x41); // push 65 bytes
    assert_eq!(*output.script_pubkey.last().unwrap(), 0xAC); // OP_CHECKSIG
}

#[test]
fn genesis_header_only_entry_matches_full_decode() {
    let record = genesis_record();
    let full = decode_block(&record).unwrap();
    let header = decode_header(&record).unwrap();
    assert_eq!(header, full.header);
}

#[test]
fn genesis_through_stream_splitter() {
    let out = decode_chunk(&genesis_record(), &[]).unwrap();
    assert_eq!(out.blocks.len(), 1);
    assert!(out.remainder.is_empty());
    assert_eq!(out.blocks[0].header.hash_hex(), GENESIS_HASH);
}

#[test]
fn genesis_decode_is_deterministic() {
    let record = genesis_record();
    assert_eq!(decode_block(&record).unwrap(), decode_block(&record).unwrap());
}

// ── Compact-size boundary table ───────────────────────────────────────────────

#[test]
fn compact_size_boundary_scenarios() {
    let cases: &[(&[u8], u64, usize)] = &[
        (&[0x01], 1, 1),
        (&[0xFC], 252, 1),
        (&[0xFD, 0xE8, 0x03], 1_000, 3),
        (&[0xFE, 0xA0, 0x86, 0x01, 0x00], 100_000, 5),
        (
            &[0xFF, 0x00, 0xE4, 0x0B, 0x54, 0x02, 0x00, 0x00, 0x00],
            10_000_000_000,
            9,
        ),
    ];
    for &(bytes, value, encoded_len) in cases {
        let cs = decode_compact_size(bytes).unwrap();
        assert_eq!(cs.value, value);
        assert_eq!(cs.encoded_len, encoded_len);
    }
}

// ── Report rendering ──────────────────────────────────────────────────────────

#[test]
fn genesis_header_report() {
    let header = decode_header(&genesis_record()).unwrap();
    assert_snapshot!(header.to_string(), @r"
    Hash:        000000000019D6689C085AE165831E934FF763AE46A2A6C172B3F1B60A8CE26F
    Version:     1
    Prev Block:  0000000000000000000000000000000000000000000000000000000000000000
    Merkle Root: 4A5E1E4BAAB89F3A32518A88C31BC87F618F76673E2CC77AB2127B7AFDEDA33B
    Timestamp:   2009-01-03 18:15:05 UTC (1231006505)
    Bits:        1D00FFFF
    Nonce:       2083236893
    ");
}

#[test]
fn genesis_block_report() {
    let block = decode_block(&genesis_record()).unwrap();
    assert_snapshot!(block.to_string(), @r"
    Magic:       F9BEB4D9
    Size:        285
    Hash:        000000000019D6689C085AE165831E934FF763AE46A2A6C172B3F1B60A8CE26F
    Version:     1
    Prev Block:  0000000000000000000000000000000000000000000000000000000000000000
    Merkle Root: 4A5E1E4BAAB89F3A32518A88C31BC87F618F76673E2CC77AB2127B7AFDEDA33B
    Timestamp:   2009-01-03 18:15:05 UTC (1231006505)
    Bits:        1D00FFFF
    Nonce:       2083236893
    Tx Count:    1
    Tx 0:
      Version:  1
      Inputs:   1
        Input 0:
          Prev TxId: 0000000000000000000000000000000000000000000000000000000000000000
          Vout:      FFFFFFFF
          ScriptSig: (77 bytes) 04FFFF001D0104455468652054696D65732030332F4A616E2F32303039204368616E63656C6C6F72206F6E206272696E6B206F66207365636F6E64206261696C6F757420666F722062616E6B73
          Sequence:  FFFFFFFF
      Outputs:  1
        Output 0:
          Amount:       5000000000
          ScriptPubKey: (67 bytes) 4104678AFDB0FE5548271967F1A67130B7105CD6A828E03909A67962E0EA1F61DEB649F6BC3F4CEF38C4F35504E51EC112DE5C384DF7BA0B8D578A4C702B6BF11D5FAC
      Locktime: 0
    ");
}
