//! Report assembly for decoded blocks.
//!
//! The text form leans on the `Display` impls in `blk-types` (the
//! byte-reversed, explorer-style presentation); the JSON form is built
//! field by field so the output schema is explicit in one place.

use blk_types::Block;
use blk_wire::endian;
use serde_json::{Value, json};

/// The text report for one block, headed by its stream index.
#[must_use]
pub fn text(index: usize, block: &Block) -> String {
    format!("Block {index}\n{block}")
}

/// The JSON report for one block.
///
/// Hashes and scripts are uppercase hex; hash-like fields are
/// byte-reversed into display order, matching the text report.
#[must_use]
pub fn json(index: usize, block: &Block) -> Value {
    let transactions: Vec<Value> = block
        .transactions
        .iter()
        .map(|tx| {
            json!({
                "version": tx.version,
                "inputs": tx.inputs.iter().map(|input| {
                    json!({
                        "prev_txid": input.prev_txid_hex(),
                        "prev_vout": endian::hex_upper(&input.prev_vout),
                        "script_sig": endian::hex_upper(&input.script_sig),
                        "sequence": endian::hex_upper(&input.sequence),
                    })
                }).collect::<Vec<_>>(),
                "outputs": tx.outputs.iter().map(|output| {
                    json!({
                        "value": output.value,
                        "script_pubkey": endian::hex_upper(&output.script_pubkey),
                    })
                }).collect::<Vec<_>>(),
                "lock_time": tx.lock_time,
            })
        })
        .collect();

    json!({
        "index": index,
        "magic": block.magic_hex(),
        "size": block.declared_size,
        "hash": block.header.hash_hex(),
        "version": block.header.version,
        "prev_block": block.header.prev_block_hex(),
        "merkle_root": block.header.merkle_root_hex(),
        "timestamp": block.header.timestamp,
        "bits": block.header.bits_hex(),
        "nonce": block.header.nonce,
        "tx_count": block.tx_count,
        "transactions": transactions,
    })
}
