//! Transaction records: a variable-length input list and a variable-length
//! output list, each record self-describing its own script length.
//!
//! Unlike the header there is no fixed-offset table here. Every field's
//! start position is the previous field's end position, so decoding runs
//! a cursor strictly forward: each `decode` consumes from the front of
//! the remaining slice and reports how many bytes it used. Records cannot
//! be accessed out of order.

use std::fmt;

use blk_wire::compact_size::decode_compact_size;
use blk_wire::endian;
use blk_wire::error::WireError;

use crate::error::RecordError;

/// One transaction input.
///
/// `prev_vout` and `sequence` keep their raw on-disk byte order — the
/// format convention is to display them as-is, while `prev_txid` (like
/// every 32-byte hash) is displayed byte-reversed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxInput {
    pub prev_txid: [u8; 32],
    pub prev_vout: [u8; 4],
    pub script_sig: Vec<u8>,
    pub sequence: [u8; 4],
}

/// One transaction output: an 8-byte satoshi amount and a locking script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxOutput {
    pub value: u64,
    pub script_pubkey: Vec<u8>,
}

/// One decoded transaction.
///
/// Input and output order is significant and matches the wire order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub version: i32,
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
    pub lock_time: u32,
}

/// Read `len` fixed bytes at `cursor`, or fail naming the field.
fn take<'a>(
    buf: &'a [u8],
    cursor: usize,
    len: usize,
    field: &'static str,
) -> Result<&'a [u8], RecordError> {
    buf.get(cursor..cursor + len)
        .ok_or(RecordError::Wire(WireError::BufferTooShort {
            field,
            expected: len,
            actual: buf.len().saturating_sub(cursor),
        }))
}

/// Decode a compact-size at `cursor`, or fail naming the field.
fn take_compact_size(
    buf: &[u8],
    cursor: usize,
    field: &'static str,
) -> Result<blk_wire::CompactSize, RecordError> {
    decode_compact_size(&buf[cursor.min(buf.len())..])
        .map_err(|source| RecordError::Count { field, source })
}

/// Bounds-check a declared script length against the bytes remaining at
/// `cursor`, returning it as a usize.
fn script_len(
    buf: &[u8],
    cursor: usize,
    declared: u64,
    field: &'static str,
) -> Result<usize, RecordError> {
    let available = buf.len().saturating_sub(cursor);
    let len = usize::try_from(declared).unwrap_or(usize::MAX);
    if len > available {
        return Err(RecordError::ScriptBounds {
            field,
            declared,
            available,
        });
    }
    Ok(len)
}

impl TxInput {
    /// Decode one input from the front of the slice.
    ///
    /// Layout: 32-byte source txid, 4-byte output index, compact-size
    /// script length, the script itself, 4-byte sequence number.
    ///
    /// # Errors
    ///
    /// Fails when a fixed field runs out of bytes, the script-length
    /// compact-size is malformed, or the declared script length overruns
    /// the buffer.
    pub fn decode(buf: &[u8]) -> Result<(Self, usize), RecordError> {
        let mut prev_txid = [0u8; 32];
        prev_txid.copy_from_slice(take(buf, 0, 32, "input prev_txid")?);
        let mut prev_vout = [0u8; 4];
        prev_vout.copy_from_slice(take(buf, 32, 4, "input prev_vout")?);

        let cs = take_compact_size(buf, 36, "scriptSig length")?;
        let mut cursor = 36 + cs.encoded_len;

        let len = script_len(buf, cursor, cs.value, "scriptSig")?;
        let script_sig = buf[cursor..cursor + len].to_vec();
        cursor += len;

        let mut sequence = [0u8; 4];
        sequence.copy_from_slice(take(buf, cursor, 4, "input sequence")?);
        cursor += 4;

        Ok((
            Self {
                prev_txid,
                prev_vout,
                script_sig,
                sequence,
            },
            cursor,
        ))
    }

    /// The source txid, byte-reversed into display order.
    #[must_use]
    pub fn prev_txid_hex(&self) -> String {
        endian::reversed_hex(&self.prev_txid)
    }

    /// True for a coinbase-style input: all-zero source txid and an
    /// all-0xFF output index.
    #[must_use]
    pub fn is_coinbase(&self) -> bool {
        self.prev_txid == [0u8; 32] && self.prev_vout == [0xFF; 4]
    }
}

impl TxOutput {
    /// Decode one output from the front of the slice.
    ///
    /// Layout: 8-byte little-endian satoshi amount, compact-size script
    /// length, the script itself.
    ///
    /// # Errors
    ///
    /// Fails when the amount field runs out of bytes, the script-length
    /// compact-size is malformed, or the declared script length overruns
    /// the buffer.
    pub fn decode(buf: &[u8]) -> Result<(Self, usize), RecordError> {
        let amount = take(buf, 0, 8, "output amount")?;
        let value = u64::from_le_bytes([
            amount[0], amount[1], amount[2], amount[3], amount[4], amount[5], amount[6], amount[7],
        ]);

        let cs = take_compact_size(buf, 8, "scriptPubKey length")?;
        let mut cursor = 8 + cs.encoded_len;

        let len = script_len(buf, cursor, cs.value, "scriptPubKey")?;
        let script_pubkey = buf[cursor..cursor + len].to_vec();
        cursor += len;

        Ok((
            Self {
                value,
                script_pubkey,
            },
            cursor,
        ))
    }
}

impl Transaction {
    /// Decode one transaction from the front of the slice.
    ///
    /// Walks the wire layout strictly in order:
    ///
    /// ```text
    ///   version        4 bytes
    ///   input count    compact-size
    ///   inputs         input count × variable
    ///   output count   compact-size
    ///   outputs        output count × variable
    ///   lock time      4 bytes
    /// ```
    ///
    /// Each input's and output's start offset depends on the previous
    /// record's variable script length, so the records are decoded in
    /// sequence and the cursor is advanced past each one.
    ///
    /// # Errors
    ///
    /// All [`RecordError`] variants. A decoded input count of zero means
    /// the 0x00 segwit marker sits where the count belongs — that is the
    /// extended encoding, rejected as [`RecordError::SegwitNotSupported`].
    pub fn decode(buf: &[u8]) -> Result<(Self, usize), RecordError> {
        let version_bytes = take(buf, 0, 4, "transaction version")?;
        let version = i32::from_le_bytes([
            version_bytes[0],
            version_bytes[1],
            version_bytes[2],
            version_bytes[3],
        ]);

        let input_count = take_compact_size(buf, 4, "input count")?;
        if input_count.value == 0 {
            return Err(RecordError::SegwitNotSupported);
        }
        let mut cursor = 4 + input_count.encoded_len;

        // Counts are untrusted input; grow as records actually decode.
        let mut inputs = Vec::new();
        for _ in 0..input_count.value {
            let (input, used) = TxInput::decode(&buf[cursor..])?;
            inputs.push(input);
            cursor += used;
        }

        let output_count = take_compact_size(buf, cursor, "output count")?;
        cursor += output_count.encoded_len;

        let mut outputs = Vec::new();
        for _ in 0..output_count.value {
            let (output, used) = TxOutput::decode(&buf[cursor..])?;
            outputs.push(output);
            cursor += used;
        }

        let lock_bytes = take(buf, cursor, 4, "transaction lock time")?;
        let lock_time =
            u32::from_le_bytes([lock_bytes[0], lock_bytes[1], lock_bytes[2], lock_bytes[3]]);
        cursor += 4;

        Ok((
            Self {
                version,
                inputs,
                outputs,
                lock_time,
            },
            cursor,
        ))
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Version:  {}", self.version)?;
        writeln!(f, "Inputs:   {}", self.inputs.len())?;
        for (idx, input) in self.inputs.iter().enumerate() {
            writeln!(f, "  Input {idx}:")?;
            writeln!(f, "    Prev TxId: {}", input.prev_txid_hex())?;
            writeln!(f, "    Vout:      {}", endian::hex_upper(&input.prev_vout))?;
            writeln!(
                f,
                "    ScriptSig: ({} bytes) {}",
                input.script_sig.len(),
                endian::hex_upper(&input.script_sig)
            )?;
            writeln!(f, "    Sequence:  {}", endian::hex_upper(&input.sequence))?;
        }
        writeln!(f, "Outputs:  {}", self.outputs.len())?;
        for (idx, output) in self.outputs.iter().enumerate() {
            writeln!(f, "  Output {idx}:")?;
            writeln!(f, "    Amount:       {}", output.value)?;
            writeln!(
                f,
                "    ScriptPubKey: ({} bytes) {}",
                output.script_pubkey.len(),
                endian::hex_upper(&output.script_pubkey)
            )?;
        }
        write!(f, "Locktime: {}", self.lock_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blk_wire::compact_size::{MAX_COMPACT_SIZE_BYTES, encode_compact_size};

    fn push_compact_size(buf: &mut Vec<u8>, value: u64) {
        let mut tmp = [0u8; MAX_COMPACT_SIZE_BYTES];
        let n = encode_compact_size(value, &mut tmp);
        buf.extend_from_slice(&tmp[..n]);
    }

    /// Build a coinbase-style input: zero txid, 0xFF vout, given script.
    fn coinbase_input(script: &[u8]) -> Vec<u8> {
        let mut buf = vec![0u8; 32];
        buf.extend_from_slice(&[0xFF; 4]);
        push_compact_size(&mut buf, script.len() as u64);
        buf.extend_from_slice(script);
        buf.extend_from_slice(&[0xFF; 4]);
        buf
    }

    fn output(value: u64, script: &[u8]) -> Vec<u8> {
        let mut buf = value.to_le_bytes().to_vec();
        push_compact_size(&mut buf, script.len() as u64);
        buf.extend_from_slice(script);
        buf
    }

    /// A minimal one-input transaction with the given outputs.
    fn transaction(outputs: &[(u64, &[u8])]) -> Vec<u8> {
        let mut buf = 1i32.to_le_bytes().to_vec();
        push_compact_size(&mut buf, 1);
        buf.extend_from_slice(&coinbase_input(&[0x04, 0xFF]));
        push_compact_size(&mut buf, outputs.len() as u64);
        for &(value, script) in outputs {
            buf.extend_from_slice(&output(value, script));
        }
        buf.extend_from_slice(&0u32.to_le_bytes());
        buf
    }

    #[test]
    fn input_roundtrips_fields() {
        let bytes = coinbase_input(&[0xAB, 0xCD, 0xEF]);
        let (input, consumed) = TxInput::decode(&bytes).unwrap();
        assert_eq!(consumed, bytes.len());
        assert!(input.is_coinbase());
        assert_eq!(input.script_sig, vec![0xAB, 0xCD, 0xEF]);
        assert_eq!(input.sequence, [0xFF; 4]);
    }

    #[test]
    fn input_script_overrun_is_bounds_error() {
        let mut bytes = vec![0u8; 36];
        push_compact_size(&mut bytes, 50);
        bytes.extend_from_slice(&[0u8; 10]); // 50 declared, 10 present
        let result = TxInput::decode(&bytes);
        assert!(matches!(
            result,
            Err(RecordError::ScriptBounds {
                field: "scriptSig",
                declared: 50,
                available: 10,
            })
        ));
    }

    #[test]
    fn input_truncated_txid() {
        let result = TxInput::decode(&[0u8; 20]);
        assert!(matches!(
            result,
            Err(RecordError::Wire(WireError::BufferTooShort {
                field: "input prev_txid",
                ..
            }))
        ));
    }

    #[test]
    fn output_decodes_amount_little_endian() {
        let bytes = output(5_000_000_000, &[0x51]);
        let (out, consumed) = TxOutput::decode(&bytes).unwrap();
        assert_eq!(out.value, 5_000_000_000);
        assert_eq!(out.script_pubkey, vec![0x51]);
        assert_eq!(consumed, bytes.len());
    }

    #[test]
    fn output_script_overrun_is_bounds_error() {
        let mut bytes = 0u64.to_le_bytes().to_vec();
        push_compact_size(&mut bytes, 9);
        bytes.extend_from_slice(&[0u8; 3]);
        assert!(matches!(
            TxOutput::decode(&bytes),
            Err(RecordError::ScriptBounds {
                field: "scriptPubKey",
                declared: 9,
                available: 3,
            })
        ));
    }

    #[test]
    fn transaction_decodes_in_order() {
        let bytes = transaction(&[(50, b"abc"), (25, b"defgh")]);
        let (tx, consumed) = Transaction::decode(&bytes).unwrap();
        assert_eq!(consumed, bytes.len());
        assert_eq!(tx.version, 1);
        assert_eq!(tx.inputs.len(), 1);
        assert_eq!(tx.outputs.len(), 2);
        assert_eq!(tx.lock_time, 0);
    }

    #[test]
    fn second_output_offset_follows_first_script_length() {
        // Two outputs with different script lengths: the second one's
        // fields are only correct if its start offset was derived from the
        // first one's variable length.
        let bytes = transaction(&[(1, &[0xAA; 7]), (2, &[0xBB; 19])]);
        let (tx, _) = Transaction::decode(&bytes).unwrap();
        assert_eq!(tx.outputs[0].value, 1);
        assert_eq!(tx.outputs[0].script_pubkey, vec![0xAA; 7]);
        assert_eq!(tx.outputs[1].value, 2);
        assert_eq!(tx.outputs[1].script_pubkey, vec![0xBB; 19]);
    }

    #[test]
    fn multiple_inputs_decode_sequentially() {
        let mut buf = 1i32.to_le_bytes().to_vec();
        push_compact_size(&mut buf, 2);
        buf.extend_from_slice(&coinbase_input(&[0x01]));
        buf.extend_from_slice(&coinbase_input(&[0x02, 0x03, 0x04]));
        push_compact_size(&mut buf, 1);
        buf.extend_from_slice(&output(10, b"x"));
        buf.extend_from_slice(&0u32.to_le_bytes());

        let (tx, consumed) = Transaction::decode(&buf).unwrap();
        assert_eq!(consumed, buf.len());
        assert_eq!(tx.inputs[0].script_sig, vec![0x01]);
        assert_eq!(tx.inputs[1].script_sig, vec![0x02, 0x03, 0x04]);
    }

    #[test]
    fn segwit_marker_is_rejected() {
        // version, then 0x00 marker + 0x01 flag where the input count
        // would sit in a legacy transaction.
        let mut buf = 2i32.to_le_bytes().to_vec();
        buf.extend_from_slice(&[0x00, 0x01]);
        buf.extend_from_slice(&[0u8; 60]);
        assert!(matches!(
            Transaction::decode(&buf),
            Err(RecordError::SegwitNotSupported)
        ));
    }

    #[test]
    fn truncated_lock_time() {
        let mut bytes = transaction(&[(50, b"abc")]);
        bytes.truncate(bytes.len() - 2);
        assert!(matches!(
            Transaction::decode(&bytes),
            Err(RecordError::Wire(WireError::BufferTooShort {
                field: "transaction lock time",
                ..
            }))
        ));
    }

    #[test]
    fn malformed_input_count() {
        // 0xFD discriminator demands 2 more bytes; only 1 follows.
        let mut buf = 1i32.to_le_bytes().to_vec();
        buf.push(0xFD);
        buf.push(0x05);
        assert!(matches!(
            Transaction::decode(&buf),
            Err(RecordError::Count {
                field: "input count",
                ..
            })
        ));
    }
}
