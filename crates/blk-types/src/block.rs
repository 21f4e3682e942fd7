use std::fmt;

use blk_wire::endian;

use crate::header::BlockHeader;
use crate::transaction::Transaction;

/// One fully decoded block record.
///
/// Constructed once by the decoder and immutable afterwards. `tx_count`
/// is the count declared on the wire and always equals
/// `transactions.len()` for a successfully decoded block — it is kept
/// separately because it is a decoded field in its own right, not a
/// derived one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    /// The 4-byte magic marker the record opened with.
    pub magic: [u8; 4],

    /// Byte count declared by the size field (excludes the marker and the
    /// size field themselves).
    pub declared_size: u32,

    pub header: BlockHeader,
    pub tx_count: u64,
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// The magic marker as uppercase hex, in on-disk byte order.
    #[must_use]
    pub fn magic_hex(&self) -> String {
        endian::hex_upper(&self.magic)
    }
}

impl fmt::Display for Block {
    /// The full text report for one block: envelope, header, then every
    /// transaction with its inputs and outputs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Magic:       {}", self.magic_hex())?;
        writeln!(f, "Size:        {}", self.declared_size)?;
        writeln!(f, "{}", self.header)?;
        writeln!(f, "Tx Count:    {}", self.tx_count)?;
        for (idx, tx) in self.transactions.iter().enumerate() {
            writeln!(f, "Tx {idx}:")?;
            for line in tx.to_string().lines() {
                writeln!(f, "  {line}")?;
            }
        }
        Ok(())
    }
}
