#![warn(clippy::pedantic)]

pub mod compact_size;
pub mod endian;
pub mod error;
pub mod frame;

pub use compact_size::CompactSize;
pub use error::WireError;
pub use frame::BlockFrame;
