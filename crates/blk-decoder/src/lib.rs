#![warn(clippy::pedantic)]

pub mod decoder;
pub mod error;
pub mod stream;

pub use decoder::{decode_block, decode_header};
pub use error::DecodeError;
pub use stream::{ChunkDecode, decode_chunk};
