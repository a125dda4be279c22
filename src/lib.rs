pub mod bitstreams;
pub mod error;
pub mod huffman;
pub mod properties;

pub use error::CodecError;
pub use huffman::decoder::{decompress, HuffmanDecoder};
pub use huffman::encoder::{compress, HuffmanEncoder};
pub use properties::Properties;
