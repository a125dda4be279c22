//! Error types for the Huffman codec.

/// Fatal conditions surfaced while decoding a compressed stream.
///
/// Every variant aborts the current decompression; nothing is retried
/// internally and the sink's contents are undefined after a failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The stream does not start with the expected magic number.
    #[error("invalid magic number {0:#010x}")]
    InvalidMagic(u64),

    /// The bit stream ran out where the format requires more bits.
    #[error("unexpected end of input: {0}")]
    UnexpectedEof(&'static str),

    /// The tree header is structurally invalid.
    #[error("malformed tree header: {0}")]
    MalformedHeader(&'static str),
}
