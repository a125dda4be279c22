use tracing::debug;

use crate::bitstreams::{BinaryReader, BinaryWriterBuilder};
use crate::properties::Properties;

use super::{
    build_code_table, build_tree, HuffNode, SymbolCode, K_END_OF_STREAM, K_MAGIC, K_MAGIC_BITS,
    K_NUM_SYMBOLS, K_SYMBOL_BITS,
};

pub struct HuffmanEncoder {
    codes: [SymbolCode; K_NUM_SYMBOLS],
}

impl HuffmanEncoder {
    /// Builds the code model from a frequency table and writes the magic
    /// number followed by the preorder tree header.
    pub fn init(counts: &[u64; K_NUM_SYMBOLS], writer: &mut BinaryWriterBuilder) -> Self {
        let root = build_tree(counts);
        let codes = build_code_table(&root);

        writer.push_bits(K_MAGIC, K_MAGIC_BITS);
        Self::write_tree(&root, writer);

        HuffmanEncoder { codes }
    }

    /// Preorder tree encoding: a `0` bit per internal node followed by
    /// both subtrees, a `1` bit plus a 9-bit symbol field per leaf.
    fn write_tree(node: &HuffNode, writer: &mut BinaryWriterBuilder) {
        match node {
            HuffNode::Leaf { symbol, .. } => {
                writer.push_bits(1, 1);
                writer.push_bits(*symbol as u64, K_SYMBOL_BITS);
            }
            HuffNode::Internal { left, right, .. } => {
                writer.push_bits(0, 1);
                Self::write_tree(left, writer);
                Self::write_tree(right, writer);
            }
        }
    }

    #[inline(always)]
    pub fn write_next(&self, symbol: u16, writer: &mut BinaryWriterBuilder) -> usize {
        let code = self.codes[symbol as usize];
        assert!(code.nbits > 0, "Unknown symbol {}", symbol);
        writer.push_bits(code.bits, code.nbits as usize)
    }
}

/// One full pass over the input, counting every byte value. The
/// end-of-stream marker never occurs literally and is counted exactly once.
pub fn count_symbols(reader: &mut BinaryReader) -> [u64; K_NUM_SYMBOLS] {
    let mut counts = [0u64; K_NUM_SYMBOLS];
    while let Some(byte) = reader.read_int(8) {
        counts[byte as usize] += 1;
    }
    counts[K_END_OF_STREAM as usize] = 1;
    counts
}

/// Compresses `reader` into `writer`: magic number, tree header, then the
/// code of every input byte terminated by the end-of-stream code. The
/// reader is rewound between the counting and encoding passes.
pub fn compress(reader: &mut BinaryReader, writer: &mut BinaryWriterBuilder) -> Properties {
    let counts = count_symbols(reader);
    let distinct_symbols = counts[..K_END_OF_STREAM as usize]
        .iter()
        .filter(|&&count| count > 0)
        .count();

    let encoder = HuffmanEncoder::init(&counts, writer);
    let header_bits = writer.written_bits - K_MAGIC_BITS;
    debug!(distinct_symbols, header_bits, "code model built");

    reader.reset();

    let body_start = writer.written_bits;
    let mut input_bytes = 0usize;
    while let Some(byte) = reader.read_int(8) {
        encoder.write_next(byte as u16, writer);
        input_bytes += 1;
    }
    encoder.write_next(K_END_OF_STREAM, writer);

    let body_bits = writer.written_bits - body_start;
    debug!(input_bytes, body_bits, "body encoded");

    Properties {
        input_bytes,
        distinct_symbols,
        header_bits,
        body_bits,
        written_bits: writer.written_bits,
    }
}
