use tracing::debug;

use crate::bitstreams::{BinaryReader, BinaryWriterBuilder};
use crate::error::CodecError;

use super::{
    HuffNode, K_END_OF_STREAM, K_MAGIC, K_MAGIC_BITS, K_MAX_TREE_DEPTH, K_NUM_SYMBOLS,
    K_SYMBOL_BITS,
};

pub struct HuffmanDecoder {
    root: HuffNode,
}

impl HuffmanDecoder {
    /// Checks the magic number and rebuilds the code tree from the
    /// preorder header. The header is self-delimiting: exactly the bits
    /// the encoder wrote are consumed.
    pub fn decode_header(reader: &mut BinaryReader) -> Result<Self, CodecError> {
        let magic = reader
            .read_int(K_MAGIC_BITS)
            .ok_or(CodecError::UnexpectedEof("missing magic number"))?;
        if magic != K_MAGIC {
            return Err(CodecError::InvalidMagic(magic));
        }

        let root = Self::read_tree(reader, 0)?;
        Ok(HuffmanDecoder { root })
    }

    fn read_tree(reader: &mut BinaryReader, depth: usize) -> Result<HuffNode, CodecError> {
        // An adversarial header must not recurse past the deepest tree a
        // 257-symbol alphabet can produce.
        if depth > K_MAX_TREE_DEPTH {
            return Err(CodecError::MalformedHeader(
                "tree deeper than the symbol alphabet allows",
            ));
        }

        let tag = reader
            .read_int(1)
            .ok_or(CodecError::UnexpectedEof("truncated tree header"))?;

        if tag == 0 {
            let left = Self::read_tree(reader, depth + 1)?;
            let right = Self::read_tree(reader, depth + 1)?;
            return Ok(HuffNode::Internal {
                weight: 0,
                left: Box::new(left),
                right: Box::new(right),
            });
        }

        let symbol = reader
            .read_int(K_SYMBOL_BITS)
            .ok_or(CodecError::UnexpectedEof("truncated tree header"))?;
        if symbol >= K_NUM_SYMBOLS as u64 {
            return Err(CodecError::MalformedHeader("symbol value out of range"));
        }

        Ok(HuffNode::new_leaf(symbol as u16, 0))
    }

    /// Walks the tree one bit at a time from the root; returns the decoded
    /// byte, or `None` once the end-of-stream leaf is reached.
    #[inline(always)]
    pub fn read_next(&self, reader: &mut BinaryReader) -> Result<Option<u8>, CodecError> {
        let mut current = &self.root;

        loop {
            let (left, right) = match current {
                HuffNode::Internal { left, right, .. } => (left.as_ref(), right.as_ref()),
                HuffNode::Leaf { .. } => {
                    return Err(CodecError::MalformedHeader(
                        "single-leaf tree carries no codes",
                    ))
                }
            };

            let bit = reader.read_int(1).ok_or(CodecError::UnexpectedEof(
                "input ended before the end-of-stream marker",
            ))?;
            current = if bit == 0 { left } else { right };

            if let HuffNode::Leaf { symbol, .. } = current {
                if *symbol == K_END_OF_STREAM {
                    return Ok(None);
                }
                return Ok(Some(*symbol as u8));
            }
        }
    }
}

/// Decompresses `reader` into `writer`, reversing `compress` exactly.
/// Decoding stops at the end-of-stream marker; the padding bits that
/// follow it are never read.
pub fn decompress(reader: &mut BinaryReader, writer: &mut BinaryWriterBuilder) -> Result<(), CodecError> {
    let decoder = HuffmanDecoder::decode_header(reader)?;
    debug!(header_bits = reader.get_position() - K_MAGIC_BITS, "tree header read");

    let mut output_bytes = 0usize;
    while let Some(byte) = decoder.read_next(reader)? {
        writer.push_bits(byte as u64, 8);
        output_bytes += 1;
    }
    debug!(output_bytes, "body decoded");

    Ok(())
}
