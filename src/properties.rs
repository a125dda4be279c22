use serde::{Deserialize, Serialize};

/// Summary of a single compression run, stored as a JSON sidecar next to
/// the compressed file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Properties {
    pub input_bytes: usize,
    pub distinct_symbols: usize,
    pub header_bits: usize,
    pub body_bits: usize,
    pub written_bits: usize,
}

impl Properties {
    pub fn output_bytes(&self) -> usize {
        (self.written_bits + 7) / 8
    }

    pub fn ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            return 0.0;
        }
        self.output_bytes() as f64 / self.input_bytes as f64
    }
}
