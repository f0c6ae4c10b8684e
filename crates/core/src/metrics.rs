//! Compression measurement.
//!
//! Pure observation over the codec's outputs: sizes before and after,
//! derived ratios, and the Shannon entropy of the symbol distribution.
//! Nothing here feeds back into encoding or decoding.

use crate::bitio::BitString;
use crate::frequency::FrequencyMap;

/// Size accounting for one compression call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionMetrics {
    /// Symbols in the input text
    pub input_symbols: usize,

    /// UTF-8 bytes in the input text
    pub input_bytes: usize,

    /// Bits in the encoded stream, before padding
    pub compressed_bits: usize,

    /// Bytes after packing (includes the padded final byte)
    pub packed_bytes: usize,

    /// Distinct symbols in the input
    pub distinct_symbols: usize,
}

impl CompressionMetrics {
    /// Measure a text against its encoded bit stream.
    pub fn measure(text: &str, bits: &BitString) -> Self {
        Self {
            input_symbols: text.chars().count(),
            input_bytes: text.len(),
            compressed_bits: bits.len(),
            packed_bytes: bits.len().div_ceil(8),
            distinct_symbols: crate::frequency::frequencies(text).len(),
        }
    }

    /// Packed size over input size. Returns 0.0 for empty input.
    pub fn ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            self.packed_bytes as f64 / self.input_bytes as f64
        }
    }

    /// Bytes saved by packing, saturating at zero when packing loses.
    pub fn saved_bytes(&self) -> usize {
        self.input_bytes.saturating_sub(self.packed_bytes)
    }

    /// Average code length in bits per symbol. Returns 0.0 for empty input.
    pub fn bits_per_symbol(&self) -> f64 {
        if self.input_symbols == 0 {
            0.0
        } else {
            self.compressed_bits as f64 / self.input_symbols as f64
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("=== Compression ===");
        println!(
            "Input:  {} symbols ({} bytes, {} distinct)",
            self.input_symbols, self.input_bytes, self.distinct_symbols
        );
        println!(
            "Output: {} bits -> {} packed bytes",
            self.compressed_bits, self.packed_bytes
        );
        println!("Ratio: {:.1}%", self.ratio() * 100.0);
        println!("Average code length: {:.2} bits/symbol", self.bits_per_symbol());
    }
}

/// Shannon entropy of a frequency distribution, in bits per symbol.
///
/// The theoretical lower bound on average code length for this
/// distribution. Returns 0.0 for an empty map; a single-symbol map has
/// zero entropy, which is exactly why its code is empty.
pub fn entropy(freq: &FrequencyMap) -> f64 {
    let total = freq.total();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    freq.iter()
        .map(|(_, count)| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}
