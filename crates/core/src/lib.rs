//! huffviz-core: Huffman entropy codec over Unicode text
//!
//! This library measures symbol frequencies, builds a prefix-free binary
//! code tree, encodes text into a bit stream, packs the stream into bytes,
//! and reverses the process exactly.
//!
//! # Architecture
//!
//! The codec is a strict pipeline with a paired inverse:
//! - `frequency`: symbol counting, first-occurrence iteration order
//! - `tree`: ordered-pool merging into a strict binary tree
//! - `table`: root-to-leaf paths as per-symbol codes
//! - `codec`: encode/compress and the tree-walking decoder
//! - `bitio`: bit sequences, MSB-first byte packing, hex rendering
//! - `metrics`: size accounting and entropy (observation only)
//!
//! # Design Principles
//!
//! - **No panics**: all failures are structured and recoverable
//! - **Deterministic**: tree shape is a pure function of the input text
//! - **No hidden state**: every call takes fresh inputs and returns fresh
//!   outputs; the tree/bits pairing is the caller's to keep
//!
//! # Caveat: pad bits
//!
//! Packed bytes carry no record of the original bit length. Unpacking
//! restores pad bits as data, and decoding them can emit spurious trailing
//! symbols. Callers wanting an exact round trip must track the bit length
//! and truncate after unpacking; see [`bitio`].

pub mod bitio;
pub mod codec;
pub mod error;
pub mod frequency;
pub mod metrics;
pub mod table;
pub mod tree;

// Re-export the operation surface
pub use bitio::{pack, to_hex, unpack, BitString};
pub use codec::{compress, decompress, encode, Compressed};
pub use error::{Error, Result};
pub use frequency::{frequencies, FrequencyMap};
pub use metrics::{entropy, CompressionMetrics};
pub use table::{code_table, CodeTable};
pub use tree::{build_tree, Node};
