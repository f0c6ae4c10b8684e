//! Error types for the codec.
//!
//! All operations return structured errors rather than panicking.
//! Every error is a deterministic input-validation failure: callers should
//! reject the offending input/tree pairing and report it, not retry.

use thiserror::Error;

/// Top-level error type for all codec operations.
///
/// Each variant corresponds to a specific failure:
/// - Tree building: no symbols to build from
/// - Encoding: a symbol with no entry in the code table
/// - Decoding: a bit stream that does not land on a leaf boundary
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The frequency map has no entries, so there is nothing to merge
    /// into a tree. Callers must guard against empty input upstream.
    #[error("empty alphabet: cannot build a tree from zero symbols")]
    EmptyAlphabet,

    /// An input symbol is missing from the code table. Only possible when
    /// the table was built from a different text's frequencies.
    #[error("symbol {symbol:?} has no entry in the code table")]
    UnknownSymbol { symbol: char },

    /// The bit stream ended partway through a root-to-leaf walk, or a bit
    /// arrived with no child to descend into. `position` is the bit index
    /// at which decoding could not continue.
    #[error("malformed bit stream: walk cannot continue at bit {position}")]
    MalformedBitStream { position: usize },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
