//! Encoding and decoding.
//!
//! [`compress`] composes the full pipeline: frequency scan, tree build,
//! code table, then symbol-by-symbol encoding into one bit string. The
//! tree comes back alongside the bits; nothing in the bit stream can
//! regenerate it, so the caller keeps the pair together and hands both to
//! [`decompress`].
//!
//! # Decoding
//!
//! The decoder walks the tree from the root, one bit per step, emitting a
//! symbol and resetting to the root at each leaf. A stream that runs out
//! mid-walk is malformed and surfaces an error rather than silently
//! truncating the output. Bits produced by [`unpack`](crate::bitio::unpack)
//! include pad bits; see the module docs there for the caller-side
//! truncation contract.

use crate::bitio::BitString;
use crate::error::{Error, Result};
use crate::frequency::frequencies;
use crate::table::{code_table, CodeTable};
use crate::tree::{build_tree, Node};

/// Result of a compression call: the encoded bits and the tree that
/// produced them. The pair must stay together; decoding needs both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compressed {
    /// Concatenated symbol codes, in input order.
    pub bits: BitString,
    /// The Huffman tree the codes were read from.
    pub tree: Node,
}

/// Encode `text` against a code table, concatenating codes in input order.
///
/// # Errors
/// Returns [`Error::UnknownSymbol`] if a symbol has no code. That can only
/// happen when the table was built from a different text's frequencies.
pub fn encode(text: &str, table: &CodeTable) -> Result<BitString> {
    let mut bits = BitString::new();
    for symbol in text.chars() {
        let code = table.get(symbol).ok_or(Error::UnknownSymbol { symbol })?;
        bits.extend(code);
    }
    Ok(bits)
}

/// Compress a text: frequency scan, tree build, code table, encode.
///
/// # Errors
/// Returns [`Error::EmptyAlphabet`] for an empty text (no tree can be
/// built). `UnknownSymbol` cannot occur here since the table derives from
/// the same text.
pub fn compress(text: &str) -> Result<Compressed> {
    let freq = frequencies(text);
    let tree = build_tree(&freq)?;
    let table = code_table(&tree);
    let bits = encode(text, &table)?;
    Ok(Compressed { bits, tree })
}

/// Decode a bit string by walking the tree.
///
/// Each bit steps into the left child on 0 and the right child on 1; at a
/// leaf the symbol is emitted and the walk resets to the root. Zero bits
/// against a bare-leaf tree decode to the empty string: the encoded form
/// of a single-symbol text carries no repetition count to restore.
///
/// # Errors
/// Returns [`Error::MalformedBitStream`] if the bits run out mid-walk, or
/// if a bit arrives while positioned on a leaf with no child to descend
/// into (a bare-leaf tree fed a nonempty stream).
pub fn decompress(bits: &BitString, tree: &Node) -> Result<String> {
    let mut output = String::new();
    let mut node = tree;

    for (position, bit) in bits.iter().enumerate() {
        let next = match node {
            Node::Internal { left, right, .. } => {
                if bit {
                    right.as_ref()
                } else {
                    left.as_ref()
                }
            }
            Node::Leaf { .. } => return Err(Error::MalformedBitStream { position }),
        };

        match next {
            Node::Leaf { symbol, .. } => {
                output.push(*symbol);
                node = tree;
            }
            Node::Internal { .. } => node = next,
        }
    }

    // A finished stream must leave the walk at the root, not mid-path.
    if !std::ptr::eq(node, tree) {
        return Err(Error::MalformedBitStream {
            position: bits.len(),
        });
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(s: &str) -> BitString {
        s.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn test_encode_concatenates_in_input_order() {
        let compressed = compress("aabb").unwrap();
        assert_eq!(compressed.bits.to_string(), "0011");
    }

    #[test]
    fn test_encode_three_symbols() {
        // codes: c=0, a=10, b=11
        let compressed = compress("abc").unwrap();
        assert_eq!(compressed.bits.to_string(), "10110");
    }

    #[test]
    fn test_encode_unknown_symbol() {
        let tree = build_tree(&frequencies("ab")).unwrap();
        let table = code_table(&tree);
        assert_eq!(
            encode("abx", &table),
            Err(Error::UnknownSymbol { symbol: 'x' })
        );
    }

    #[test]
    fn test_compress_empty_text() {
        assert_eq!(compress(""), Err(Error::EmptyAlphabet));
    }

    #[test]
    fn test_single_symbol_compresses_to_zero_bits() {
        let compressed = compress("aaaa").unwrap();
        assert!(compressed.bits.is_empty());
        assert_eq!(
            compressed.tree,
            Node::Leaf {
                symbol: 'a',
                frequency: 4
            }
        );
    }

    #[test]
    fn test_decompress_inverts_encode() {
        let text = "abracadabra";
        let compressed = compress(text).unwrap();
        let decoded = decompress(&compressed.bits, &compressed.tree).unwrap();
        assert_eq!(decoded, text);
    }

    #[test]
    fn test_decompress_zero_bits_leaf_root() {
        let tree = Node::Leaf {
            symbol: 'a',
            frequency: 4,
        };
        assert_eq!(decompress(&BitString::new(), &tree).unwrap(), "");
    }

    #[test]
    fn test_decompress_bits_against_leaf_root() {
        // A bare leaf has nowhere to descend; the first bit is the error.
        let tree = Node::Leaf {
            symbol: 'a',
            frequency: 4,
        };
        assert_eq!(
            decompress(&bits("0"), &tree),
            Err(Error::MalformedBitStream { position: 0 })
        );
    }

    #[test]
    fn test_decompress_exhausted_mid_walk() {
        // codes from "aabc": a=0, b=10, c=11; a lone "1" stops mid-walk.
        let compressed = compress("aabc").unwrap();
        assert_eq!(
            decompress(&bits("1"), &compressed.tree),
            Err(Error::MalformedBitStream { position: 1 })
        );
    }

    #[test]
    fn test_decompress_rejects_partial_tail() {
        // Valid symbols followed by a dangling half-code.
        let compressed = compress("aabc").unwrap();
        // "0" = a, then "1" strands the walk.
        assert_eq!(
            decompress(&bits("01"), &compressed.tree),
            Err(Error::MalformedBitStream { position: 2 })
        );
    }

    #[test]
    fn test_compress_equals_manual_pipeline() {
        let text = "mississippi";
        let freq = frequencies(text);
        let tree = build_tree(&freq).unwrap();
        let table = code_table(&tree);
        let bits = encode(text, &table).unwrap();

        let compressed = compress(text).unwrap();
        assert_eq!(compressed.bits, bits);
        assert_eq!(compressed.tree, tree);
    }
}
