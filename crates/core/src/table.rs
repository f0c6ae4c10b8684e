//! Code table generation.
//!
//! Walks a Huffman tree depth-first and assigns each leaf symbol the bit
//! string of its root-to-leaf path: 0 into the left child, 1 into the
//! right. For any tree with two or more leaves the resulting codes are
//! prefix-free, which is what makes the bit stream decodable without
//! separators.

use std::collections::HashMap;

use crate::bitio::BitString;
use crate::tree::Node;

/// Mapping from symbol to its Huffman code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: HashMap<char, BitString>,
}

impl CodeTable {
    /// Look up the code for a symbol.
    pub fn get(&self, symbol: char) -> Option<&BitString> {
        self.codes.get(&symbol)
    }

    /// Number of symbols with codes.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True if the table holds no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate `(symbol, code)` pairs in arbitrary order.
    ///
    /// Callers that need a stable order (e.g. display) should iterate their
    /// frequency map and look codes up per symbol.
    pub fn iter(&self) -> impl Iterator<Item = (char, &BitString)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code))
    }
}

/// Generate the code table for a tree.
///
/// A bare-leaf tree (single-symbol alphabet) has no path to walk, so its
/// one symbol gets the empty code: every occurrence encodes to zero bits
/// and the repetition count is not recoverable from the bit stream.
pub fn code_table(tree: &Node) -> CodeTable {
    let mut codes = HashMap::new();
    let mut path = Vec::new();
    assign(tree, &mut path, &mut codes);
    CodeTable { codes }
}

fn assign(node: &Node, path: &mut Vec<bool>, codes: &mut HashMap<char, BitString>) {
    match node {
        Node::Leaf { symbol, .. } => {
            codes.insert(*symbol, path.iter().copied().collect());
        }
        Node::Internal { left, right, .. } => {
            path.push(false);
            assign(left, path, codes);
            path.pop();

            path.push(true);
            assign(right, path, codes);
            path.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::frequencies;
    use crate::tree::build_tree;

    fn table_for(text: &str) -> CodeTable {
        code_table(&build_tree(&frequencies(text)).unwrap())
    }

    fn code_str(table: &CodeTable, symbol: char) -> String {
        table.get(symbol).unwrap().to_string()
    }

    #[test]
    fn test_two_symbol_codes() {
        let table = table_for("aabb");
        assert_eq!(code_str(&table, 'a'), "0");
        assert_eq!(code_str(&table, 'b'), "1");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_three_way_tie_codes() {
        // abc merges a+b first, then c joins from the left.
        let table = table_for("abc");
        assert_eq!(code_str(&table, 'c'), "0");
        assert_eq!(code_str(&table, 'a'), "10");
        assert_eq!(code_str(&table, 'b'), "11");
    }

    #[test]
    fn test_single_symbol_empty_code() {
        let table = table_for("aaaa");
        assert_eq!(table.len(), 1);
        assert!(table.get('a').unwrap().is_empty());
    }

    #[test]
    fn test_frequent_symbols_get_shorter_codes() {
        let table = table_for("zzzzzzzzab");
        let z = table.get('z').unwrap().len();
        let a = table.get('a').unwrap().len();
        let b = table.get('b').unwrap().len();
        assert!(z < a);
        assert!(z < b);
    }

    #[test]
    fn test_prefix_free() {
        let table = table_for("the quick brown fox jumps over the lazy dog");
        let codes: Vec<String> = table.iter().map(|(_, code)| code.to_string()).collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(
                        !b.starts_with(a.as_str()),
                        "code {a} is a prefix of {b}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_every_leaf_gets_a_code() {
        let map = frequencies("abracadabra");
        let table = code_table(&build_tree(&map).unwrap());
        assert_eq!(table.len(), map.len());
        for (symbol, _) in map.iter() {
            assert!(table.get(symbol).is_some());
        }
    }
}
