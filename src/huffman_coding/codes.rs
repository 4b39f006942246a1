//! Walks a finished tree and turns every root to leaf path into a code word.
//!
//! Going left appends a 0, going right appends a 1. A tree that is a single leaf has an empty
//! path; that leaf is given the one bit code `0` instead, so every symbol in the input still
//! costs at least one bit on the stream.

use std::fmt::{self, Display, Formatter};

use log::{trace, warn};
use rustc_hash::FxHashMap;

use super::huffman::HuffmanTree;
use super::node::{NodeData, NodeId};
use super::Symbol;
use crate::tools::freq_count::FrequencyTable;

/// A code word, first emitted bit first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// True if `self` is a prefix of `other`. Every code is a prefix of itself.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }

    fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    fn pop(&mut self) {
        self.bits.pop();
    }
}

impl From<&str> for Code {
    /// Reads a string of '0' and '1'. Any other character counts as a 1.
    fn from(s: &str) -> Self {
        Code {
            bits: s.chars().map(|c| c != '0').collect(),
        }
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.bits
            .iter()
            .try_for_each(|&b| write!(f, "{}", if b { '1' } else { '0' }))
    }
}

/// Maps each leaf symbol to its code.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: FxHashMap<Symbol, Code>,
}

impl CodeTable {
    pub fn get(&self, symbol: Symbol) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.codes.contains_key(&symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// All entries, sorted by symbol.
    pub fn sorted(&self) -> Vec<(Symbol, &Code)> {
        let mut entries: Vec<(Symbol, &Code)> = self.codes.iter().map(|(&s, c)| (s, c)).collect();
        entries.sort_unstable_by_key(|&(s, _)| s);
        entries
    }

    pub fn max_len(&self) -> usize {
        self.codes.values().map(Code::len).max().unwrap_or(0)
    }

    /// Bits needed to code every symbol of `freqs`: the sum of frequency times code length.
    /// Symbols without a code are skipped.
    pub fn weighted_len(&self, freqs: &FrequencyTable) -> u64 {
        freqs
            .iter()
            .filter_map(|(sym, f)| self.get(sym).map(|c| f * c.len() as u64))
            .sum()
    }
}

/// Extract the code of every leaf of the tree.
pub fn extract_codes(tree: &HuffmanTree) -> CodeTable {
    let mut table = CodeTable {
        codes: FxHashMap::with_capacity_and_hasher(tree.leaf_count(), Default::default()),
    };

    if let Some(sym) = tree.single_symbol() {
        warn!("Only one symbol ({}) in the input, using code 0", sym);
        table.codes.insert(sym, Code::from("0"));
        return table;
    }

    let mut path = Code::default();
    return_leaves(tree, tree.root(), &mut path, &mut table);
    trace!("Extracted {} codes, longest {}", table.len(), table.max_len());
    table
}

/// Recursively walk the tree, carrying the path taken so far, and record each leaf's path.
fn return_leaves(tree: &HuffmanTree, id: NodeId, path: &mut Code, table: &mut CodeTable) {
    match tree.node(id).node_data {
        NodeData::Kids(left, right) => {
            path.push(false);
            return_leaves(tree, left, path, table);
            path.pop();
            path.push(true);
            return_leaves(tree, right, path, table);
            path.pop();
        }
        NodeData::Leaf(sym) => {
            table.codes.insert(sym, path.clone());
        }
    };
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::huffman_coding::heap::TieBreak;
    use crate::huffman_coding::huffman::{build_tree, build_tree_with};
    use crate::huffman_coding::EOS;
    use crate::tools::freq_count::freqs;

    fn code_of(table: &CodeTable, byte: u8) -> String {
        table.get(byte as Symbol).unwrap().to_string()
    }

    #[test]
    fn abracadabra_codes() {
        let table = freqs(b"abracadabra");
        let codes = extract_codes(&build_tree(&table).unwrap());
        assert_eq!(codes.len(), 5);
        assert_eq!(code_of(&codes, b'a'), "0");
        assert_eq!(code_of(&codes, b'r'), "10");
        assert_eq!(code_of(&codes, b'b'), "111");
        assert_eq!(code_of(&codes, b'c'), "1100");
        assert_eq!(code_of(&codes, b'd'), "1101");
        assert_eq!(codes.weighted_len(&table), 23);
        assert_eq!(codes.max_len(), 4);
    }

    #[test]
    fn abracadabra_weight_only_codes() {
        let table = freqs(b"abracadabra");
        let codes = extract_codes(&build_tree_with(&table, TieBreak::WeightOnly).unwrap());
        assert_eq!(code_of(&codes, b'a'), "0");
        assert_eq!(code_of(&codes, b'r'), "10");
        assert_eq!(code_of(&codes, b'b'), "110");
        assert_eq!(code_of(&codes, b'd'), "1110");
        assert_eq!(code_of(&codes, b'c'), "1111");
        assert_eq!(codes.weighted_len(&table), 23);
    }

    #[test]
    fn codes_are_prefix_free() {
        let table = freqs(b"she sells sea shells by the sea shore");
        let codes = extract_codes(&build_tree(&table).unwrap());
        let entries = codes.sorted();
        assert_eq!(entries.len(), table.len());
        for (i, (_, a)) in entries.iter().enumerate() {
            for (j, (_, b)) in entries.iter().enumerate() {
                if i != j {
                    assert!(!a.is_prefix_of(b), "{} is a prefix of {}", a, b);
                }
            }
        }
    }

    #[test]
    fn single_leaf_gets_zero() {
        let codes = extract_codes(&build_tree(&freqs(b"qqq")).unwrap());
        assert_eq!(codes.len(), 1);
        assert_eq!(code_of(&codes, b'q'), "0");
    }

    #[test]
    fn sentinel_gets_a_code() {
        let mut table = freqs(b"aaaa");
        table.inject_sentinel();
        let codes = extract_codes(&build_tree(&table).unwrap());
        assert_eq!(codes.get(EOS).unwrap().to_string(), "0");
        assert_eq!(code_of(&codes, b'a'), "1");
    }

    #[test]
    fn code_display_and_prefix() {
        let a = Code::from("10");
        let b = Code::from("1011");
        assert_eq!(b.to_string(), "1011");
        assert!(a.is_prefix_of(&b));
        assert!(!b.is_prefix_of(&a));
        assert!(Code::default().is_empty());
    }
}
