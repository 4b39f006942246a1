//! Binary min-heap over arena nodes, ordered by weight with a deterministic tie-break.
//!
//! The heap stores the weight and tie key of each node next to its handle, so it never has to
//! reach back into the arena while sifting.
//!
//! Under `TieBreak::Symbol`, equal weights are ordered by the node's tie key: the leaf symbol,
//! or `'$'` for every internal node. Two nodes with the same weight and the same key (two
//! internal nodes, for example) are not ordered by the comparison at all, and whichever one
//! the heap layout surfaces first wins. That layout depends only on the order of inserts and
//! extracts, so the outcome is still the same on every run.

use super::node::{NodeArena, NodeId};
use super::Symbol;
use crate::error::{HuffError, Result};

/// How equal weights are ordered in the heap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// On equal weight, the smaller tie key comes first.
    #[default]
    Symbol,
    /// Compare weights only. Ties go to heap order.
    WeightOnly,
}

impl TieBreak {
    /// True if `a` must come out of the heap strictly before `b`.
    pub fn precedes(self, a: (u64, Symbol), b: (u64, Symbol)) -> bool {
        match self {
            TieBreak::Symbol => a.0 < b.0 || (a.0 == b.0 && a.1 < b.1),
            TieBreak::WeightOnly => a.0 < b.0,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Entry {
    weight: u64,
    key: Symbol,
    id: NodeId,
}

impl Entry {
    fn new(arena: &NodeArena, id: NodeId) -> Self {
        let node = &arena[id];
        Self {
            weight: node.weight,
            key: node.tie_key(),
            id,
        }
    }

    fn rank(&self) -> (u64, Symbol) {
        (self.weight, self.key)
    }
}

#[derive(Clone, Debug)]
pub struct MinHeap {
    entries: Vec<Entry>,
    tie_break: TieBreak,
}

impl MinHeap {
    pub fn new(tie_break: TieBreak) -> Self {
        Self {
            entries: Vec::new(),
            tie_break,
        }
    }

    /// Take the nodes in the given order and heapify them in place, sifting down from the last
    /// internal position to the root.
    pub fn build_from_unordered(arena: &NodeArena, ids: &[NodeId], tie_break: TieBreak) -> Self {
        let mut heap = Self {
            entries: ids.iter().map(|&id| Entry::new(arena, id)).collect(),
            tie_break,
        };
        for idx in (0..heap.entries.len() / 2).rev() {
            heap.sift_down(idx);
        }
        heap
    }

    pub fn insert(&mut self, arena: &NodeArena, id: NodeId) {
        self.entries.push(Entry::new(arena, id));
        self.sift_up(self.entries.len() - 1);
    }

    /// Remove and return the smallest node.
    pub fn extract_min(&mut self) -> Result<NodeId> {
        if self.entries.is_empty() {
            return Err(HuffError::QueueUnderflow);
        }
        // The last entry moves into the root slot, then sinks.
        let min = self.entries.swap_remove(0);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Ok(min.id)
    }

    pub fn peek(&self) -> Option<NodeId> {
        self.entries.first().map(|e| e.id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn precedes(&self, a: usize, b: usize) -> bool {
        self.tie_break
            .precedes(self.entries[a].rank(), self.entries[b].rank())
    }

    fn sift_down(&mut self, mut idx: usize) {
        let size = self.entries.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut smallest = idx;
            if left < size && self.precedes(left, smallest) {
                smallest = left;
            }
            if right < size && self.precedes(right, smallest) {
                smallest = right;
            }
            if smallest == idx {
                break;
            }
            self.entries.swap(idx, smallest);
            idx = smallest;
        }
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if !self.precedes(idx, parent) {
                break;
            }
            self.entries.swap(idx, parent);
            idx = parent;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::huffman_coding::node::Node;
    use crate::huffman_coding::INTERNAL_KEY;

    fn leaves(arena: &mut NodeArena, leaves: &[(u8, u64)]) -> Vec<NodeId> {
        leaves
            .iter()
            .map(|&(s, w)| arena.alloc(Node::leaf(s as Symbol, w)).unwrap())
            .collect()
    }

    fn drain(heap: &mut MinHeap, arena: &NodeArena) -> Vec<(u64, Symbol)> {
        let mut out = vec![];
        while let Ok(id) = heap.extract_min() {
            out.push((arena[id].weight, arena[id].tie_key()));
        }
        out
    }

    #[test]
    fn extracts_in_weight_then_symbol_order() {
        let mut arena = NodeArena::with_capacity(8);
        let ids = leaves(
            &mut arena,
            &[(b'a', 5), (b'b', 2), (b'c', 1), (b'd', 1), (b'r', 2)],
        );
        let mut heap = MinHeap::build_from_unordered(&arena, &ids, TieBreak::Symbol);
        assert_eq!(heap.len(), 5);
        assert_eq!(
            drain(&mut heap, &arena),
            vec![
                (1, b'c' as Symbol),
                (1, b'd' as Symbol),
                (2, b'b' as Symbol),
                (2, b'r' as Symbol),
                (5, b'a' as Symbol)
            ]
        );
    }

    #[test]
    fn weight_only_ignores_symbols() {
        let mut arena = NodeArena::with_capacity(8);
        let ids = leaves(
            &mut arena,
            &[(b'a', 5), (b'b', 2), (b'c', 1), (b'd', 1), (b'r', 2)],
        );
        let mut heap = MinHeap::build_from_unordered(&arena, &ids, TieBreak::WeightOnly);
        // Heap order puts 'd' ahead of 'c'.
        let first = heap.extract_min().unwrap();
        assert_eq!(arena[first].tie_key(), b'd' as Symbol);
        let weights: Vec<u64> = drain(&mut heap, &arena).iter().map(|e| e.0).collect();
        assert_eq!(weights, vec![1, 2, 2, 5]);
    }

    #[test]
    fn internal_nodes_use_placeholder() {
        let mut arena = NodeArena::with_capacity(8);
        let ids = leaves(&mut arena, &[(b'!', 1), (b'x', 1), (b'y', 1)]);
        let mut heap = MinHeap::build_from_unordered(&arena, &ids[1..], TieBreak::Symbol);
        let a = heap.extract_min().unwrap();
        let b = heap.extract_min().unwrap();
        let top = arena.merge(a, b).unwrap();
        heap.insert(&arena, top);
        heap.insert(&arena, ids[0]);
        let low = arena.alloc(Node::leaf(b'z' as Symbol, 2)).unwrap();
        heap.insert(&arena, low);
        // '!' (33) < '$' (36) < 'z'
        assert_eq!(
            drain(&mut heap, &arena),
            vec![(1, b'!' as Symbol), (2, INTERNAL_KEY), (2, b'z' as Symbol)]
        );
    }

    #[test]
    fn underflow() {
        let mut heap = MinHeap::new(TieBreak::Symbol);
        assert!(heap.is_empty());
        assert!(heap.peek().is_none());
        assert!(matches!(heap.extract_min(), Err(HuffError::QueueUnderflow)));
    }

    #[test]
    fn precedes_is_strict() {
        assert!(TieBreak::Symbol.precedes((1, 9), (2, 0)));
        assert!(TieBreak::Symbol.precedes((2, 3), (2, 4)));
        assert!(!TieBreak::Symbol.precedes((2, 4), (2, 4)));
        assert!(!TieBreak::WeightOnly.precedes((2, 3), (2, 4)));
        assert!(TieBreak::WeightOnly.precedes((1, 9), (2, 0)));
    }
}
