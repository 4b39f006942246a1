use log::{debug, trace};

use super::heap::{MinHeap, TieBreak};
use super::node::{Node, NodeArena, NodeData, NodeId};
use super::Symbol;
use crate::error::{HuffError, Result};
use crate::tools::freq_count::FrequencyTable;

/// A finished Huffman tree. Owns the arena holding every node of the tree.
#[derive(Clone, Debug)]
pub struct HuffmanTree {
    arena: NodeArena,
    root: NodeId,
}

impl HuffmanTree {
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.arena[id]
    }

    /// Total weight, equal to the sum of all frequencies.
    pub fn weight(&self) -> u64 {
        self.arena[self.root].weight
    }

    /// Longest root to leaf path.
    pub fn height(&self) -> u16 {
        self.arena[self.root].depth
    }

    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    pub fn leaf_count(&self) -> usize {
        (self.arena.len() + 1) / 2
    }

    /// Symbol of the root when the tree is a single leaf.
    pub fn single_symbol(&self) -> Option<Symbol> {
        match self.arena[self.root].node_data {
            NodeData::Leaf(sym) => Some(sym),
            NodeData::Kids(..) => None,
        }
    }
}

/// Build a Huffman tree from a frequency table with the default tie-break.
pub fn build_tree(freqs: &FrequencyTable) -> Result<HuffmanTree> {
    build_tree_with(freqs, TieBreak::default())
}

/// Build a Huffman tree from a frequency table. One leaf per symbol is loaded into the heap in
/// ascending symbol order, then the two lightest nodes are merged (first extracted on the left)
/// until a single root remains.
pub fn build_tree_with(freqs: &FrequencyTable, tie_break: TieBreak) -> Result<HuffmanTree> {
    let leaves = freqs.len();
    if leaves == 0 {
        return Err(HuffError::EmptyInput);
    }

    let mut arena = NodeArena::for_leaves(leaves);
    let ids = freqs
        .iter()
        .map(|(sym, weight)| arena.alloc(Node::leaf(sym, weight)))
        .collect::<Result<Vec<NodeId>>>()?;

    let mut heap = MinHeap::build_from_unordered(&arena, &ids, tie_break);

    // Pare the forest down to one node, two at a time.
    while heap.len() > 1 {
        let left = heap.extract_min()?;
        let right = heap.extract_min()?;
        let parent = arena.merge(left, right)?;
        trace!(
            "merge {} + {} -> {}",
            arena[left].weight,
            arena[right].weight,
            arena[parent].weight
        );
        heap.insert(&arena, parent);
    }

    let root = heap.extract_min()?;
    debug!(
        "Built tree: {} leaves, {} nodes, height {}",
        leaves,
        arena.len(),
        arena[root].depth
    );
    Ok(HuffmanTree { arena, root })
}
