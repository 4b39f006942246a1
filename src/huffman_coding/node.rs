//! Tree nodes and the arena that owns them for one encode call.

use std::ops::Index;

use super::{Symbol, INTERNAL_KEY};
use crate::error::{HuffError, Result};

/// Handle to a node inside a `NodeArena`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeData {
    /// Left and right child, in that order.
    Kids(NodeId, NodeId),
    Leaf(Symbol),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub weight: u64,
    /// Height of the subtree rooted here. Leaves are 0.
    pub depth: u16,
    pub node_data: NodeData,
}

impl Node {
    /// Create a new leaf
    pub fn leaf(symbol: Symbol, weight: u64) -> Node {
        Node {
            weight,
            depth: 0,
            node_data: NodeData::Leaf(symbol),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }

    /// Symbol used to break weight ties. Internal nodes all share the placeholder key.
    pub fn tie_key(&self) -> Symbol {
        match self.node_data {
            NodeData::Leaf(sym) => sym,
            NodeData::Kids(..) => INTERNAL_KEY,
        }
    }
}

/// Bump allocator for the nodes of one tree. Nodes are addressed by `NodeId` and all of them
/// are dropped together with the arena.
#[derive(Clone, Debug)]
pub struct NodeArena {
    nodes: Vec<Node>,
    capacity: usize,
}

impl NodeArena {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Arena sized for a full binary tree over `leaves` leaves: 2n - 1 nodes.
    pub fn for_leaves(leaves: usize) -> Self {
        Self::with_capacity((2 * leaves).saturating_sub(1))
    }

    pub fn alloc(&mut self, node: Node) -> Result<NodeId> {
        if self.nodes.len() >= self.capacity {
            return Err(HuffError::ArenaExhausted {
                capacity: self.capacity,
            });
        }
        self.nodes.push(node);
        Ok(NodeId(self.nodes.len() - 1))
    }

    /// Allocate a parent over `left` and `right`, weighing their sum.
    pub fn merge(&mut self, left: NodeId, right: NodeId) -> Result<NodeId> {
        let (l, r) = (&self[left], &self[right]);
        let weight = l
            .weight
            .checked_add(r.weight)
            .ok_or(HuffError::WeightOverflow)?;
        let depth = l.depth.max(r.depth) + 1;
        self.alloc(Node {
            weight,
            depth,
            node_data: NodeData::Kids(left, right),
        })
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Index<NodeId> for NodeArena {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}
