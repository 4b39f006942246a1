//! The huffman module builds the minimum-redundancy code used by the packer.
//!
//! The frequency table is loaded into a min-heap of leaves, the two lightest nodes are merged
//! until one tree remains, and each leaf's code is read off as its path from the root.
//!
//! Every node of a tree lives in a `NodeArena` owned by that tree, addressed by index. Nothing
//! is shared between two encode calls, so independent inputs can be encoded on separate
//! threads without any locking.
//!

pub mod codes;
pub mod heap;
pub mod huffman;
pub mod node;

/// One unit of the alphabet: a byte value, or the end-of-stream sentinel.
pub type Symbol = u16;

/// End-of-stream sentinel. It sits just past the byte range so it never collides with a byte.
pub const EOS: Symbol = 256;

/// Bytes plus the sentinel.
pub const ALPHABET_SIZE: usize = 257;

/// Tie key carried by every internal node.
pub const INTERNAL_KEY: Symbol = b'$' as Symbol;
