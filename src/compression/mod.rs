//! The compression module runs the whole encoding pipeline for one input.
//!
//! Encoding happens in the following steps, each one finishing before the next starts:
//! - Frequency count: how often each byte occurs, plus the optional end-of-stream symbol.
//! - Tree build: merge the two lightest nodes of a min-heap until one tree remains.
//! - Code extraction: each leaf's path from the root becomes its code.
//! - Packing: the input's codes, in order, packed into bytes MSB first and zero padded.
//!
//! Every run owns its arena, heap and tables, so runs never interfere with each other.
//!

pub mod encode;
