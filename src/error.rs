//! Error types for the huffpack encoder.
//!
//! None of these are recoverable in the middle of an encode call. Each one aborts the call
//! and no partial output is returned.

use thiserror::Error;

use crate::huffman_coding::Symbol;

/// Error variants for the encoding pipeline.
#[derive(Debug, Error)]
pub enum HuffError {
    /// No input symbols and no injected sentinel, so there is no tree to build.
    #[error("empty input: nothing to build a code from")]
    EmptyInput,

    /// More nodes were requested than the arena reserved for this alphabet.
    #[error("node arena exhausted (capacity {capacity})")]
    ArenaExhausted { capacity: usize },

    /// A symbol in the input has no code. The frequency table and the input disagree.
    #[error("no code for symbol {symbol}")]
    MissingCode { symbol: Symbol },

    /// Extract from an empty priority queue.
    #[error("priority queue underflow")]
    QueueUnderflow,

    /// The sum of two node weights does not fit in a u64.
    #[error("weight overflow while merging nodes")]
    WeightOverflow,

    /// An I/O error in the file front end.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for huffpack operations.
pub type Result<T> = std::result::Result<T, HuffError>;
