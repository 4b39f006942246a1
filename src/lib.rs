//! Huffman encoder for byte streams.
//!
//! Builds a prefix-free, minimum-redundancy code from the byte frequencies of an input and
//! packs the input into a bitstream with that code.
//!
//! Basic usage to encode a file is as follows:
//!
//! `$> huffpack -s test.txt`
//!
//! This prints the code table and the packed stream, and writes the packed bytes to
//! test.txt.huf.
//!
//! As a library:
//!
//! ```
//! let enc = huffpack::encode(b"abracadabra").unwrap();
//! assert_eq!(enc.bit_count(), 23);
//! assert_eq!(enc.bytes().len(), 3);
//! ```
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use compression::encode::{encode, encode_with, Encoded};
pub use error::{HuffError, Result};
