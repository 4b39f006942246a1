//! The bitstream module turns a sequence of code words into bytes.
//!
//! Codes are written in input order, most significant bit first. The last byte is padded with
//! zeros in its low-order bits, and the number of bits that carry data is kept next to the
//! bytes so the padding can be told apart from real codes.
//!
pub mod bitpacker;
