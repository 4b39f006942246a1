//! The tools module provides the helpers around the huffman core.
//!
//! The tools are:
//! - cli: Command line interface and run options.
//! - freq_count: Frequency count of the input, whole or window by window.
//! - report: Console tables for the codes and the packed stream.
//! - timer: Per-stage timing of an encode run.
//!
pub mod cli;
pub mod freq_count;
pub mod report;
pub mod timer;
