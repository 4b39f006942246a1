//! Console rendering of the code table and of the packed stream.
//!
//! These only read the tables produced by an encode run.

use std::fmt::{self, Display, Formatter};

use crate::bitstream::bitpacker::Packed;
use crate::huffman_coding::codes::CodeTable;
use crate::huffman_coding::{Symbol, ALPHABET_SIZE, EOS};
use crate::tools::freq_count::FrequencyTable;

const RULE: &str = "--------------------------------";

/// How a symbol is shown in a table: the character itself if printable, EOF for the
/// end-of-stream symbol, hex otherwise.
pub fn symbol_label(symbol: Symbol) -> String {
    match symbol {
        EOS => "EOF".to_string(),
        0x20..=0x7e => (symbol as u8 as char).to_string(),
        _ => format!("0x{:02x}", symbol),
    }
}

/// Fixed-width table of symbol, code and frequency. Rows follow the order in which symbols
/// first appear in the input; the end-of-stream symbol, if coded, comes last.
pub struct CodeReport<'a> {
    pub input: &'a [u8],
    pub freqs: &'a FrequencyTable,
    pub codes: &'a CodeTable,
}

impl CodeReport<'_> {
    fn row(&self, f: &mut Formatter<'_>, symbol: Symbol) -> fmt::Result {
        let code = self
            .codes
            .get(symbol)
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            f,
            "{:<10} {:<10} {:<10}",
            symbol_label(symbol),
            code,
            self.freqs.get(symbol)
        )?;
        writeln!(f, "{}", RULE)
    }
}

impl Display for CodeReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<10} {:<10} {:<10}", "char", "code", "frequency")?;
        writeln!(f, "{}", RULE)?;

        let mut printed = [false; ALPHABET_SIZE];
        for &byte in self.input {
            if !printed[byte as usize] {
                printed[byte as usize] = true;
                self.row(f, byte as Symbol)?;
            }
        }
        if self.codes.contains(EOS) {
            self.row(f, EOS)?;
        }
        Ok(())
    }
}

/// The packed bytes as binary groups and hex, followed by the counts.
pub struct StreamReport<'a>(pub &'a Packed);

impl Display for StreamReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let packed = self.0;
        writeln!(f, "Compressed (binary):")?;
        for line in packed.bytes.chunks(8) {
            let groups: Vec<String> = line.iter().map(|b| format!("{:08b}", b)).collect();
            writeln!(f, "{}", groups.join(" "))?;
        }
        writeln!(f, "Compressed (hex):")?;
        for line in packed.bytes.chunks(16) {
            let groups: Vec<String> = line.iter().map(|b| format!("{:02x}", b)).collect();
            writeln!(f, "{}", groups.join(" "))?;
        }
        writeln!(
            f,
            "Bytes generated: {} ({} bits, {} padding)",
            packed.bytes.len(),
            packed.bit_count,
            packed.padding()
        )
    }
}
