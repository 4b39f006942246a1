use log::{debug, info};

use crate::bitstream::bitpacker::{pack, Packed};
use crate::error::Result;
use crate::huffman_coding::codes::{extract_codes, CodeTable};
use crate::huffman_coding::huffman::build_tree_with;
use crate::tools::cli::HuffOpts;
use crate::tools::freq_count::{freqs_chunked, FrequencyTable};
use crate::tools::timer::Timer;

/// Everything one encode run produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Encoded {
    pub freqs: FrequencyTable,
    pub codes: CodeTable,
    pub packed: Packed,
    /// Height of the code tree. A lone leaf has height 0 but a one bit code.
    pub tree_height: u16,
    pub input_len: usize,
}

impl Encoded {
    pub fn bytes(&self) -> &[u8] {
        &self.packed.bytes
    }

    /// Bits of code written, padding excluded.
    pub fn bit_count(&self) -> usize {
        self.packed.bit_count
    }

    /// Mean bits per coded symbol, the sentinel included.
    pub fn average_code_len(&self) -> f64 {
        match self.freqs.total() {
            0 => 0.0,
            n => self.bit_count() as f64 / n as f64,
        }
    }

    /// Packed size over input size.
    pub fn ratio(&self) -> f64 {
        match self.input_len {
            0 => 0.0,
            n => self.packed.bytes.len() as f64 / n as f64,
        }
    }
}

/// Encode with the default options: no sentinel, symbol tie-break.
pub fn encode(input: &[u8]) -> Result<Encoded> {
    encode_with(input, &HuffOpts::default())
}

/// Count, build the tree, extract the codes and pack the input, in that order.
pub fn encode_with(input: &[u8], opts: &HuffOpts) -> Result<Encoded> {
    let mut timer = Timer::new();

    let mut freqs = freqs_chunked(input, opts.chunk_size);
    if opts.sentinel {
        freqs.inject_sentinel();
    }
    timer.mark("count");

    let tree = build_tree_with(&freqs, opts.tie_break)?;
    timer.mark("tree");

    let codes = extract_codes(&tree);
    timer.mark("codes");

    let packed = pack(input, &codes)?;
    timer.mark("pack");

    debug!("Timing: {}", timer);
    info!(
        "Encoded {} bytes with {} codes into {} bytes ({} bits)",
        input.len(),
        codes.len(),
        packed.bytes.len(),
        packed.bit_count
    );

    Ok(Encoded {
        freqs,
        codes,
        packed,
        tree_height: tree.height(),
        input_len: input.len(),
    })
}
