use log::{error, trace};

use crate::error::{HuffError, Result};
use crate::huffman_coding::codes::{Code, CodeTable};
use crate::huffman_coding::{Symbol, EOS};

/// Packed output: whole bytes plus the number of bits that carry data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Packed {
    pub bytes: Vec<u8>,
    /// Bits written before padding.
    pub bit_count: usize,
}

impl Packed {
    /// Zero bits added to the last byte.
    pub fn padding(&self) -> usize {
        (self.bytes.len() * 8).saturating_sub(self.bit_count)
    }
}

/// Creates a bitstream for output, most significant bit first.
pub struct BitPacker {
    pub output: Vec<u8>,
    queue: u64,
    q_bits: u8,
    bit_count: usize,
}

impl BitPacker {
    /// Create a new BitPacker with an output buffer of size specified. Call flush() to
    /// flush the bit queue to the buffer before taking the output.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            queue: 0,
            q_bits: 0,
            bit_count: 0,
        }
    }

    /// Internal bitstream write function common to all out functions.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /// Puts a single bit on the stream.
    pub fn out_bit(&mut self, bit: bool) {
        self.queue = (self.queue << 1) | bit as u64;
        self.q_bits += 1;
        self.bit_count += 1;
        // Keep the queue below 64 bits.
        if self.q_bits > 56 {
            self.write_stream();
        }
    }

    /// Puts a code word on the stream, first bit first.
    pub fn out_code(&mut self, code: &Code) {
        code.bits().iter().for_each(|&bit| self.out_bit(bit));
    }

    /// Flushes the remaining bits from the queue, padding with 0s in the least
    /// signficant bits of the last byte.
    pub fn flush(&mut self) {
        self.write_stream();
        if self.q_bits > 0 {
            self.queue <<= 8 - self.q_bits; //pad the queue with zeros
            self.q_bits += 8 - self.q_bits;
            self.write_stream(); // write out all that is left
            if self.q_bits > 0 {
                error!("Stuff left in the BitPacker queue.");
            }
        }
    }

    /// Bits put on the stream so far, not counting padding.
    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    /// Flush and hand over the packed bytes.
    pub fn finish(mut self) -> Packed {
        self.flush();
        Packed {
            bytes: self.output,
            bit_count: self.bit_count,
        }
    }

    /// Debugging function to return the number of bytes.bits output so far
    pub fn loc(&self) -> String {
        format! {"[{}.{}]",((self.output.len() * 8) + self.q_bits as usize)/8, ((self.output.len() * 8) + self.q_bits as usize)%8}
    }
}

/// Pack the input using the code table. If the table holds a code for the end-of-stream
/// symbol, that code is written after the last input symbol.
pub fn pack(input: &[u8], codes: &CodeTable) -> Result<Packed> {
    let mut bp = BitPacker::new(input.len() / 2 + 1);

    for &byte in input {
        let symbol = byte as Symbol;
        let code = codes.get(symbol).ok_or(HuffError::MissingCode { symbol })?;
        bp.out_code(code);
    }

    if let Some(code) = codes.get(EOS) {
        trace!("End of stream {} written at {}", code, bp.loc());
        bp.out_code(code);
    }

    Ok(bp.finish())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::huffman_coding::codes::extract_codes;
    use crate::huffman_coding::huffman::build_tree;
    use crate::tools::freq_count::freqs;

    #[test]
    fn out_code_test() {
        let mut bp = BitPacker::new(100);
        bp.out_code(&Code::from("0010"));
        bp.out_code(&Code::from("0001"));
        bp.out_code(&Code::from("001"));
        assert_eq!(bp.bit_count(), 11);
        assert_eq!("[1.3]", &bp.loc());
        let packed = bp.finish();
        assert_eq!(packed.bytes, vec![0b0010_0001, 0b0010_0000]);
        assert_eq!(packed.bit_count, 11);
        assert_eq!(packed.padding(), 5);
    }

    #[test]
    fn padding_of_inconsistent_packed() {
        let packed = Packed {
            bytes: vec![],
            bit_count: 3,
        };
        assert_eq!(packed.padding(), 0);
    }

    #[test]
    fn long_stream_test() {
        let mut bp = BitPacker::new(100);
        (0..100).for_each(|i| bp.out_bit(i % 3 == 0));
        let packed = bp.finish();
        assert_eq!(packed.bit_count, 100);
        assert_eq!(packed.bytes.len(), 13);
        assert_eq!(packed.bytes[0], 0b1001_0010);
        assert_eq!(packed.bytes[1], 0b0100_1001);
        // bits 96..100 are 1001, then padding
        assert_eq!(packed.bytes[12], 0b1001_0000);
    }

    #[test]
    fn abracadabra_pack() {
        let input = b"abracadabra";
        let codes = extract_codes(&build_tree(&freqs(input)).unwrap());
        let packed = pack(input, &codes).unwrap();
        // 0 111 10 0 1100 0 1101 0 111 10 0
        assert_eq!(packed.bytes, vec![0b0111_1001, 0b1000_1101, 0b0111_1000]);
        assert_eq!(packed.bit_count, 23);
        assert_eq!(packed.padding(), 1);
    }

    #[test]
    fn missing_code() {
        let codes = extract_codes(&build_tree(&freqs(b"ab")).unwrap());
        assert!(matches!(
            pack(b"abc", &codes),
            Err(HuffError::MissingCode { symbol: 99 })
        ));
    }

    #[test]
    fn empty_input_packs_nothing() {
        let codes = extract_codes(&build_tree(&freqs(b"ab")).unwrap());
        let packed = pack(b"", &codes).unwrap();
        assert!(packed.bytes.is_empty());
        assert_eq!(packed.bit_count, 0);
    }

    #[test]
    fn sentinel_is_appended() {
        let input = b"aaaa";
        let mut table = freqs(input);
        table.inject_sentinel();
        let codes = extract_codes(&build_tree(&table).unwrap());
        let packed = pack(input, &codes).unwrap();
        // a = 1, EOS = 0
        assert_eq!(packed.bytes, vec![0b1111_0000]);
        assert_eq!(packed.bit_count, 5);
    }
}
