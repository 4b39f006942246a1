use log::trace;

use crate::huffman_coding::{Symbol, ALPHABET_SIZE, EOS};

/// Occurrence count per symbol. Symbols with a zero count are not part of the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; ALPHABET_SIZE],
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            counts: [0; ALPHABET_SIZE],
        }
    }

    /// Build a table from (byte, count) pairs. Later pairs for the same byte overwrite earlier ones.
    pub fn from_counts(pairs: &[(u8, u64)]) -> Self {
        let mut table = Self::new();
        pairs
            .iter()
            .for_each(|&(byte, count)| table.counts[byte as usize] = count);
        table
    }

    /// Count of a symbol, 0 if absent.
    pub fn get(&self, symbol: Symbol) -> u64 {
        self.counts.get(symbol as usize).copied().unwrap_or(0)
    }

    /// Add the end-of-stream symbol with a frequency of 1.
    pub fn inject_sentinel(&mut self) {
        self.counts[EOS as usize] = 1;
    }

    pub fn has_sentinel(&self) -> bool {
        self.counts[EOS as usize] > 0
    }

    /// Present symbols and their counts, in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, f)| **f > 0)
            .map(|(sym, &f)| (sym as Symbol, f))
    }

    /// Number of distinct symbols present.
    pub fn len(&self) -> usize {
        self.counts.iter().filter(|&&f| f > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of all counts, sentinel included. Saturates at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.counts.iter().fold(0, |sum, &f| sum.saturating_add(f))
    }

    fn add_chunk(&mut self, chunk: &[u8]) {
        chunk
            .iter()
            .for_each(|&el| self.counts[el as usize] += 1);
    }

    fn merge(mut self, other: &FrequencyTable) -> Self {
        self.counts
            .iter_mut()
            .zip(other.counts.iter())
            .for_each(|(a, b)| *a += b);
        self
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns a frequency count of the input data.
pub fn freqs(data: &[u8]) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    table.add_chunk(data);
    table
}

/// Returns a frequency count of the input data, counting one window of `chunk_size` bytes at a
/// time. The result is identical to `freqs`.
pub fn freqs_chunked(data: &[u8], chunk_size: usize) -> FrequencyTable {
    data.chunks(chunk_size.max(1))
        .map(|chunk| {
            let mut window = FrequencyTable::new();
            window.add_chunk(chunk);
            window
        })
        .fold(FrequencyTable::new(), |table, window| table.merge(&window))
}

/// Accumulates a frequency table from input fed in pieces, so the whole input never has to
/// be resident at once.
#[derive(Clone, Debug, Default)]
pub struct FrequencyCounter {
    table: FrequencyTable,
    chunks: usize,
}

impl FrequencyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count another piece of the input.
    pub fn update(&mut self, chunk: &[u8]) {
        self.table.add_chunk(chunk);
        self.chunks += 1;
    }

    /// Finish counting, optionally adding the end-of-stream symbol.
    pub fn finish(mut self, sentinel: bool) -> FrequencyTable {
        if sentinel {
            self.table.inject_sentinel();
        }
        trace!(
            "Counted {} symbols in {} chunks",
            self.table.len(),
            self.chunks
        );
        self.table
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn abracadabra_counts() {
        let table = freqs(b"abracadabra");
        assert_eq!(table.len(), 5);
        assert_eq!(table.get(b'a' as Symbol), 5);
        assert_eq!(table.get(b'b' as Symbol), 2);
        assert_eq!(table.get(b'r' as Symbol), 2);
        assert_eq!(table.get(b'c' as Symbol), 1);
        assert_eq!(table.get(b'd' as Symbol), 1);
        assert_eq!(table.get(b'z' as Symbol), 0);
        assert_eq!(table.total(), 11);
    }

    #[test]
    fn chunked_matches_whole() {
        let data: Vec<u8> = (0..5000_u32).map(|i| (i * 7 % 251) as u8).collect();
        let whole = freqs(&data);
        for size in [0, 1, 3, 999, 1000, 4999, 5000, 10_000] {
            assert_eq!(freqs_chunked(&data, size), whole, "chunk size {}", size);
        }
    }

    #[test]
    fn counter_matches_whole() {
        let data = b"the quick brown fox jumps over the lazy dog";
        let mut counter = FrequencyCounter::new();
        data.chunks(4).for_each(|c| counter.update(c));
        assert_eq!(counter.finish(false), freqs(data));
    }

    #[test]
    fn sentinel_is_separate_from_nul() {
        let mut table = freqs(&[0, 0, 1]);
        assert!(!table.has_sentinel());
        table.inject_sentinel();
        assert!(table.has_sentinel());
        assert_eq!(table.get(0), 2);
        assert_eq!(table.get(EOS), 1);
        assert_eq!(table.len(), 3);
        assert_eq!(table.iter().last(), Some((EOS, 1)));
    }

    #[test]
    fn total_saturates() {
        let table = FrequencyTable::from_counts(&[(0, u64::MAX), (1, 1)]);
        assert_eq!(table.total(), u64::MAX);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn empty_input() {
        let table = freqs(&[]);
        assert!(table.is_empty());
        assert_eq!(freqs_chunked(&[], 16), table);
    }
}
