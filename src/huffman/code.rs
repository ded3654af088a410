use std::io::{Read, Write};

use log::trace;
use rustc_hash::FxHashMap;

use crate::bitstream::bitreader::BitReader;
use crate::bitstream::bitwriter::BitWriter;
use crate::error::Result;

use super::tree;

/// A canonical Huffman code: bidirectional symbol <-> (code, length)
/// mappings plus the per-length bookkeeping needed to serialize the table.
///
/// Built once from an immutable frequency snapshot or a transmitted
/// length-grouped symbol list, then read-only: safe to share across
/// threads as long as each caller brings its own stream.
///
/// Code lengths beyond 32 cannot pass through the bit stream's single-call
/// ceiling; pass a `limit` when the code is headed for the wire.
#[derive(Debug, Clone, Default)]
pub struct HuffmanCode {
    /// symbol -> (code value, code length in bits)
    encode: FxHashMap<i32, (u32, usize)>,
    /// decode[length - 1]: code value -> symbol
    decode: Vec<FxHashMap<u32, i32>>,
    /// symbols[length - 1]: that length's symbols in ascending order
    symbols: Vec<Vec<i32>>,
}

impl HuffmanCode {
    /// Build an optimal canonical code from `(symbol, frequency)` pairs.
    /// `limit` caps the code length (0 = unlimited); an infeasible limit
    /// fails with `LimitTooSmall` and produces no table. Duplicate symbols
    /// are a caller error; frequencies must be positive.
    pub fn from_frequencies(pairs: &[(i32, u32)], limit: usize) -> Result<Self> {
        let (leaves, mut population) = tree::code_lengths(pairs, limit)?;
        trace!("code length populations: {:?}", population);

        // Regroup the sorted leaves under the (possibly rebalanced)
        // histogram: each leaf takes a slot in the shallowest length bucket
        // that still has room.
        let mut grouped: Vec<Vec<i32>> = Vec::with_capacity(population.len());
        let mut length = 1;
        for &(_, symbol) in &leaves {
            while population[length - 1] == 0 {
                length += 1;
            }
            while grouped.len() < length {
                grouped.push(Vec::new());
            }
            grouped[length - 1].push(symbol);
            population[length - 1] -= 1;
        }
        Ok(Self::from_lengths(&grouped))
    }

    /// Build a code from a length-grouped symbol list: `symbol_list[x]`
    /// holds, in ascending order, every symbol with code length `x + 1`.
    /// This is the sole place code values are materialized (the canonical
    /// rule assigns consecutive values within a length and doubles the
    /// running code at each length step), and it is what a receiver calls
    /// to rebuild a table from transmitted lengths.
    pub fn from_lengths(symbol_list: &[Vec<i32>]) -> Self {
        let mut encode = FxHashMap::default();
        let mut decode: Vec<FxHashMap<u32, i32>> = Vec::new();
        let mut symbols: Vec<Vec<i32>> = Vec::new();
        let mut code = 0u64;
        for (i, level) in symbol_list.iter().enumerate() {
            let length = i + 1;
            if !level.is_empty() {
                while decode.len() < length {
                    decode.push(FxHashMap::default());
                    symbols.push(Vec::new());
                }
                for &symbol in level {
                    encode.insert(symbol, (code as u32, length));
                    decode[i].insert(code as u32, symbol);
                    symbols[i].push(symbol);
                    code += 1;
                }
            }
            code <<= 1;
        }
        Self {
            encode,
            decode,
            symbols,
        }
    }

    /// The `(code, length)` pair for `symbol`, or `None` if the symbol was
    /// absent from the table this code was built from. A miss is an ordinary
    /// outcome, not a fault.
    pub fn lookup(&self, symbol: i32) -> Option<(u32, usize)> {
        self.encode.get(&symbol).copied()
    }

    /// Encode one symbol to the writer. `Ok(true)` after writing exactly
    /// `length` bits; `Ok(false)` with nothing written when the symbol has
    /// no code. Stream errors propagate.
    pub fn encode_to<W: Write>(&self, symbol: i32, writer: &mut BitWriter<W>) -> Result<bool> {
        match self.lookup(symbol) {
            Some((code, length)) => {
                writer.write(code, length)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// The symbol assigned `code` at exactly `length` bits. Length 0, or a
    /// length beyond the deepest assigned code, is a guaranteed miss.
    pub fn decode_exact(&self, code: u32, length: usize) -> Option<i32> {
        if length == 0 || length > self.decode.len() {
            return None;
        }
        self.decode[length - 1].get(&code).copied()
    }

    /// Decode the next symbol from the reader, one bit at a time. Because
    /// the code is prefix-free at most one length can match, so the first
    /// match is the only match. `Ok(None)` after the deepest length means a
    /// corrupted stream or a table mismatched to the encoder, surfaced to
    /// the caller rather than guessed. Reader exhaustion propagates as an error.
    pub fn decode_from<R: Read>(&self, reader: &mut BitReader<R>) -> Result<Option<i32>> {
        let mut code = 0u32;
        for length in 1..=self.decode.len() {
            code = (code << 1) | reader.read(1)?;
            if let Some(symbol) = self.decode_exact(code, length) {
                return Ok(Some(symbol));
            }
        }
        Ok(None)
    }

    /// Number of symbols at each code length (index = length - 1). Together
    /// with [`HuffmanCode::ordered_symbols`] this is the wire-compact table
    /// representation: transmit the counts and the symbols, rebuild with
    /// [`HuffmanCode::from_lengths`].
    pub fn length_counts(&self) -> Vec<usize> {
        self.symbols.iter().map(Vec::len).collect()
    }

    /// The symbols grouped by code length (index = length - 1), ascending
    /// within each length.
    pub fn ordered_symbols(&self) -> &[Vec<i32>] {
        &self.symbols
    }

    /// Deepest assigned code length, in bits. 0 for an empty table.
    pub fn max_length(&self) -> usize {
        self.decode.len()
    }
}
