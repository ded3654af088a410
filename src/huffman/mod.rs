//! Canonical Huffman coding.
//!
//! [`code::HuffmanCode`] turns a symbol frequency table, or a transmitted
//! per-length symbol list, into a canonical prefix code: a bidirectional
//! symbol <-> (code, length) mapping in which codes are assigned in
//! non-decreasing length order and ascending symbol order within a length.
//! Canonical form means the whole table reconstructs from nothing but the
//! per-length symbol counts plus the symbols in order, which is the
//! wire-compact representation exposed through `length_counts`/`ordered_symbols`.
//!
//! The frequency path lives in [`tree`]: greedy two-minimum merging, depth
//! assignment, and the optional maximum-length rebalance. The streams in
//! `crate::bitstream` carry the encoded bits; the engine only touches them
//! through plain `write`/`read` calls.

pub mod code;
pub mod tree;

pub use code::HuffmanCode;
