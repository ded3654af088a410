//! A single-shot Huffman file codec built on the core.
//!
//! This is the driver that puts the canonical table's wire representation
//! to work: per-length symbol counts plus the symbols themselves, enough
//! for the far end to rebuild the identical code with
//! `HuffmanCode::from_lengths`. No explicit (code, length) pairs ever
//! travel. Deliberately not a container format: one header, one table, one
//! payload, no block framing and no windows.
//!
//! Layout, MSB-first:
//! - magic `BFH1`
//! - 32-bit original byte length
//! - 16-bit CRC of the original bytes
//! - level count, then one symbol count per level, then the symbols in
//!   length-then-value order, all as UTF-8 style varints
//! - the Huffman-coded payload, zero-padded to a byte boundary

pub mod compress;
pub mod decompress;

pub use compress::compress;
pub use decompress::decompress;

/// File magic, first bytes of every packed stream.
pub const MAGIC: &[u8; 4] = b"BFH1";

/// Code length cap for the packed format. Fifteen bits comfortably holds a
/// 256-symbol alphabet and keeps decode probing short.
pub const MAX_CODE_LENGTH: usize = 15;
