//! Bit-granular stream I/O and canonical Huffman coding.
//!
//! Provides the pieces for building compact, bit-exact binary encodings:
//! a bit-addressable writer/reader pair over ordinary byte streams
//! (MSB-first or LSB-first), a canonical Huffman code engine with optional
//! maximum-length rebalancing, and the small standardized transforms that
//! ride along with them (CRC-8/16, MD5, a UTF-8 style varint codec).
//!
//! Basic usage:
//!
//! ```no_run
//! use bitfold::bitstream::bitwriter::BitWriter;
//! use bitfold::huffman::HuffmanCode;
//!
//! let code = HuffmanCode::from_frequencies(&[(0, 20), (1, 5), (2, 12)], 0)?;
//! let mut out = Vec::new();
//! let mut writer = BitWriter::new(&mut out);
//! code.encode_to(0, &mut writer)?;
//! writer.flush(false)?;
//! # Ok::<(), bitfold::Error>(())
//! ```
//!
//! The `bitfold` binary wraps the [`compression`] module into a small
//! pack/unpack/digest command line tool.

pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman;
pub mod tools;

pub use error::{Error, Result};
