//! The bitstream module provides bit-granular I/O over ordinary byte streams.
//!
//! A [`bitwriter::BitWriter`] packs sub-byte values into any `std::io::Write`
//! sink; a [`bitreader::BitReader`] pulls them back out of any
//! `std::io::Read` source. Both sides reason in MSB-first terms regardless
//! of the physical [`BitOrder`]: an LSB-first stream only reverses the bit
//! order inside each byte at the single point where it touches the sink or
//! source, so a writer and reader agree as long as they were built with the
//! same order.
//!
//! Neither side depends on the Huffman engine; the engine writes and reads
//! through these types via plain `write`/`read` calls.

pub mod bitreader;
pub mod bitwriter;

/// Intra-byte bit order of a stream, fixed at construction.
///
/// `Msb` packs the first-written bit into the most significant position of
/// each output byte. `Lsb` reverses each byte on its way to or from the
/// underlying stream (zlib-style); byte order is unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitOrder {
    #[default]
    Msb,
    Lsb,
}

/// Ceiling on the number of bits a single `write`/`read` call may move.
pub const MAX_BITS_PER_CALL: usize = 32;
