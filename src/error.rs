//! Error types shared across the crate.
//!
//! "Not found" outcomes (a symbol absent from an encode map, a code that
//! matches no length during streaming decode) are ordinary data and are
//! returned as `Option`/`bool` values, never as an `Error`.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A single-call read or write asked for more than 32 bits. The stream
    /// is left untouched; split the value across multiple calls instead.
    #[error("bit count {0} exceeds the 32-bit single-call ceiling")]
    BitCountTooLarge(usize),

    /// The requested maximum code length cannot hold the symbol population.
    /// No partial table is produced; raise the limit or shrink the alphabet.
    #[error("code length limit {limit} too small for {symbols} symbols")]
    LimitTooSmall { limit: usize, symbols: usize },

    /// The byte source ran dry in the middle of a read. Short reads are
    /// never zero-filled.
    #[error("unexpected end of stream with {0} bit(s) still needed")]
    UnexpectedEof(usize),

    /// The lead byte of a UTF-8 style sequence is a continuation byte or
    /// an invalid pattern.
    #[error("invalid lead byte {0:#04x} in UTF-8 sequence")]
    InvalidUtf8Lead(u8),

    /// A byte after the lead was not a continuation byte.
    #[error("invalid continuation byte in UTF-8 sequence")]
    InvalidUtf8Continuation,

    /// The value does not fit the six-byte UTF-8 style encoding.
    #[error("value {0:#x} cannot be encoded in six bytes")]
    CodepointTooLarge(u32),

    /// A packed input violated the file format.
    #[error("corrupted input: {0}")]
    Corrupt(&'static str),

    /// The integrity trailer did not match the decoded data.
    #[error("checksum mismatch: expected {expected:#06x}, got {actual:#06x}")]
    ChecksumMismatch { expected: u16, actual: u16 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
