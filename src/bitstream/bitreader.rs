//! The dual of the writer: extracts sub-byte values from a byte source.
//!
//! Reads are strict: running off the end of the source mid-read fails with
//! [`Error::UnexpectedEof`] rather than zero-filling, so a genuine run of
//! zero bits is never confusable with exhaustion.

use std::io::{ErrorKind, Read};

use crate::error::{Error, Result};
use crate::tools::utf8;

use super::{BitOrder, MAX_BITS_PER_CALL};

/// Pulls sub-byte values out of a byte-oriented source.
///
/// The mirror of `BitWriter`: one accumulator byte, refilled from the source
/// whenever it runs out, with the same construction-time [`BitOrder`]
/// contract. Callers always see MSB-first semantics; an LSB-first stream
/// reverses each byte once at fetch time.
#[derive(Debug)]
pub struct BitReader<R> {
    source: R,
    /// Byte most recently fetched from the source.
    queue: u8,
    /// Count of bits in the queue not yet handed out.
    q_bits: u8,
    order: BitOrder,
}

impl<R: Read> BitReader<R> {
    /// Create an MSB-first reader over the given source.
    pub fn new(source: R) -> Self {
        Self::with_order(source, BitOrder::Msb)
    }

    /// Create a reader with an explicit bit order, which must match the
    /// order the stream was written with.
    pub fn with_order(source: R, order: BitOrder) -> Self {
        Self {
            source,
            queue: 0,
            q_bits: 0,
            order,
        }
    }

    /// Read the next `bits` bits as an unsigned integer, the earliest bit
    /// landing in the most significant position of the result. Requests
    /// over 32 bits fail without consuming anything.
    pub fn read(&mut self, bits: usize) -> Result<u32> {
        if bits > MAX_BITS_PER_CALL {
            return Err(Error::BitCountTooLarge(bits));
        }
        let mut remaining = bits;
        let mut value = 0u32;
        while remaining > 0 {
            if self.q_bits == 0 {
                self.fetch(remaining)?;
            }
            let take = remaining.min(self.q_bits as usize);
            let shift = self.q_bits as usize - take;
            let mask = (((1u16 << take) - 1) as u8) << shift;
            value = (value << take) | ((self.queue & mask) >> shift) as u32;
            self.q_bits -= take as u8;
            remaining -= take;
        }
        Ok(value)
    }

    /// Fill `buffer` with whole bytes, one `read(8)` per slot.
    pub fn read_bytes(&mut self, buffer: &mut [u8]) -> Result<()> {
        for slot in buffer {
            *slot = self.read(8)? as u8;
        }
        Ok(())
    }

    /// Read a UTF-8 style variable-length sequence (1-6 bytes) and return
    /// the decoded value.
    pub fn read_utf8(&mut self) -> Result<u32> {
        let mut buffer = [0u8; utf8::MAX_LEN];
        buffer[0] = self.read(8)? as u8;
        let extra = match utf8::continuation_bytes(buffer[0]) {
            Some(extra) => extra,
            None => return Err(Error::InvalidUtf8Lead(buffer[0])),
        };
        for slot in buffer.iter_mut().take(extra + 1).skip(1) {
            *slot = self.read(8)? as u8;
        }
        utf8::decode(&buffer[..extra + 1]).ok_or(Error::InvalidUtf8Continuation)
    }

    /// Pull the next byte from the source. `needed` is how many bits the
    /// current call still wants, reported on exhaustion.
    fn fetch(&mut self, needed: usize) -> Result<()> {
        let mut byte = [0u8; 1];
        match self.source.read_exact(&mut byte) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                return Err(Error::UnexpectedEof(needed));
            }
            Err(e) => return Err(e.into()),
        }
        self.queue = match self.order {
            BitOrder::Msb => byte[0],
            BitOrder::Lsb => byte[0].reverse_bits(),
        };
        self.q_bits = 8;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bitstream::bitwriter::BitWriter;

    #[test]
    fn single_bits() {
        let data = [0b1000_0001u8];
        let mut br = BitReader::new(data.as_slice());
        assert_eq!(br.read(1).unwrap(), 1);
        for _ in 0..6 {
            assert_eq!(br.read(1).unwrap(), 0);
        }
        assert_eq!(br.read(1).unwrap(), 1);
    }

    #[test]
    fn reads_spanning_bytes() {
        let data = [0b0001_1011u8, 0b1100_0000];
        let mut br = BitReader::new(data.as_slice());
        assert_eq!(br.read(5).unwrap(), 0b00011);
        assert_eq!(br.read(1).unwrap(), 0);
        assert_eq!(br.read(4).unwrap(), 0b1111);
    }

    #[test]
    fn read_32_bits() {
        let data = [0xDEu8, 0xAD, 0xBE, 0xEF];
        let mut br = BitReader::new(data.as_slice());
        assert_eq!(br.read(32).unwrap(), 0xDEAD_BEEF);
    }

    #[test]
    fn read_rejects_over_32() {
        let data = [0u8; 8];
        let mut br = BitReader::new(data.as_slice());
        assert!(matches!(br.read(33), Err(Error::BitCountTooLarge(33))));
    }

    #[test]
    fn exhaustion_is_an_error() {
        let data = [0xFFu8];
        let mut br = BitReader::new(data.as_slice());
        assert_eq!(br.read(6).unwrap(), 0b111111);
        // 2 bits remain; asking for 3 must fail, not zero-fill
        assert!(matches!(br.read(3), Err(Error::UnexpectedEof(1))));
    }

    #[test]
    fn read_bytes_fills_buffer() {
        let data = b"Hello, world!";
        let mut br = BitReader::new(data.as_slice());
        let mut buffer = [0u8; 5];
        br.read_bytes(&mut buffer).unwrap();
        assert_eq!(&buffer, b"Hello");
    }

    #[test]
    fn lsb_round_trip() {
        let mut out = Vec::new();
        let mut bw = BitWriter::with_order(&mut out, BitOrder::Lsb);
        bw.write(0b1011, 4).unwrap();
        bw.write(0x5A, 8).unwrap();
        bw.flush(false).unwrap();
        drop(bw);
        let mut br = BitReader::with_order(out.as_slice(), BitOrder::Lsb);
        assert_eq!(br.read(4).unwrap(), 0b1011);
        assert_eq!(br.read(8).unwrap(), 0x5A);
    }

    #[test]
    fn msb_written_lsb_read_differs_by_reversal() {
        let mut out = Vec::new();
        let mut bw = BitWriter::new(&mut out);
        bw.write(0b1011_0000, 8).unwrap();
        drop(bw);
        let mut br = BitReader::with_order(out.as_slice(), BitOrder::Lsb);
        assert_eq!(br.read(8).unwrap() as u8, 0b1011_0000u8.reverse_bits());
    }

    #[test]
    fn utf8_values_round_trip() {
        let values = [0u32, 0x7F, 0x80, 0x7FF, 0x800, 0xFFFF, 0x1_0000, 0x1F_FFFF, 0x20_0000, 0x3FF_FFFF, 0x400_0000, 0x7FFF_FFFF];
        let mut out = Vec::new();
        let mut bw = BitWriter::new(&mut out);
        for &value in &values {
            bw.write_utf8(value).unwrap();
        }
        bw.flush(false).unwrap();
        drop(bw);
        let mut br = BitReader::new(out.as_slice());
        for &value in &values {
            assert_eq!(br.read_utf8().unwrap(), value);
        }
    }

    #[test]
    fn utf8_rejects_continuation_lead() {
        let data = [0b1000_0000u8];
        let mut br = BitReader::new(data.as_slice());
        assert!(matches!(
            br.read_utf8(),
            Err(Error::InvalidUtf8Lead(0b1000_0000))
        ));
    }
}
