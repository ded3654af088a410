use log::{debug, info};

use crate::bitstream::bitwriter::BitWriter;
use crate::error::{Error, Result};
use crate::huffman::HuffmanCode;
use crate::tools::crc::crc16;
use crate::tools::freq_count;

use super::{MAGIC, MAX_CODE_LENGTH};

/// Pack `data` into the single-shot format and return the packed bytes.
///
/// Builds a length-limited canonical code from the input's byte histogram,
/// serializes the table through its counts-plus-symbols wire form, then
/// codes the payload. An empty input packs to a header and an empty table.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let counts = freq_count::byte_frequencies(data);
    let pairs = freq_count::frequency_pairs(&counts);
    let code = HuffmanCode::from_frequencies(&pairs, MAX_CODE_LENGTH)?;
    debug!(
        "{} distinct symbols, max code length {}",
        pairs.len(),
        code.max_length()
    );

    let mut output = Vec::with_capacity(data.len() / 2 + 16);
    let mut writer = BitWriter::new(&mut output);
    writer.write_bytes(MAGIC)?;
    writer.write(data.len() as u32, 32)?;
    writer.write(crc16(data, 0) as u32, 16)?;

    // The table travels as counts plus symbols; the decoder rebuilds the
    // identical code from nothing else.
    let length_counts = code.length_counts();
    writer.write_utf8(length_counts.len() as u32)?;
    for &count in &length_counts {
        writer.write_utf8(count as u32)?;
    }
    for level in code.ordered_symbols() {
        for &symbol in level {
            writer.write_utf8(symbol as u32)?;
        }
    }

    for &byte in data {
        if !code.encode_to(byte as i32, &mut writer)? {
            // the table was built from this very data
            return Err(Error::Corrupt("symbol missing from its own table"));
        }
    }
    writer.flush(false)?;
    drop(writer);

    info!(
        "packed {} bytes into {} ({:.1}%)",
        data.len(),
        output.len(),
        100.0 * output.len() as f64 / data.len().max(1) as f64
    );
    Ok(output)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn header_layout() {
        let packed = compress(b"").unwrap();
        assert_eq!(&packed[..4], MAGIC);
        // 32-bit length 0, 16-bit crc 0, one varint byte for zero levels
        assert_eq!(&packed[4..], &[0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn single_symbol_input_packs_to_bits() {
        let packed = compress(&[b'z'; 4000]).unwrap();
        // 4000 one-bit codes: 500 payload bytes plus the small header
        assert!(packed.len() < 520, "got {}", packed.len());
    }

    #[test]
    fn skewed_input_beats_flat_coding() {
        let mut data = vec![b'a'; 10_000];
        data.extend_from_slice(&[b'b'; 100]);
        data.extend_from_slice(&[b'c'; 10]);
        let packed = compress(&data).unwrap();
        assert!(packed.len() < data.len() / 4);
    }
}
