use log::{debug, info};

use crate::bitstream::bitreader::BitReader;
use crate::error::{Error, Result};
use crate::huffman::HuffmanCode;
use crate::tools::crc::crc16;

use super::{MAGIC, MAX_CODE_LENGTH};

/// Unpack a stream produced by [`super::compress`] and return the original
/// bytes. Structural violations fail with `Corrupt`; a payload that decodes
/// but does not match its integrity trailer fails with `ChecksumMismatch`.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut reader = BitReader::new(data);

    let mut magic = [0u8; 4];
    reader.read_bytes(&mut magic)?;
    if &magic != MAGIC {
        return Err(Error::Corrupt("bad magic"));
    }
    let length = reader.read(32)? as usize;
    let expected = reader.read(16)? as u16;

    let levels = reader.read_utf8()? as usize;
    if levels > MAX_CODE_LENGTH {
        return Err(Error::Corrupt("code table deeper than the format allows"));
    }
    let mut length_counts = Vec::with_capacity(levels);
    for _ in 0..levels {
        let count = reader.read_utf8()? as usize;
        if count > 256 {
            return Err(Error::Corrupt("level count exceeds the byte alphabet"));
        }
        length_counts.push(count);
    }
    let mut symbol_list: Vec<Vec<i32>> = Vec::with_capacity(levels);
    for &count in &length_counts {
        let mut level = Vec::with_capacity(count);
        for _ in 0..count {
            let symbol = reader.read_utf8()?;
            if symbol > 255 {
                return Err(Error::Corrupt("symbol outside the byte alphabet"));
            }
            level.push(symbol as i32);
        }
        symbol_list.push(level);
    }
    let code = HuffmanCode::from_lengths(&symbol_list);
    debug!(
        "rebuilt code table: {} levels, {} symbols",
        code.max_length(),
        symbol_list.iter().map(Vec::len).sum::<usize>()
    );

    let mut output = Vec::with_capacity(length);
    for _ in 0..length {
        match code.decode_from(&mut reader)? {
            Some(symbol) => output.push(symbol as u8),
            None => return Err(Error::Corrupt("bit pattern matches no code")),
        }
    }

    let actual = crc16(&output, 0);
    if actual != expected {
        return Err(Error::ChecksumMismatch { expected, actual });
    }
    info!("unpacked {} bytes from {}", output.len(), data.len());
    Ok(output)
}
