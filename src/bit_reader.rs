//! LSB-first bit cursor over the packed buffer.
//!
//! Bit `n` of the stream lives in byte `n / 8` at position `n % 8`, where
//! position 0 is the least significant bit. Multi-bit fields are assembled
//! least significant bit first and are not byte aligned.

use crate::DecodeError;

#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BitReader<'a> {
    pub fn from_slice(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn bits_read(&self) -> usize {
        self.pos
    }

    /// True once the cursor has moved into or past the byte after the last.
    pub fn is_exhausted(&self) -> bool {
        self.pos / 8 >= self.data.len()
    }

    /// Look at the bit under the cursor without consuming it.
    pub fn peek_bit(&self) -> Option<bool> {
        self.data
            .get(self.pos / 8)
            .map(|byte| (byte >> (self.pos % 8)) & 1 != 0)
    }

    pub fn read_bit(&mut self) -> Result<bool, DecodeError> {
        let bit = self
            .peek_bit()
            .ok_or(DecodeError::Truncated { bit: self.pos })?;
        self.pos += 1;
        Ok(bit)
    }

    /// Read a `width`-bit field. On failure the cursor is left where the
    /// field started.
    pub fn read_bits(&mut self, width: u32) -> Result<usize, DecodeError> {
        let start = self.pos;
        if start + width as usize > self.data.len() * 8 {
            return Err(DecodeError::Truncated { bit: start });
        }
        let mut value = 0usize;
        for bit in 0..width {
            if self.read_bit()? {
                value |= 1 << bit;
            }
        }
        Ok(value)
    }
}

/// Writer producing the layout [`BitReader`] consumes.
#[derive(Debug, Default, Clone)]
pub struct BitWriter {
    out: Vec<u8>,
    pos: usize,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bits_written(&self) -> usize {
        self.pos
    }

    pub fn write_bit(&mut self, bit: bool) {
        if self.pos % 8 == 0 {
            self.out.push(0);
        }
        if bit {
            if let Some(last) = self.out.last_mut() {
                *last |= 1 << (self.pos % 8);
            }
        }
        self.pos += 1;
    }

    /// Append the low `width` bits of `value`, least significant first.
    pub fn write_bits(&mut self, value: usize, width: u32) {
        for bit in 0..width {
            self.write_bit((value >> bit) & 1 != 0);
        }
    }

    /// Finish the stream; unused bits of the final byte stay zero.
    pub fn into_bytes(self) -> Vec<u8> {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_lsb_first() {
        // 0b1010_0110: low nibble 6, high nibble 10
        let data = [0xA6u8];
        let mut reader = BitReader::from_slice(&data);
        assert_eq!(reader.read_bits(4).unwrap(), 6);
        assert_eq!(reader.read_bits(4).unwrap(), 10);
        assert!(reader.is_exhausted());
    }

    #[test]
    fn fields_straddle_bytes() {
        // bits: 1,1,1 | 0,0,0 | 1,1,(byte 1) 1 ...
        let data = [0b1100_0111u8, 0b0000_0001u8];
        let mut reader = BitReader::from_slice(&data);
        assert_eq!(reader.read_bits(3).unwrap(), 7);
        assert_eq!(reader.read_bits(3).unwrap(), 0);
        assert_eq!(reader.read_bits(3).unwrap(), 7);
        assert_eq!(reader.bits_read(), 9);
    }

    #[test]
    fn truncated_field_leaves_cursor() {
        let data = [0xFFu8];
        let mut reader = BitReader::from_slice(&data);
        reader.read_bits(6).unwrap();
        assert_eq!(reader.read_bits(3), Err(DecodeError::Truncated { bit: 6 }));
        assert_eq!(reader.bits_read(), 6);
    }

    #[test]
    fn writer_matches_reader() {
        let mut writer = BitWriter::new();
        writer.write_bits(5, 3);
        writer.write_bits(0, 3);
        writer.write_bits(6, 3);
        assert_eq!(writer.bits_written(), 9);
        let bytes = writer.into_bytes();
        assert_eq!(bytes.len(), 2);
        let mut reader = BitReader::from_slice(&bytes);
        assert_eq!(reader.read_bits(3).unwrap(), 5);
        assert_eq!(reader.read_bits(3).unwrap(), 0);
        assert_eq!(reader.read_bits(3).unwrap(), 6);
    }
}
