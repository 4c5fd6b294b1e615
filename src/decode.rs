use std::ops::Deref;

use log::{debug, info, warn};

use crate::bit_reader::BitReader;
use crate::{BeachError, BeachTile, CodecSchema, DecodeError, TILE_COUNT};

/// Flat decoded tiles. Always exactly [`TILE_COUNT`] long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSequence(Vec<BeachTile>);

impl TileSequence {
    /// Wrap an owned tile list, rejecting any length other than [`TILE_COUNT`].
    pub fn new(tiles: Vec<BeachTile>) -> Result<Self, DecodeError> {
        if tiles.len() != TILE_COUNT {
            return Err(DecodeError::TileCount {
                expected: TILE_COUNT,
                actual: tiles.len(),
            });
        }
        Ok(Self(tiles))
    }

    pub fn as_slice(&self) -> &[BeachTile] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<BeachTile> {
        self.0
    }
}

impl Deref for TileSequence {
    type Target = [BeachTile];

    fn deref(&self) -> &[BeachTile] {
        &self.0
    }
}

/// Unpack `data` into the full tile sequence using `schema`.
///
/// Fields are read until either [`TILE_COUNT`] tiles exist or the cursor
/// leaves the buffer. Anything other than an exact count is an error; a
/// sand run that overshoots the total is treated the same as a short stream.
pub fn decode(data: &[u8], schema: &CodecSchema) -> Result<TileSequence, BeachError> {
    let width = schema.field_width();
    let mut reader = BitReader::from_slice(data);
    let mut tiles = Vec::with_capacity(TILE_COUNT);
    let mut fields = 0usize;

    while tiles.len() < TILE_COUNT && !reader.is_exhausted() {
        let bit = reader.bits_read();
        let index = reader.read_bits(width)?;
        let slot = schema
            .slot(index)
            .ok_or(DecodeError::InvalidIndex { index, bit })?;
        tiles.extend(std::iter::repeat(slot.tile).take(slot.run as usize));
        fields += 1;
    }

    debug!(
        "read {} fields ({} bits of {}) into {} tiles",
        fields,
        reader.bits_read(),
        data.len() * 8,
        tiles.len()
    );

    let unread = data.len().saturating_sub(reader.bits_read().div_ceil(8));
    if tiles.len() == TILE_COUNT && unread > 0 {
        warn!("ignoring {} bytes after the last tile", unread);
    }

    let sequence = TileSequence::new(tiles)?;
    info!("decoded {} tiles from {} packed bytes", TILE_COUNT, data.len());
    Ok(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer_is_a_count_error() {
        let err = decode(&[], &CodecSchema::reference()).unwrap_err();
        assert!(matches!(
            err,
            BeachError::Decode(DecodeError::TileCount { actual: 0, .. })
        ));
    }

    #[test]
    fn sequence_rejects_wrong_length() {
        assert!(TileSequence::new(vec![BeachTile::Sand; 10]).is_err());
        assert!(TileSequence::new(vec![BeachTile::Sand; TILE_COUNT]).is_ok());
    }

    #[test]
    fn index_past_table_is_rejected() {
        // width 4 table has 15 entries, index 15 is unassigned
        let err = decode(&[0xFF], &CodecSchema::reference()).unwrap_err();
        assert!(matches!(
            err,
            BeachError::Decode(DecodeError::InvalidIndex { index: 15, bit: 0 })
        ));
    }
}
