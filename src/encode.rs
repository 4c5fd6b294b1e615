use log::debug;

use crate::bit_reader::BitWriter;
use crate::{BeachError, BeachTile, CodecSchema, TileSequence};

/// Pack `tiles` so that [`crate::decode`] with the same schema returns them.
///
/// Sand runs are cut greedily: each field takes the largest multiplier that
/// still fits the remaining run. The multiplier 1 slot always exists, so
/// every run length can be covered.
pub fn encode(tiles: &TileSequence, schema: &CodecSchema) -> Result<Vec<u8>, BeachError> {
    let width = schema.field_width();

    let mut sand_slots: Vec<(usize, u32)> = schema
        .slots()
        .iter()
        .enumerate()
        .filter(|(_, slot)| slot.tile == BeachTile::Sand)
        .map(|(index, slot)| (index, slot.run))
        .collect();
    sand_slots.sort_by(|a, b| b.1.cmp(&a.1));
    if sand_slots.last().map(|&(_, run)| run) != Some(1) {
        return Err(BeachError::Config("schema has no single sand slot".into()));
    }

    let mut single = [None; 5];
    for tile in BeachTile::ALL {
        single[tile as usize] = schema
            .slots()
            .iter()
            .position(|slot| slot.tile == tile && slot.run == 1);
    }

    let tiles = tiles.as_slice();
    let mut writer = BitWriter::new();
    let mut i = 0usize;
    while i < tiles.len() {
        let tile = tiles[i];
        if tile == BeachTile::Sand {
            let run = tiles[i..].iter().take_while(|&&t| t == BeachTile::Sand).count();
            let mut left = run;
            while left > 0 {
                let &(index, mult) = sand_slots
                    .iter()
                    .find(|&&(_, mult)| (mult as usize) <= left)
                    .ok_or_else(|| BeachError::Config("schema has no single sand slot".into()))?;
                writer.write_bits(index, width);
                left -= mult as usize;
            }
            i += run;
        } else {
            let index = single[tile as usize].ok_or_else(|| {
                BeachError::Config(format!("schema has no slot for tile '{tile}'"))
            })?;
            writer.write_bits(index, width);
            i += 1;
        }
    }

    debug!(
        "packed {} tiles into {} bits",
        tiles.len(),
        writer.bits_written()
    );
    Ok(writer.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decode, TILE_COUNT};

    #[test]
    fn all_sand_uses_largest_runs() {
        let schema = CodecSchema::reference();
        let tiles = TileSequence::new(vec![BeachTile::Sand; TILE_COUNT]).unwrap();
        let packed = encode(&tiles, &schema).unwrap();
        // 1_000_000 = 34482 * 29 + 22, and 22 = 19 + 3
        assert_eq!(packed.len(), (34_484 * 4 + 7) / 8);
        assert_eq!(decode(&packed, &schema).unwrap(), tiles);
    }
}
