use beachcomber::{decode, encode, BeachTile, CodecSchema, TileCounts, TileSequence, TILE_COUNT};
use proptest::prelude::*;

fn tile_strategy() -> impl Strategy<Value = BeachTile> {
    prop_oneof![
        Just(BeachTile::BeachHead),
        Just(BeachTile::Castle),
        Just(BeachTile::UncommonSparkle),
        Just(BeachTile::RareSparkle),
    ]
}

/// Features separated by sand runs, padded with sand to the full count.
fn sequence_from(features: &[(BeachTile, usize)]) -> TileSequence {
    let mut tiles = Vec::with_capacity(TILE_COUNT);
    for &(tile, gap) in features {
        tiles.extend(std::iter::repeat(BeachTile::Sand).take(gap));
        tiles.push(tile);
    }
    tiles.truncate(TILE_COUNT);
    tiles.resize(TILE_COUNT, BeachTile::Sand);
    TileSequence::new(tiles).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 4, .. ProptestConfig::default() })]
    #[test]
    fn roundtrip_any_layout(features in proptest::collection::vec((tile_strategy(), 0usize..5_000), 0..400),
                            bits in 3u32..7,
                            leftover in 0usize..4) {
        let schema = CodecSchema::with_bits(bits, leftover).unwrap();
        let tiles = sequence_from(&features);
        let packed = encode(&tiles, &schema).unwrap();
        let decoded = decode(&packed, &schema).unwrap();
        prop_assert_eq!(decoded.len(), TILE_COUNT);
        prop_assert_eq!(TileCounts::of(decoded.iter().copied()), TileCounts::of(tiles.iter().copied()));
        prop_assert_eq!(decoded, tiles);
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 16, .. ProptestConfig::default() })]
    #[test]
    fn arbitrary_bytes_never_panic(data in proptest::collection::vec(any::<u8>(), 0..2_048)) {
        // far too short to hold a full beach
        prop_assert!(decode(&data, &CodecSchema::reference()).is_err());
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 8, .. ProptestConfig::default() })]
    #[test]
    fn sand_reads_match_multiplier(slot in 0usize..11) {
        let schema = CodecSchema::reference();
        let mult = schema.run_multipliers()[slot] as usize;
        let fields = TILE_COUNT.div_ceil(mult);
        let byte = (slot as u8) | ((slot as u8) << 4);
        let mut packed = vec![byte; fields / 2];
        if fields % 2 == 1 {
            packed.push(slot as u8);
        }
        let result = decode(&packed, &schema);
        if TILE_COUNT % mult == 0 {
            prop_assert!(result.unwrap().iter().all(|&t| t == BeachTile::Sand));
        } else {
            prop_assert!(result.is_err());
        }
    }
}
