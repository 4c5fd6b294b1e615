//! Codec schema for the packed beach asset.
//!
//! Every field in the bit stream is an index into [`CodecSchema::symbol_table`].
//! The table starts from a fixed base ordering of the five tile kinds and is
//! left padded with extra sand slots until it fills the index space of the
//! field width. Each sand slot carries its own run multiplier, taken in order
//! from `1, 2, 3, 5, 7, 11, ...`, so a single field can stand for a whole run
//! of sand.

use log::debug;

use crate::{BeachError, BeachTile};

/// Ordering before sand padding. Changing it is a breaking format change.
pub const BASE_ORDERING: [BeachTile; 5] = [
    BeachTile::Sand,
    BeachTile::RareSparkle,
    BeachTile::UncommonSparkle,
    BeachTile::Castle,
    BeachTile::BeachHead,
];

/// Field width the shipped asset was packed with.
pub const REFERENCE_FIELD_WIDTH: u32 = 4;

/// Widest field accepted by [`CodecSchema::with_bits`].
pub const MAX_FIELD_WIDTH: u32 = 16;

/// Number of distinct indices a field of `bits` bits may address.
pub fn max_index_count(bits: u32) -> usize {
    (1usize << bits) - 1
}

/// Trial division check; 0 and 1 are treated as non-composite.
pub fn is_composite(n: u64) -> bool {
    let mut i = 2u64;
    while i * i <= n {
        if n % i == 0 {
            return true;
        }
        i += 1;
    }
    false
}

/// First `count` members of `{1} ∪ primes` in increasing order.
pub fn run_multipliers(count: usize) -> Vec<u32> {
    let mut out = Vec::with_capacity(count);
    if count == 0 {
        return out;
    }
    out.push(1);
    let mut candidate = 2u32;
    while out.len() < count {
        if !is_composite(candidate as u64) {
            out.push(candidate);
        }
        candidate += 1;
    }
    out
}

/// One resolved table entry: the tile it decodes to and how many copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub tile: BeachTile,
    pub run: u32,
}

/// Immutable description of how indices map to tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecSchema {
    field_width: u32,
    symbol_table: Vec<BeachTile>,
    run_multipliers: Vec<u32>,
    slots: Vec<Slot>,
}

impl CodecSchema {
    /// Build a schema for `bits`-wide fields, keeping `leave_leftover`
    /// indices unassigned at the top of the range.
    pub fn with_bits(bits: u32, leave_leftover: usize) -> Result<Self, BeachError> {
        if bits > MAX_FIELD_WIDTH {
            return Err(BeachError::Config(format!(
                "field width {bits} exceeds the maximum of {MAX_FIELD_WIDTH}"
            )));
        }
        let max = max_index_count(bits);
        if BASE_ORDERING.len() > max {
            return Err(BeachError::Config(format!(
                "not enough bits: {bits} bits address only {max} symbols, {} required",
                BASE_ORDERING.len()
            )));
        }

        let padding = max.saturating_sub(BASE_ORDERING.len() + leave_leftover);
        let mut symbol_table = vec![BeachTile::Sand; padding];
        symbol_table.extend_from_slice(&BASE_ORDERING);

        let sand_slots = symbol_table
            .iter()
            .filter(|&&t| t == BeachTile::Sand)
            .count();
        let run_multipliers = run_multipliers(sand_slots);

        let mut runs = run_multipliers.iter();
        let slots = symbol_table
            .iter()
            .map(|&tile| {
                let run = if tile == BeachTile::Sand {
                    runs.next().copied().unwrap_or(1)
                } else {
                    1
                };
                Slot { tile, run }
            })
            .collect();

        debug!(
            "codec schema: width={} table={} sand_slots={} multipliers={:?}",
            bits,
            symbol_table.len(),
            sand_slots,
            run_multipliers
        );

        Ok(Self {
            field_width: bits,
            symbol_table,
            run_multipliers,
            slots,
        })
    }

    /// Schema the shipped asset is encoded with.
    pub fn reference() -> Self {
        Self::with_bits(REFERENCE_FIELD_WIDTH, 0)
            .unwrap_or_else(|_| unreachable!("reference width addresses every tile"))
    }

    pub fn field_width(&self) -> u32 {
        self.field_width
    }

    pub fn symbol_table(&self) -> &[BeachTile] {
        &self.symbol_table
    }

    /// Multipliers in sand-slot order.
    pub fn run_multipliers(&self) -> &[u32] {
        &self.run_multipliers
    }

    /// Resolved entry for a field value, if the table has one.
    pub fn slot(&self, index: usize) -> Option<Slot> {
        self.slots.get(index).copied()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_check() {
        assert!(!is_composite(2));
        assert!(!is_composite(13));
        assert!(is_composite(4));
        assert!(is_composite(49));
        assert!(!is_composite(1));
    }

    #[test]
    fn multipliers_start_at_one() {
        assert_eq!(run_multipliers(0), Vec::<u32>::new());
        assert_eq!(run_multipliers(1), vec![1]);
        assert_eq!(run_multipliers(6), vec![1, 2, 3, 5, 7, 11]);
    }

    #[test]
    fn leftover_shrinks_padding() {
        let schema = CodecSchema::with_bits(4, 3).unwrap();
        assert_eq!(schema.symbol_table().len(), 12);
        assert_eq!(schema.run_multipliers(), &[1, 2, 3, 5, 7, 11, 13, 17]);
    }

    #[test]
    fn leftover_larger_than_room_keeps_base() {
        let schema = CodecSchema::with_bits(3, 10).unwrap();
        assert_eq!(schema.symbol_table(), &BASE_ORDERING);
        assert_eq!(schema.run_multipliers(), &[1]);
    }
}
