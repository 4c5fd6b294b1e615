//! Per-kind tile tallies used by the CLI summary.

use serde::Serialize;

use crate::BeachTile;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TileCounts {
    pub beach_head: u64,
    pub sand: u64,
    pub castle: u64,
    pub uncommon_sparkle: u64,
    pub rare_sparkle: u64,
}

impl TileCounts {
    pub fn of<I: IntoIterator<Item = BeachTile>>(tiles: I) -> Self {
        let mut counts = Self::default();
        for tile in tiles {
            counts.tick(tile);
        }
        counts
    }

    pub fn tick(&mut self, tile: BeachTile) {
        match tile {
            BeachTile::BeachHead => self.beach_head += 1,
            BeachTile::Sand => self.sand += 1,
            BeachTile::Castle => self.castle += 1,
            BeachTile::UncommonSparkle => self.uncommon_sparkle += 1,
            BeachTile::RareSparkle => self.rare_sparkle += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.beach_head + self.sand + self.castle + self.uncommon_sparkle + self.rare_sparkle
    }

    pub fn report(&self) {
        eprintln!(
            "Tiles: {} total | sand {} | castle {} | head {} | uncommon {} | rare {}",
            self.total(),
            self.sand,
            self.castle,
            self.beach_head,
            self.uncommon_sparkle,
            self.rare_sparkle
        );
    }
}
