use std::fmt;

use serde::{Deserialize, Serialize};

/// One cell of a beach page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BeachTile {
    #[serde(rename = "h")]
    BeachHead,
    #[serde(rename = "s")]
    Sand,
    #[serde(rename = "c")]
    Castle,
    #[serde(rename = "u")]
    UncommonSparkle,
    #[serde(rename = "r")]
    RareSparkle,
}

impl BeachTile {
    pub const ALL: [BeachTile; 5] = [
        BeachTile::BeachHead,
        BeachTile::Sand,
        BeachTile::Castle,
        BeachTile::UncommonSparkle,
        BeachTile::RareSparkle,
    ];

    /// One-letter code used in text dumps and the serde form.
    pub fn code(self) -> char {
        match self {
            BeachTile::BeachHead => 'h',
            BeachTile::Sand => 's',
            BeachTile::Castle => 'c',
            BeachTile::UncommonSparkle => 'u',
            BeachTile::RareSparkle => 'r',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'h' => Some(BeachTile::BeachHead),
            's' => Some(BeachTile::Sand),
            'c' => Some(BeachTile::Castle),
            'u' => Some(BeachTile::UncommonSparkle),
            'r' => Some(BeachTile::RareSparkle),
            _ => None,
        }
    }

    /// Tiles whose artwork may be drawn at a random rotation.
    pub fn is_rotatable(self) -> bool {
        matches!(
            self,
            BeachTile::Sand | BeachTile::UncommonSparkle | BeachTile::RareSparkle
        )
    }
}

impl fmt::Display for BeachTile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_unique_and_reversible() {
        for tile in BeachTile::ALL {
            assert_eq!(BeachTile::from_code(tile.code()), Some(tile));
        }
        assert_eq!(BeachTile::from_code('x'), None);
    }

    #[test]
    fn castle_and_head_do_not_rotate() {
        assert!(!BeachTile::Castle.is_rotatable());
        assert!(!BeachTile::BeachHead.is_rotatable());
        assert!(BeachTile::Sand.is_rotatable());
    }

    #[test]
    fn serde_uses_codes() {
        let json = serde_json::to_string(&BeachTile::RareSparkle).unwrap();
        assert_eq!(json, "\"r\"");
        let back: BeachTile = serde_json::from_str("\"c\"").unwrap();
        assert_eq!(back, BeachTile::Castle);
    }
}
