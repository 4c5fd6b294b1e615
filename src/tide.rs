//! Tide estimate for the beach.
//!
//! The tide runs on an eight day cycle counted from the game's epoch. On the
//! low tide day all rows are exposed; either side of it the sea covers up to
//! four rows from the top of each page.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

/// Unix time of the game's day zero.
pub const KOL_EPOCH: i64 = 1_044_847_800;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;
const CYCLE_DAYS: i64 = 8;

/// Whole days between the game epoch and `unix_secs`.
pub fn kol_days(unix_secs: i64) -> i64 {
    (unix_secs - KOL_EPOCH).div_euclid(SECONDS_PER_DAY)
}

/// Rows covered by water on game day `days`, in `0..=4`.
pub fn rows_hidden(days: i64) -> usize {
    let phase = (days - 2).rem_euclid(CYCLE_DAYS);
    (4 - phase).unsigned_abs() as usize
}

pub fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(KOL_EPOCH)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TideForecast {
    pub day: i64,
    pub today: usize,
    pub tomorrow: usize,
}

impl TideForecast {
    pub fn at(unix_secs: i64) -> Self {
        let day = kol_days(unix_secs);
        Self {
            day,
            today: rows_hidden(day),
            tomorrow: rows_hidden(day + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_shape() {
        // 7502 and 7510 fully exposed, 7506 at high tide
        assert_eq!(rows_hidden(7502), 0);
        assert_eq!(rows_hidden(7506), 4);
        assert_eq!(rows_hidden(7510), 0);
        let cycle: Vec<usize> = (7502..7510).map(rows_hidden).collect();
        assert_eq!(cycle, vec![0, 1, 2, 3, 4, 3, 2, 1]);
    }

    #[test]
    fn days_from_epoch() {
        assert_eq!(kol_days(KOL_EPOCH), 0);
        assert_eq!(kol_days(KOL_EPOCH + SECONDS_PER_DAY - 1), 0);
        assert_eq!(kol_days(KOL_EPOCH + 3 * SECONDS_PER_DAY), 3);
        assert_eq!(kol_days(KOL_EPOCH - 1), -1);
    }

    #[test]
    fn forecast_tomorrow_follows() {
        let f = TideForecast::at(KOL_EPOCH + 2 * SECONDS_PER_DAY);
        assert_eq!(f.day, 2);
        assert_eq!(f.today, 4);
        assert_eq!(f.tomorrow, 3);
    }
}
