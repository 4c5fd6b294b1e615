use crate::{BeachTile, PageGrid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// True if any row from `skip_rows` down holds a rare sparkle.
pub fn has_rare(page: &crate::Page, skip_rows: usize) -> bool {
    page.iter()
        .skip(skip_rows)
        .any(|row| row.contains(&BeachTile::RareSparkle))
}

/// Nearest page strictly past `from` in `direction` with a rare sparkle in
/// rows `skip_rows..`. Pass the rows hidden by the tide to only find rares
/// that are currently exposed.
pub fn find_rare(
    grid: &PageGrid,
    from: usize,
    direction: Direction,
    skip_rows: usize,
) -> Option<usize> {
    let hit = |n: &usize| grid.page(*n).is_some_and(|page| has_rare(page, skip_rows));
    match direction {
        Direction::Forward => (from.saturating_add(1)..=grid.len()).find(hit),
        Direction::Backward => (1..from.min(grid.len() + 1)).rev().find(hit),
    }
}
