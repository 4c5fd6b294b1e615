use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{BeachError, BeachTile, TileSequence, PAGE_COLS, PAGE_COUNT, PAGE_ROWS, TILES_PER_PAGE};

/// One 10×10 page, row-major.
pub type Page = [[BeachTile; PAGE_COLS]; PAGE_ROWS];

/// All decoded pages, addressed by 1-based page number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageGrid {
    pages: Vec<Page>,
}

/// Slice the sequence into pages in encounter order.
pub fn materialize(tiles: &TileSequence) -> PageGrid {
    let pages = tiles
        .chunks_exact(TILES_PER_PAGE)
        .map(|chunk| {
            let mut page = [[BeachTile::Sand; PAGE_COLS]; PAGE_ROWS];
            for (row, cells) in page.iter_mut().zip(chunk.chunks_exact(PAGE_COLS)) {
                row.copy_from_slice(cells);
            }
            page
        })
        .collect();
    PageGrid { pages }
}

impl PageGrid {
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Page `number` in `1..=PAGE_COUNT`.
    pub fn page(&self, number: usize) -> Option<&Page> {
        number.checked_sub(1).and_then(|i| self.pages.get(i))
    }

    pub fn tile(&self, number: usize, row: usize, col: usize) -> Option<BeachTile> {
        self.page(number)?.get(row)?.get(col).copied()
    }

    /// Pages paired with their 1-based numbers.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Page)> {
        self.pages.iter().enumerate().map(|(i, page)| (i + 1, page))
    }

    /// Flatten back into the decoded order.
    pub fn tiles(&self) -> impl Iterator<Item = BeachTile> + '_ {
        self.pages.iter().flatten().flatten().copied()
    }

    /// Write a bincode snapshot of the grid.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), BeachError> {
        let file = File::create(path)?;
        bincode::serialize_into(BufWriter::new(file), self)
            .map_err(|e| BeachError::Serialization(e.to_string()))
    }

    /// Load a snapshot written by [`PageGrid::save`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, BeachError> {
        let file = File::open(path)?;
        let grid: PageGrid = bincode::deserialize_from(BufReader::new(file))
            .map_err(|e| BeachError::Serialization(e.to_string()))?;
        if grid.pages.len() != PAGE_COUNT {
            return Err(BeachError::Serialization(format!(
                "snapshot holds {} pages, expected {}",
                grid.pages.len(),
                PAGE_COUNT
            )));
        }
        Ok(grid)
    }

    /// Write `page,row,col,tile` records for pages `from..=to`.
    pub fn export_csv<W: std::io::Write>(
        &self,
        out: W,
        from: usize,
        to: usize,
    ) -> Result<usize, BeachError> {
        for number in [from, to] {
            if self.page(number).is_none() {
                return Err(BeachError::PageOutOfRange(number));
            }
        }
        let mut writer = csv::Writer::from_writer(out);
        writer
            .write_record(["page", "row", "col", "tile"])
            .map_err(|e| BeachError::Serialization(e.to_string()))?;
        let mut records = 0usize;
        for (number, page) in self.iter().filter(|(n, _)| (from..=to).contains(n)) {
            for (r, row) in page.iter().enumerate() {
                for (c, tile) in row.iter().enumerate() {
                    writer
                        .write_record([
                            number.to_string(),
                            r.to_string(),
                            c.to_string(),
                            tile.to_string(),
                        ])
                        .map_err(|e| BeachError::Serialization(e.to_string()))?;
                    records += 1;
                }
            }
        }
        writer.flush()?;
        Ok(records)
    }
}

/// Render a page as ten lines of tile codes.
pub fn format_page(page: &Page) -> String {
    let mut out = String::with_capacity(PAGE_ROWS * (PAGE_COLS + 1));
    for row in page {
        out.extend(row.iter().map(|t| t.code()));
        out.push('\n');
    }
    out
}
