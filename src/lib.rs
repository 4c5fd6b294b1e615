//! Decoder for the packed beach tile asset.
//!
//! The asset stores 10,000 pages of 10×10 tiles as a stream of fixed-width
//! symbol indices. [`CodecSchema`] describes the index table, [`decode`]
//! unpacks the stream into a [`TileSequence`] and [`materialize`] slices it
//! into a [`PageGrid`].

pub mod asset;
pub mod bit_reader;
pub mod config;
mod decode;
mod encode;
mod error;
pub mod grid;
pub mod io_utils;
pub mod schema;
pub mod search;
pub mod stats;
pub mod tide;
mod tile;

pub use asset::PackedAsset;
pub use config::Config;
pub use decode::{decode, TileSequence};
pub use encode::encode;
pub use error::{BeachError, DecodeError};
pub use grid::{format_page, materialize, Page, PageGrid};
pub use schema::CodecSchema;
pub use search::{find_rare, Direction};
pub use stats::TileCounts;
pub use tide::TideForecast;
pub use tile::BeachTile;

/// Pages in the asset.
pub const PAGE_COUNT: usize = 10_000;
pub const PAGE_ROWS: usize = 10;
pub const PAGE_COLS: usize = 10;
pub const TILES_PER_PAGE: usize = PAGE_ROWS * PAGE_COLS;
/// Tiles a valid stream decodes to.
pub const TILE_COUNT: usize = PAGE_COUNT * TILES_PER_PAGE;

/// Load, decode and materialize a base64 asset in one step.
pub fn load_grid<P: AsRef<std::path::Path>>(
    path: P,
    schema: &CodecSchema,
) -> Result<PageGrid, BeachError> {
    let asset = PackedAsset::load(path)?;
    let tiles = decode(asset.bytes(), schema)?;
    Ok(materialize(&tiles))
}
