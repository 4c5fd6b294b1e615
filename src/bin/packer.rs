use clap::Parser;
use std::fs;
use std::path::PathBuf;
use beachcomber::{
    encode,
    io_utils::{beach_cli_error, io_cli_error, simple_cli_error},
    BeachTile, Config, PackedAsset, TileSequence,
};

/// Pack a text file of tile codes (h, s, c, u, r) into a base64 asset.
#[derive(Parser)]
struct Args {
    /// Text file with one code per tile, whitespace ignored
    input: PathBuf,
    /// Output base64 asset
    output: PathBuf,
    #[clap(long, default_value_t = 4)]
    bits: u32,
    #[clap(long, default_value_t = 0)]
    leftover: usize,
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let text =
        fs::read_to_string(&args.input).map_err(|e| io_cli_error("reading input file", &args.input, e))?;
    let mut tiles = Vec::new();
    for c in text.chars().filter(|c| !c.is_whitespace()) {
        let tile = BeachTile::from_code(c)
            .ok_or_else(|| simple_cli_error(&format!("unknown tile code '{c}'")))?;
        tiles.push(tile);
    }
    let tiles = TileSequence::new(tiles)
        .map_err(|e| beach_cli_error("reading tiles", e.into()))?;
    let schema = Config {
        field_width: args.bits,
        leave_leftover: args.leftover,
    }
    .schema()
    .map_err(|e| beach_cli_error("building codec schema", e))?;
    let packed = encode(&tiles, &schema).map_err(|e| beach_cli_error("packing tiles", e))?;
    let asset = PackedAsset::from_bytes(packed);
    fs::write(&args.output, asset.to_base64())
        .map_err(|e| io_cli_error("writing output file", &args.output, e))?;
    eprintln!(
        "Packed {} tiles into {} bytes (sha256 {})",
        tiles.len(),
        asset.bytes().len(),
        asset.fingerprint()
    );
    Ok(())
}
