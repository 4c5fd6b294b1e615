use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Instant;

use beachcomber::io_utils::{beach_cli_error, io_cli_error, simple_cli_error};
use beachcomber::{
    decode, find_rare, format_page, materialize, tide, BeachError, Config, Direction,
    PackedAsset, PageGrid, TideForecast, TileCounts, PAGE_COUNT,
};
use clap::{Args as ClapArgs, Parser, Subcommand};
use log::info;

/// Inspect the packed beach tile asset.
#[derive(Parser)]
#[command(name = "beachcomber")]
struct Cli {
    #[command(flatten)]
    codec: CodecArgs,
    #[command(subcommand)]
    command: Command,
}

#[derive(ClapArgs)]
struct CodecArgs {
    /// JSON file with `field_width` and `leave_leftover`
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Bits per symbol index, overrides the config file
    #[arg(long, global = true)]
    bits: Option<u32>,
    /// Unassigned indices at the top of the range, overrides the config file
    #[arg(long, global = true)]
    leftover: Option<usize>,
}

#[derive(Subcommand)]
enum Command {
    /// Decode the asset and print tile counts
    Decode {
        asset: PathBuf,
        /// Print the summary as JSON on stdout
        #[arg(long)]
        json: bool,
        /// Save a bincode snapshot of the decoded grid
        #[arg(long)]
        cache: Option<PathBuf>,
    },
    /// Print one page as rows of tile codes
    Page { asset: PathBuf, number: usize },
    /// Find the next (or previous) page holding a rare sparkle
    Rare {
        asset: PathBuf,
        from: usize,
        /// Search towards page 1
        #[arg(long)]
        back: bool,
        /// Ignore rows currently under water
        #[arg(long)]
        exposed: bool,
    },
    /// Write pages as `page,row,col,tile` CSV records
    Export {
        asset: PathBuf,
        output: PathBuf,
        #[arg(long, default_value_t = 1)]
        from: usize,
        #[arg(long, default_value_t = PAGE_COUNT)]
        to: usize,
    },
    /// Show how many rows the tide covers today and tomorrow
    Tide {
        /// Unix time to forecast for instead of now
        #[arg(long)]
        at: Option<i64>,
    },
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn config_from(args: &CodecArgs) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => Config::load(path).map_err(|e| beach_cli_error("reading config", e))?,
        None => Config::default(),
    };
    if let Some(bits) = args.bits {
        config.field_width = bits;
    }
    if let Some(leftover) = args.leftover {
        config.leave_leftover = leftover;
    }
    Ok(config)
}

fn open_grid(
    path: &Path,
    config: &Config,
) -> Result<(PackedAsset, PageGrid), Box<dyn std::error::Error>> {
    let schema = config
        .schema()
        .map_err(|e| beach_cli_error("building codec schema", e))?;
    let asset = PackedAsset::load(path).map_err(|e| match e {
        BeachError::Io(io) => io_cli_error("reading asset", path, io),
        other => beach_cli_error("reading asset", other),
    })?;
    let start = Instant::now();
    let tiles = decode(asset.bytes(), &schema).map_err(|e| beach_cli_error("decoding asset", e))?;
    let grid = materialize(&tiles);
    info!("decoded {} pages in {:.2?}", grid.len(), start.elapsed());
    Ok((asset, grid))
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = config_from(&cli.codec)?;

    match cli.command {
        Command::Decode { asset, json, cache } => {
            let (packed, grid) = open_grid(&asset, &config)?;
            let counts = TileCounts::of(grid.tiles());
            if let Some(path) = cache {
                grid.save(&path)
                    .map_err(|e| beach_cli_error("writing snapshot", e))?;
                eprintln!("Saved grid snapshot to {}", path.display());
            }
            if json {
                let out = serde_json::json!({
                    "packed_bytes": packed.bytes().len(),
                    "sha256": packed.fingerprint(),
                    "field_width": config.field_width,
                    "pages": grid.len(),
                    "tiles": counts,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                eprintln!(
                    "{} packed bytes, sha256 {}",
                    packed.bytes().len(),
                    packed.fingerprint()
                );
                counts.report();
            }
        }
        Command::Page { asset, number } => {
            let (_, grid) = open_grid(&asset, &config)?;
            let page = grid
                .page(number)
                .ok_or_else(|| beach_cli_error("page", BeachError::PageOutOfRange(number)))?;
            print!("{}", format_page(page));
        }
        Command::Rare {
            asset,
            from,
            back,
            exposed,
        } => {
            let (_, grid) = open_grid(&asset, &config)?;
            let skip = if exposed {
                TideForecast::at(tide::now_unix()).today
            } else {
                0
            };
            let direction = if back {
                Direction::Backward
            } else {
                Direction::Forward
            };
            match find_rare(&grid, from, direction, skip) {
                Some(page) => println!("{page}"),
                None => return Err(simple_cli_error("no rare sparkle found in that direction").into()),
            }
        }
        Command::Export {
            asset,
            output,
            from,
            to,
        } => {
            let (_, grid) = open_grid(&asset, &config)?;
            let file =
                File::create(&output).map_err(|e| io_cli_error("creating output file", &output, e))?;
            let records = grid
                .export_csv(file, from, to)
                .map_err(|e| beach_cli_error("exporting pages", e))?;
            eprintln!("Wrote {} records to {}", records, output.display());
        }
        Command::Tide { at } => {
            let forecast = TideForecast::at(at.unwrap_or_else(tide::now_unix));
            println!(
                "day {}: {} row{} hidden today, {} tomorrow",
                forecast.day,
                forecast.today,
                if forecast.today == 1 { "" } else { "s" },
                forecast.tomorrow
            );
        }
    }

    Ok(())
}
