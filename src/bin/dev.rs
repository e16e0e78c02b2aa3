//! windrose - Development entry point
//!
//! Loads a CSV file, bins it with the default configuration and prints the
//! frequency table plus a geometry summary. For exercising the crate end to
//! end against real data; not part of the library surface.
//!
//! Usage:
//! ```bash
//! cargo run --bin dev -- observations.csv [direction_field] [magnitude_field]
//! ```

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use windrose::{build_bars, table, RoseStyle, TableConfig};

fn main() -> Result<()> {
    println!("=== windrose - Development Mode ===\n");

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        bail!("usage: dev <csv> [direction_field] [magnitude_field]");
    }
    let path = &args[1];

    let mut config = TableConfig::default();
    if let Some(field) = args.get(2) {
        config.direction_field = field.clone();
    }
    if let Some(field) = args.get(3) {
        config.magnitude_field = field.clone();
    }

    println!("Configuration:");
    println!("  File: {}", path);
    println!("  Direction field: {}", config.direction_field);
    println!("  Magnitude field: {}", config.magnitude_field);
    println!("  Sectors: {}", config.sectors);
    println!();

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.into()))
        .with_context(|| format!("failed to open {}", path))?
        .finish()
        .with_context(|| format!("failed to read {}", path))?;
    println!("Loaded {} rows\n", df.height());

    let freq = table(&df, &config)?;
    println!(
        "Frequency table ({} sectors x {} bins, {} samples retained):",
        freq.n_sectors(),
        freq.n_bins(),
        freq.retained()
    );
    println!("{}", freq);

    let rose = build_bars(&freq, &RoseStyle::default())?;
    println!(
        "Geometry: {} bars, outer radius {}",
        rose.bars.len(),
        rose.max_radius
    );

    println!("\n=== Done ===");
    Ok(())
}
