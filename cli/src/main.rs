//! Console entry point: glyph PNG folder in, packed font table out.
//!
//! Prompts for the glyph cell size and output file, scans the current
//! directory for `<char>-*.png` images, and writes the generated table.
//! Every failure aborts the run; there is no partial-output recovery.

mod config;

use std::io;

use font_table::{TableConfig, generate_table, scan_glyph_dir, write_table};
use tracing_subscriber::EnvFilter;

use crate::config::{ASCII_END, ASCII_START, RunConfig};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = RunConfig::from_input(&mut io::stdin().lock(), &mut io::stdout())?;
    tracing::info!(
        width = config.width,
        height = config.height,
        output = %config.output.display(),
        "Starting font table generation"
    );

    let glyph_dir = std::env::current_dir()?;
    let images = scan_glyph_dir(&glyph_dir)?;
    tracing::info!(
        count = images.len(),
        "Available glyph images: {:?}",
        images.keys().collect::<Vec<_>>()
    );

    let table_config = TableConfig {
        width: config.width,
        height: config.height,
        ascii_start: ASCII_START,
        ascii_end: ASCII_END,
    };
    let table = generate_table(&images, &table_config)?;
    write_table(&config.output, &table)?;

    tracing::info!(path = %config.output.display(), "Font table generated");
    Ok(())
}
