//! Interactive run configuration.
//!
//! Replaces ad-hoc global settings with a single value built once from
//! console prompts and handed to the pipeline.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, bail};

/// First ASCII code emitted into the table ('0').
pub const ASCII_START: u8 = 0x30;

/// Last ASCII code emitted into the table (':').
pub const ASCII_END: u8 = 0x3A;

/// Settings for one conversion run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Glyph cell width in pixels.
    pub width: u32,
    /// Glyph cell height in pixels.
    pub height: u32,
    /// Path of the generated table file.
    pub output: PathBuf,
}

impl RunConfig {
    /// Build a config from interactive prompts.
    ///
    /// Reads two whitespace-separated integers (width, height) and then an
    /// output file name. Malformed numbers, zero dimensions, or an empty
    /// file name are errors; nothing is retried.
    pub fn from_input(input: &mut impl BufRead, output: &mut impl Write) -> anyhow::Result<Self> {
        write!(output, "Enter width and height separated by space: ")?;
        output.flush()?;
        let mut line = String::new();
        input.read_line(&mut line)?;
        let (width, height) = parse_dimensions(&line)?;

        write!(output, "Enter output file name: ")?;
        output.flush()?;
        let mut name = String::new();
        input.read_line(&mut name)?;
        let name = name.trim();
        if name.is_empty() {
            bail!("Output file name must not be empty");
        }

        Ok(Self {
            width,
            height,
            output: PathBuf::from(name),
        })
    }
}

/// Parse "width height" from one input line.
fn parse_dimensions(line: &str) -> anyhow::Result<(u32, u32)> {
    let mut parts = line.split_whitespace();
    let width: u32 = parts
        .next()
        .context("Missing width")?
        .parse()
        .context("Width must be an integer")?;
    let height: u32 = parts
        .next()
        .context("Missing height")?
        .parse()
        .context("Height must be an integer")?;

    if width == 0 || height == 0 {
        bail!("Width and height must be non-zero, got {width}x{height}");
    }
    Ok((width, height))
}
