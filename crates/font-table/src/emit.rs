//! Font table assembly and output.
//!
//! Walks an ASCII code range in ascending order, packs each resolved glyph
//! (or a placeholder), and renders the table as a C array literal suitable
//! for embedding in firmware source.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use glyph_raster::rasterize_glyph;
use tracing::debug;

use crate::{PLACEHOLDER_TOKEN, Result, pack::pack_row, resolve::char_key};

/// Fixed opening of the emitted array declaration. The `40 * 4` element
/// size is part of the legacy format and does not track the configured
/// glyph dimensions.
const TABLE_OPEN: &str = "const uint8_t font_table[][40 * 4] = {\n";

/// Header identifiers emitted into every entry. The consuming firmware's
/// font macros are named for the 6x8 font regardless of the configured
/// glyph size, so these stay fixed.
const WIDTH_IDENT: &str = "f6x8_MONO_WIDTH";
const HEIGHT_IDENT: &str = "f6x8_MONO_HEIGHT";

/// Glyph cell size and ASCII code range for one table run.
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Glyph cell width in pixels.
    pub width: u32,
    /// Glyph cell height in pixels.
    pub height: u32,
    /// First ASCII code emitted, inclusive.
    pub ascii_start: u8,
    /// Last ASCII code emitted, inclusive.
    pub ascii_end: u8,
}

impl TableConfig {
    /// Number of byte-group tokens per bitmap row.
    fn tokens_per_row(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }
}

/// Build the all-blank bitmap substituted for characters with no image.
fn placeholder_bitmap(config: &TableConfig) -> Vec<Vec<String>> {
    let row = vec![PLACEHOLDER_TOKEN.to_string(); config.tokens_per_row()];
    vec![row; config.height as usize]
}

/// Rasterize one glyph file and pack every pixel row into tokens.
fn glyph_bitmap(path: &Path, config: &TableConfig) -> Result<Vec<Vec<String>>> {
    let img = rasterize_glyph(path, config.width, config.height)?;

    let mut bitmap = Vec::with_capacity(img.height() as usize);
    for y in 0..img.height() {
        let row: Vec<u8> = (0..img.width()).map(|x| img.get_pixel(x, y).0[0]).collect();
        bitmap.push(pack_row(&row));
    }
    Ok(bitmap)
}

/// Generate the complete font table text for the given glyph images.
///
/// Emits one entry per ASCII code in `ascii_start..=ascii_end`, in
/// ascending order. A code whose `char_key` has no entry in `images` gets
/// the placeholder bitmap. Identical inputs and config produce identical
/// output.
pub fn generate_table(
    images: &BTreeMap<String, PathBuf>,
    config: &TableConfig,
) -> Result<String> {
    let mut out = String::from(TABLE_OPEN);

    for code in config.ascii_start..=config.ascii_end {
        let key = char_key(char::from(code));

        let bitmap = match images.get(&key) {
            Some(path) => {
                debug!(code, key = %key, path = %path.display(), "Packing glyph");
                glyph_bitmap(path, config)?
            }
            None => {
                debug!(code, key = %key, "No glyph image, using placeholder");
                placeholder_bitmap(config)
            }
        };

        out.push_str(&format!("// 0x{code:02X} (ASCII '{key}')\n"));
        out.push_str(" {\n");
        out.push_str(&format!("   {WIDTH_IDENT},\n   {HEIGHT_IDENT},\n"));
        for row in &bitmap {
            out.push_str("   ");
            out.push_str(&row.join(", "));
            out.push_str(",\n");
        }
        out.push_str("  },\n");
    }

    out.push_str("};\n");
    Ok(out)
}

/// Write the finished table text, overwriting any existing file.
pub fn write_table(path: &Path, table: &str) -> std::io::Result<()> {
    debug!(path = %path.display(), bytes = table.len(), "Writing font table");
    fs::write(path, table)
}
