//! Packed monochrome font table generation.
//!
//! Resolves glyph images by filename convention, packs binarized pixel rows
//! into 8-bit groups rendered as `X`/`_` bit-mask tokens, and emits a C
//! array literal covering an ASCII code range.

pub mod emit;
pub mod pack;
pub mod resolve;

// Re-exports for convenience
pub use emit::{TableConfig, generate_table, write_table};
pub use pack::{byte_to_token, pack_row};
pub use resolve::{char_key, scan_glyph_dir};

/// Token substituted for every byte group of a glyph with no source image.
pub const PLACEHOLDER_TOKEN: &str = "________";

/// Errors that can occur during table generation.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Glyph raster error: {0}")]
    Raster(#[from] glyph_raster::RasterError),
}

/// Result type alias for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
