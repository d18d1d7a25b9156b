//! Glyph rasterization for monochrome font tables.
//!
//! Loads a glyph image, converts it to 8-bit grayscale, binarizes it at a
//! fixed threshold, and resizes it to the configured glyph cell size.

pub mod binarize;
pub mod raster;

// Re-exports for convenience
pub use binarize::binarize;
pub use raster::rasterize_glyph;

/// Grayscale cutoff used to binarize glyph pixels. Values below it become
/// black (0), values at or above it become white (255).
pub const THRESHOLD: u8 = 128;

/// Errors that can occur while rasterizing a glyph image.
#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Glyph dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },
}

/// Result type alias for rasterizer operations.
pub type Result<T> = std::result::Result<T, RasterError>;
