//! Glyph image loading and resizing.

use std::path::Path;

use image::GrayImage;
use image::imageops::{self, FilterType};
use tracing::debug;

use crate::{RasterError, Result, THRESHOLD, binarize};

/// Load a glyph image and rasterize it to a binary grid of the given size.
///
/// The image is converted to 8-bit grayscale, binarized at [`THRESHOLD`],
/// then resized to exactly `(width, height)`. Nearest-neighbor sampling
/// keeps the resized pixels strictly 0 or 255.
pub fn rasterize_glyph(path: &Path, width: u32, height: u32) -> Result<GrayImage> {
    if width == 0 || height == 0 {
        return Err(RasterError::ZeroDimension { width, height });
    }

    debug!(path = %path.display(), width, height, "Rasterizing glyph image");

    let gray = image::open(path)?.to_luma8();
    let mono = binarize(&gray, THRESHOLD);
    Ok(imageops::resize(&mono, width, height, FilterType::Nearest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;
    use std::path::PathBuf;

    /// Write a grayscale PNG into `dir` and return its path.
    fn write_test_png(dir: &Path, name: &str, img: &GrayImage) -> PathBuf {
        let path = dir.join(name);
        img.save(&path).expect("failed to save test PNG");
        path
    }

    #[test]
    fn test_rasterize_output_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let img = GrayImage::from_pixel(32, 48, Luma([200]));
        let path = write_test_png(dir.path(), "a-glyph.png", &img);

        let result = rasterize_glyph(&path, 10, 15).unwrap();
        assert_eq!(result.dimensions(), (10, 15));
    }

    #[test]
    fn test_rasterize_output_is_binary() {
        let dir = tempfile::tempdir().unwrap();
        let mut img = GrayImage::new(16, 16);
        for y in 0..16 {
            for x in 0..16 {
                img.put_pixel(x, y, Luma([((x + y) * 8) as u8]));
            }
        }
        let path = write_test_png(dir.path(), "b-glyph.png", &img);

        let result = rasterize_glyph(&path, 8, 8).unwrap();
        for y in 0..8 {
            for x in 0..8 {
                let val = result.get_pixel(x, y).0[0];
                assert!(val == 0 || val == 255, "Pixel ({x}, {y}) = {val}");
            }
        }
    }

    #[test]
    fn test_rasterize_all_black_source() {
        let dir = tempfile::tempdir().unwrap();
        let img = GrayImage::from_pixel(20, 30, Luma([0]));
        let path = write_test_png(dir.path(), "c-glyph.png", &img);

        let result = rasterize_glyph(&path, 8, 1).unwrap();
        for x in 0..8 {
            assert_eq!(result.get_pixel(x, 0).0[0], 0);
        }
    }

    #[test]
    fn test_rasterize_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.png");
        let result = rasterize_glyph(&path, 8, 8);
        assert!(matches!(result, Err(RasterError::Image(_))));
    }

    #[test]
    fn test_rasterize_zero_dimension_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let img = GrayImage::from_pixel(4, 4, Luma([0]));
        let path = write_test_png(dir.path(), "d-glyph.png", &img);

        let result = rasterize_glyph(&path, 0, 8);
        assert!(matches!(
            result,
            Err(RasterError::ZeroDimension { width: 0, height: 8 })
        ));
    }
}
