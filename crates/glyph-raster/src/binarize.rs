//! Threshold binarization for grayscale glyph images.

use image::{GrayImage, Luma};
use tracing::debug;

/// Binarize a grayscale image at the given threshold.
///
/// Pixels with values >= `threshold` become white (255), others become
/// black (0). Dimensions are preserved.
pub fn binarize(img: &GrayImage, threshold: u8) -> GrayImage {
    let (width, height) = img.dimensions();
    debug!(width, height, threshold, "Binarizing glyph image");

    GrayImage::from_fn(width, height, |x, y| {
        let val = img.get_pixel(x, y).0[0];
        Luma([if val >= threshold { 255 } else { 0 }])
    })
}
