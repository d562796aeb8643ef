//! Image preparation: decoding, grayscale conversion, and the binary edge map.
//!
//! Both detectors run the same blur + Canny pass; the outer detector on the
//! whole photo, the artwork detector on the card crop.

use image::{DynamicImage, GrayImage, ImageError};
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;

use crate::detector::EdgeConfig;

/// Decode an encoded image buffer (PNG, JPEG, WebP, BMP).
pub fn decode(bytes: &[u8]) -> Result<DynamicImage, ImageError> {
    image::load_from_memory(bytes)
}

/// Luma conversion used by every detector.
pub fn to_gray(image: &DynamicImage) -> GrayImage {
    image.to_luma8()
}

/// Smooth the image and run Canny, producing a 0/255 edge map.
///
/// A non-positive `blur_sigma` skips the smoothing pass.
pub fn edge_map(gray: &GrayImage, config: &EdgeConfig) -> GrayImage {
    if config.blur_sigma > 0.0 {
        let smoothed = gaussian_blur_f32(gray, config.blur_sigma);
        canny(&smoothed, config.canny_low, config.canny_high)
    } else {
        canny(gray, config.canny_low, config.canny_high)
    }
}
