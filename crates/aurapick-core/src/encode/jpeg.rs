//! JPEG encoding using the `image` crate's baseline encoder.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage};
use thiserror::Error;

/// Lowest accepted quality setting.
pub const MIN_QUALITY: u8 = 1;
/// Highest accepted quality setting.
pub const MAX_QUALITY: u8 = 100;

/// Errors that can occur during JPEG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// JPEG encoding failed
    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode RGB pixel data to JPEG bytes.
///
/// `pixels` holds 3 bytes per pixel in row-major order. `quality` is
/// clamped to `MIN_QUALITY..=MAX_QUALITY`.
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }

    let quality = quality.clamp(MIN_QUALITY, MAX_QUALITY);
    let mut buffer = Cursor::new(Vec::new());

    JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode an RGB buffer to JPEG bytes.
pub fn encode_rgb_image(image: &RgbImage, quality: u8) -> Result<Vec<u8>, EncodeError> {
    encode_jpeg(image.as_raw(), image.width(), image.height(), quality)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_jpeg_markers(bytes: &[u8]) {
        assert_eq!(&bytes[0..2], &[0xFF, 0xD8]);
        assert_eq!(&bytes[bytes.len() - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_encode_jpeg_basic() {
        let pixels = vec![255u8; 64 * 80 * 3];
        let jpeg = encode_jpeg(&pixels, 64, 80, 85).unwrap();
        assert_jpeg_markers(&jpeg);
    }

    #[test]
    fn test_encode_rgb_image() {
        let img = RgbImage::from_pixel(20, 10, image::Rgb([10, 200, 30]));
        let jpeg = encode_rgb_image(&img, 100).unwrap();
        assert_jpeg_markers(&jpeg);

        let decoded = image::load_from_memory(&jpeg).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (20, 10));
    }

    #[test]
    fn test_quality_clamping() {
        let pixels = vec![128u8; 8 * 8 * 3];
        assert!(encode_jpeg(&pixels, 8, 8, 0).is_ok());
        assert!(encode_jpeg(&pixels, 8, 8, 255).is_ok());
    }

    #[test]
    fn test_preview_quality_is_smaller_than_export_quality() {
        let img = RgbImage::from_fn(96, 96, |x, y| {
            image::Rgb([(x * 7 % 256) as u8, (y * 5 % 256) as u8, ((x ^ y) % 256) as u8])
        });
        let preview = encode_rgb_image(&img, 85).unwrap();
        let export = encode_rgb_image(&img, 100).unwrap();
        assert!(preview.len() < export.len());
    }

    #[test]
    fn test_invalid_pixel_data() {
        let pixels = vec![128u8; 99 * 100 * 3];
        let result = encode_jpeg(&pixels, 100, 100, 85);
        assert!(matches!(
            result,
            Err(EncodeError::InvalidPixelData {
                expected: 30000,
                actual: 29700
            })
        ));
    }

    #[test]
    fn test_zero_dimensions() {
        assert!(matches!(
            encode_jpeg(&[], 0, 10, 85),
            Err(EncodeError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            encode_jpeg(&[], 10, 0, 85),
            Err(EncodeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_single_pixel() {
        let jpeg = encode_jpeg(&[255, 0, 0], 1, 1, 85).unwrap();
        assert_jpeg_markers(&jpeg);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
