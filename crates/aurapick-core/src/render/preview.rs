//! Low-resolution previews for the analysis service.

use super::composite::compose;
use super::{RenderError, Rendered};
use crate::decode::SourceImage;
use crate::encode::encode_rgb_image;
use crate::geometry::CropRect;
use crate::settings::RenderSettings;

/// Calculate preview dimensions for a crop of `width` x `height` pixels.
///
/// If either side exceeds `max_dimension` the crop is scaled down,
/// preserving aspect ratio, so that the longer side equals
/// `max_dimension`. Crops that already fit are returned unchanged; previews
/// are never upscaled.
pub fn preview_dimensions(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    let max_dimension = max_dimension.max(1);
    if width <= max_dimension && height <= max_dimension {
        return (width, height);
    }

    let scale = max_dimension as f64 / width.max(height) as f64;
    let scaled = |side: u32| ((side as f64 * scale).round() as u32).clamp(1, max_dimension);
    (scaled(width), scaled(height))
}

/// Render a crop as a downsized JPEG preview.
///
/// # Errors
///
/// Fails on degenerate geometry, when no surface can be allocated, or when
/// encoding fails. The source image is never modified.
pub fn render_preview(
    source: &SourceImage,
    rect: &CropRect,
    settings: &RenderSettings,
) -> Result<Rendered, RenderError> {
    let settings = settings.sanitized();
    let px = rect.to_pixels(source.width(), source.height());
    let cap = settings.max_preview_dimension;
    let (width, height) = preview_dimensions(px.width, px.height, cap);

    let pixels = compose(source, rect, width, height, settings.preview_filter)?;
    let bytes = encode_rgb_image(&pixels, settings.preview_quality)?;

    Ok(Rendered::jpeg(bytes, width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn solid_source(width: u32, height: u32) -> SourceImage {
        let pixels = RgbaImage::from_pixel(width, height, Rgba([40, 90, 160, 255]));
        SourceImage::from_rgba_image(pixels)
    }

    #[test]
    fn test_preview_dimensions_within_cap() {
        assert_eq!(preview_dimensions(800, 600, 1024), (800, 600));
        assert_eq!(preview_dimensions(1024, 1024, 1024), (1024, 1024));
    }

    #[test]
    fn test_preview_dimensions_landscape() {
        assert_eq!(preview_dimensions(4000, 3000, 1024), (1024, 768));
    }

    #[test]
    fn test_preview_dimensions_portrait() {
        assert_eq!(preview_dimensions(2400, 3000, 1024), (819, 1024));
    }

    #[test]
    fn test_preview_dimensions_square_zoom() {
        assert_eq!(preview_dimensions(2400, 2400, 1024), (1024, 1024));
    }

    #[test]
    fn test_preview_dimensions_extreme_strip() {
        let (w, h) = preview_dimensions(10_000, 3, 1024);
        assert_eq!(w, 1024);
        assert_eq!(h, 1);
    }

    #[test]
    fn test_render_preview_small_crop_keeps_size() {
        let source = solid_source(200, 100);
        let rect = CropRect::new(50.0, 0.0, 100.0, 100.0);
        let preview = render_preview(&source, &rect, &RenderSettings::default()).unwrap();

        assert_eq!((preview.width, preview.height), (100, 100));
        assert_eq!(preview.mime_type, "image/jpeg");

        let decoded = image::load_from_memory(&preview.bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (100, 100));
    }

    #[test]
    fn test_render_preview_downscales() {
        let source = solid_source(300, 200);
        let mut settings = RenderSettings::default();
        settings.max_preview_dimension = 60;

        let preview = render_preview(&source, &CropRect::full(300, 200), &settings).unwrap();
        assert_eq!((preview.width, preview.height), (60, 40));
    }

    #[test]
    fn test_render_preview_transparent_source_is_white() {
        let transparent = RgbaImage::from_pixel(16, 16, Rgba([0, 0, 0, 0]));
        let source = SourceImage::from_rgba_image(transparent);
        let preview = render_preview(&source, &CropRect::full(16, 16), &RenderSettings::default())
            .unwrap();

        let decoded = image::load_from_memory(&preview.bytes).unwrap().to_rgb8();
        let px = decoded.get_pixel(8, 8).0;
        assert!(px.iter().all(|&c| c > 245), "expected white, got {px:?}");
    }

    #[test]
    fn test_render_preview_rejects_out_of_bounds() {
        let source = solid_source(100, 100);
        let rect = CropRect::new(50.0, 50.0, 80.0, 80.0);
        let result = render_preview(&source, &rect, &RenderSettings::default());
        assert!(matches!(result, Err(RenderError::Geometry(_))));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
