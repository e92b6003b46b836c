//! Shared compositing: cut the crop out, paint it over white, resample.

use image::imageops;
use image::{RgbImage, RgbaImage};

use super::RenderError;
use crate::decode::SourceImage;
use crate::geometry::CropRect;
use crate::settings::FilterType;

/// Largest surface, in pixels, the renderers agree to allocate.
///
/// Matches the 16384 x 16384 area limit browsers put on a canvas.
pub(crate) const MAX_SURFACE_PIXELS: u64 = 16_384 * 16_384;

/// Blend an RGBA buffer onto an opaque white background.
///
/// Fully opaque pixels are kept as they are and fully transparent pixels
/// become white.
pub fn flatten_onto_white(rgba: &RgbaImage) -> Result<RgbImage, RenderError> {
    let (width, height) = rgba.dimensions();
    let mut pixels = Vec::with_capacity(width as usize * height as usize * 3);

    for px in rgba.as_raw().chunks_exact(4) {
        let alpha = px[3] as u32;
        for &channel in &px[..3] {
            let blended = (channel as u32 * alpha + 255 * (255 - alpha) + 127) / 255;
            pixels.push(blended as u8);
        }
    }

    RgbImage::from_raw(width, height, pixels).ok_or(RenderError::Surface { width, height })
}

/// Cut `rect` out of `source` at its snapped pixel size, over white.
///
/// The rectangle is validated first; nothing is drawn for degenerate
/// geometry.
pub(crate) fn extract(source: &SourceImage, rect: &CropRect) -> Result<RgbImage, RenderError> {
    let (source_width, source_height) = source.dimensions();
    rect.validate(source_width, source_height)?;

    let px = rect.to_pixels(source_width, source_height);
    ensure_surface(px.width, px.height)?;

    let region = imageops::crop_imm(source.as_rgba(), px.x, px.y, px.width, px.height).to_image();
    flatten_onto_white(&region)
}

/// Render `rect` of `source` into an opaque `out_width` x `out_height`
/// buffer.
///
/// Resampling is skipped when the snapped crop already has the output size.
pub(crate) fn compose(
    source: &SourceImage,
    rect: &CropRect,
    out_width: u32,
    out_height: u32,
    filter: FilterType,
) -> Result<RgbImage, RenderError> {
    ensure_surface(out_width, out_height)?;
    let flat = extract(source, rect)?;

    if flat.dimensions() == (out_width, out_height) {
        return Ok(flat);
    }

    Ok(imageops::resize(
        &flat,
        out_width,
        out_height,
        filter.to_image_filter(),
    ))
}

fn ensure_surface(width: u32, height: u32) -> Result<(), RenderError> {
    let area = width as u64 * height as u64;
    if area == 0 || area > MAX_SURFACE_PIXELS {
        return Err(RenderError::Surface { width, height });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GeometryError;
    use image::Rgba;

    fn quadrant_source() -> SourceImage {
        // 4x2: left half red, right half blue
        SourceImage::from_rgba_image(RgbaImage::from_fn(4, 2, |x, _| {
            if x < 2 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 255, 255])
            }
        }))
    }

    #[test]
    fn test_flatten_opaque_is_unchanged() {
        let rgba = RgbaImage::from_pixel(2, 2, Rgba([12, 34, 56, 255]));
        let rgb = flatten_onto_white(&rgba).unwrap();
        assert_eq!(rgb.get_pixel(1, 1).0, [12, 34, 56]);
    }

    #[test]
    fn test_flatten_transparent_is_white() {
        let rgba = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 0]));
        let rgb = flatten_onto_white(&rgba).unwrap();
        assert_eq!(rgb.get_pixel(0, 0).0, [255, 255, 255]);
    }

    #[test]
    fn test_flatten_half_alpha_blends() {
        let rgba = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 128]));
        let rgb = flatten_onto_white(&rgba).unwrap();
        let v = rgb.get_pixel(0, 0).0[0];
        assert!((126..=128).contains(&v), "got {v}");
    }

    #[test]
    fn test_extract_keeps_snapped_crop_size() {
        let source = quadrant_source();
        let rect = CropRect::new(0.6, 0.0, 2.4, 2.0);
        let out = extract(&source, &rect).unwrap();
        assert_eq!(out.dimensions(), (2, 2));
        assert_eq!(out.get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(out.get_pixel(1, 0).0, [0, 0, 255]);
    }

    #[test]
    fn test_compose_takes_requested_region() {
        let source = quadrant_source();
        let rect = CropRect::new(2.0, 0.0, 2.0, 2.0);
        let out = compose(&source, &rect, 2, 2, FilterType::Bilinear).unwrap();
        assert_eq!(out.dimensions(), (2, 2));
        assert_eq!(out.get_pixel(0, 0).0, [0, 0, 255]);
    }

    #[test]
    fn test_compose_resamples_to_output_size() {
        let source = quadrant_source();
        let out = compose(&source, &CropRect::full(4, 2), 2, 1, FilterType::Nearest).unwrap();
        assert_eq!(out.dimensions(), (2, 1));
    }

    #[test]
    fn test_compose_rejects_degenerate_rect() {
        let source = quadrant_source();
        let rect = CropRect::new(0.0, 0.0, 0.0, 2.0);
        let result = compose(&source, &rect, 1, 1, FilterType::Bilinear);
        assert!(matches!(
            result,
            Err(RenderError::Geometry(GeometryError::Degenerate { .. }))
        ));
    }

    #[test]
    fn test_compose_rejects_empty_surface() {
        let source = quadrant_source();
        let result = compose(&source, &CropRect::full(4, 2), 0, 2, FilterType::Bilinear);
        assert!(matches!(result, Err(RenderError::Surface { width: 0, .. })));
    }

    #[test]
    fn test_surface_limit() {
        assert!(ensure_surface(16_384, 16_384).is_ok());
        assert!(ensure_surface(16_385, 16_384).is_err());
    }
}
