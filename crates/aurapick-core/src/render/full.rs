//! Full-resolution rendering for the downloaded asset.

use super::composite::extract;
use super::{RenderError, Rendered};
use crate::decode::SourceImage;
use crate::encode::encode_rgb_image;
use crate::geometry::CropRect;
use crate::settings::RenderSettings;

/// Render a crop at its native source resolution.
///
/// No dimension cap applies: the output is exactly the snapped crop size
/// and pixels are copied, never resampled.
pub fn render_full_resolution(
    source: &SourceImage,
    rect: &CropRect,
    settings: &RenderSettings,
) -> Result<Rendered, RenderError> {
    let settings = settings.sanitized();
    let pixels = extract(source, rect)?;
    let bytes = encode_rgb_image(&pixels, settings.export_quality)?;

    let (width, height) = pixels.dimensions();
    Ok(Rendered::jpeg(bytes, width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_full_resolution_is_not_capped() {
        let source = SourceImage::from_rgba_image(RgbaImage::from_pixel(
            1500,
            1200,
            Rgba([200, 180, 160, 255]),
        ));
        let rect = CropRect::new(150.0, 0.0, 1200.0, 1200.0);

        let out = render_full_resolution(&source, &rect, &RenderSettings::default()).unwrap();
        assert_eq!((out.width, out.height), (1200, 1200));

        let decoded = image::load_from_memory(&out.bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (1200, 1200));
    }

    #[test]
    fn test_full_resolution_copies_exact_region() {
        // Left column black, the rest white
        let source = SourceImage::from_rgba_image(RgbaImage::from_fn(64, 32, |x, _| {
            if x < 32 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([255, 255, 255, 255])
            }
        }));
        let rect = CropRect::new(32.0, 0.0, 32.0, 32.0);

        let out = render_full_resolution(&source, &rect, &RenderSettings::default()).unwrap();
        let decoded = image::load_from_memory(&out.bytes).unwrap().to_rgb8();
        assert!(decoded.pixels().all(|p| p.0.iter().all(|&c| c > 240)));
    }

    #[test]
    fn test_full_resolution_rejects_nan() {
        let source = SourceImage::from_rgba_image(RgbaImage::new(10, 10));
        let rect = CropRect::new(0.0, f64::NAN, 5.0, 5.0);
        assert!(render_full_resolution(&source, &rect, &RenderSettings::default()).is_err());
    }
}
