//! Crop rectangles in source-pixel space.
//!
//! A [`CropRect`] keeps fractional coordinates so that the preview path and
//! the export path compute exactly the same geometry. Pixel access goes
//! through [`CropRect::to_pixels`], which snaps the rectangle onto the
//! source grid.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tolerance used when checking that a rectangle lies inside its source.
const BOUNDS_EPSILON: f64 = 1e-6;

/// Errors raised for crop geometry that cannot be rendered.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A coordinate or dimension is NaN or infinite.
    #[error("Crop rectangle has non-finite values: {0:?}")]
    NonFinite(CropRect),

    /// Width or height is zero or negative.
    #[error("Degenerate crop rectangle: {width}x{height}")]
    Degenerate { width: f64, height: f64 },

    /// The rectangle extends past the source image.
    #[error("Crop rectangle {rect:?} exceeds source bounds {source_width}x{source_height}")]
    OutOfBounds {
        rect: CropRect,
        source_width: u32,
        source_height: u32,
    },
}

/// A crop region in source-pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropRect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width of the region.
    pub width: f64,
    /// Height of the region.
    pub height: f64,
}

impl CropRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The rectangle covering the whole source.
    pub fn full(source_width: u32, source_height: u32) -> Self {
        Self::new(0.0, 0.0, source_width as f64, source_height as f64)
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Midpoint of the rectangle.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Shrink by `factor` around the rectangle's own center.
    pub fn scaled_about_center(&self, factor: f64) -> Self {
        let width = self.width * factor;
        let height = self.height * factor;
        Self {
            x: self.x + (self.width - width) / 2.0,
            y: self.y + (self.height - height) / 2.0,
            width,
            height,
        }
    }

    /// Coordinates relative to the source dimensions, as
    /// `(x / sw, y / sh, width / sw, height / sh)`.
    pub fn normalized(&self, source_width: u32, source_height: u32) -> (f64, f64, f64, f64) {
        let sw = source_width as f64;
        let sh = source_height as f64;
        (self.x / sw, self.y / sh, self.width / sw, self.height / sh)
    }

    /// Check that the rectangle can be rendered against a source of the
    /// given size.
    pub fn validate(&self, source_width: u32, source_height: u32) -> Result<(), GeometryError> {
        let values = [self.x, self.y, self.width, self.height];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(GeometryError::NonFinite(*self));
        }

        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(GeometryError::Degenerate {
                width: self.width,
                height: self.height,
            });
        }

        let sw = source_width as f64;
        let sh = source_height as f64;
        let inside = self.x >= -BOUNDS_EPSILON
            && self.y >= -BOUNDS_EPSILON
            && self.x + self.width <= sw + BOUNDS_EPSILON
            && self.y + self.height <= sh + BOUNDS_EPSILON;

        if !inside || source_width == 0 || source_height == 0 {
            return Err(GeometryError::OutOfBounds {
                rect: *self,
                source_width,
                source_height,
            });
        }

        Ok(())
    }

    /// Snap onto the source pixel grid.
    ///
    /// The origin is rounded and the size truncated, matching how a canvas
    /// sizes itself from fractional dimensions. The result is clamped to the
    /// source and is never smaller than 1x1.
    pub fn to_pixels(&self, source_width: u32, source_height: u32) -> PixelRect {
        let max_w = source_width.max(1);
        let max_h = source_height.max(1);

        let width = (self.width.max(0.0).trunc() as u32).clamp(1, max_w);
        let height = (self.height.max(0.0).trunc() as u32).clamp(1, max_h);

        let x = (self.x.max(0.0).round() as u32).min(max_w - width);
        let y = (self.y.max(0.0).round() as u32).min(max_h - height);

        PixelRect {
            x,
            y,
            width,
            height,
        }
    }
}

/// A crop region snapped to whole source pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_rect() {
        let rect = CropRect::full(4000, 3000);
        assert_eq!(rect, CropRect::new(0.0, 0.0, 4000.0, 3000.0));
    }

    #[test]
    fn test_scaled_about_center_keeps_midpoint() {
        let rect = CropRect::new(500.0, 0.0, 3000.0, 3000.0);
        let zoomed = rect.scaled_about_center(0.8);

        assert_eq!(zoomed.width, 2400.0);
        assert_eq!(zoomed.height, 2400.0);
        assert_eq!(zoomed.x, 800.0);
        assert_eq!(zoomed.y, 300.0);
        assert_eq!(zoomed.center(), rect.center());
    }

    #[test]
    fn test_normalized() {
        let rect = CropRect::new(800.0, 300.0, 2400.0, 2400.0);
        let (x, y, w, h) = rect.normalized(4000, 3000);
        assert!((x - 0.2).abs() < 1e-12);
        assert!((y - 0.1).abs() < 1e-12);
        assert!((w - 0.6).abs() < 1e-12);
        assert!((h - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_validate_accepts_inner_rect() {
        let rect = CropRect::new(10.0, 10.0, 50.0, 50.0);
        assert!(rect.validate(100, 100).is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_width() {
        let rect = CropRect::new(0.0, 0.0, 0.0, 50.0);
        assert!(matches!(
            rect.validate(100, 100),
            Err(GeometryError::Degenerate { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_nan() {
        let rect = CropRect::new(f64::NAN, 0.0, 10.0, 10.0);
        assert!(matches!(
            rect.validate(100, 100),
            Err(GeometryError::NonFinite(_))
        ));
    }

    #[test]
    fn test_validate_rejects_overflowing_rect() {
        let rect = CropRect::new(60.0, 0.0, 50.0, 50.0);
        assert!(matches!(
            rect.validate(100, 100),
            Err(GeometryError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_empty_source() {
        let rect = CropRect::new(0.0, 0.0, 1.0, 1.0);
        assert!(rect.validate(0, 0).is_err());
    }

    #[test]
    fn test_to_pixels_exact() {
        let rect = CropRect::new(800.0, 300.0, 2400.0, 2400.0);
        assert_eq!(
            rect.to_pixels(4000, 3000),
            PixelRect {
                x: 800,
                y: 300,
                width: 2400,
                height: 2400
            }
        );
    }

    #[test]
    fn test_to_pixels_truncates_size() {
        // 4:5 of a 1001x1000 landscape: width 800, x = 100.5
        let rect = CropRect::new(100.5, 0.0, 800.0, 1000.0);
        let px = rect.to_pixels(1001, 1000);
        assert_eq!(px.width, 800);
        assert_eq!(px.height, 1000);
        assert!(px.x + px.width <= 1001);
    }

    #[test]
    fn test_to_pixels_minimum_size() {
        let rect = CropRect::new(99.9, 99.9, 0.1, 0.1);
        let px = rect.to_pixels(100, 100);
        assert_eq!(px.width, 1);
        assert_eq!(px.height, 1);
        assert_eq!(px.x, 99);
        assert_eq!(px.y, 99);
    }
}
