//! Crop rectangle resolution.
//!
//! Given source dimensions and a target aspect ratio, only one dimension is
//! ever cropped:
//!
//! - Source wider than the target: the width is cut, centered horizontally.
//!   Alignment has no effect because the full height is kept.
//! - Source taller than (or exactly as wide as) the target: the height is
//!   cut and the [`Alignment`] decides where the band sits.
//!
//! The zoom modifier then shrinks the result by [`ZOOM_FACTOR`] around its
//! own center.

use serde::{Deserialize, Serialize};

use super::{Alignment, CropRect};

/// Shrink factor applied by the zoom modifier.
pub const ZOOM_FACTOR: f64 = 0.8;

/// Everything needed to derive a crop from a source image.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropRequest {
    /// Target width/height ratio. `None` keeps the full frame.
    pub target_ratio: Option<f64>,
    /// Anchoring for height-constrained crops.
    pub alignment: Alignment,
    /// Apply the zoom modifier after cropping.
    pub zoom: bool,
}

impl CropRequest {
    pub fn new(target_ratio: Option<f64>, alignment: Alignment, zoom: bool) -> Self {
        Self {
            target_ratio,
            alignment,
            zoom,
        }
    }

    /// A request that keeps the whole frame.
    pub fn full_frame() -> Self {
        Self::default()
    }
}

/// Compute the crop rectangle for a target ratio and alignment.
///
/// A `None` ratio returns the full source rectangle regardless of
/// alignment. Inputs are expected to be positive and finite; use
/// [`CropRect::validate`] before rendering a result.
pub fn resolve(
    source_width: u32,
    source_height: u32,
    target_ratio: Option<f64>,
    alignment: Alignment,
) -> CropRect {
    let Some(target_ratio) = target_ratio else {
        return CropRect::full(source_width, source_height);
    };

    let sw = source_width as f64;
    let sh = source_height as f64;
    let source_ratio = sw / sh;

    if source_ratio > target_ratio {
        let width = sh * target_ratio;
        CropRect::new((sw - width) / 2.0, 0.0, width, sh)
    } else {
        let height = sw / target_ratio;
        let y = match alignment {
            Alignment::Top => 0.0,
            Alignment::Bottom => sh - height,
            Alignment::Center => (sh - height) / 2.0,
        };
        CropRect::new(0.0, y, sw, height)
    }
}

/// Compute the crop rectangle for a full [`CropRequest`], applying the zoom
/// modifier when requested.
///
/// Zoom only applies to actual crops: a full-frame request always returns
/// the full source.
pub fn resolve_request(source_width: u32, source_height: u32, request: &CropRequest) -> CropRect {
    let rect = resolve(
        source_width,
        source_height,
        request.target_ratio,
        request.alignment,
    );

    if request.zoom && request.target_ratio.is_some() {
        rect.scaled_about_center(ZOOM_FACTOR)
    } else {
        rect
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
