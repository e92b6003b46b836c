//! Render settings for previews and exports.
//!
//! There is no configuration file: callers build a [`RenderSettings`] value
//! (or deserialize one from a plain JS object) and pass it along. Missing
//! fields take their defaults.

use serde::{Deserialize, Serialize};

use crate::encode::{MAX_QUALITY, MIN_QUALITY};

/// Longest preview edge sent to the analysis service.
pub const DEFAULT_MAX_PREVIEW_DIMENSION: u32 = 1024;
/// Preview JPEG quality (0.85 of maximum).
pub const DEFAULT_PREVIEW_QUALITY: u8 = 85;
/// Export JPEG quality.
pub const DEFAULT_EXPORT_QUALITY: u8 = MAX_QUALITY;

/// Filter type for image resizing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    #[default]
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Knobs for the preview and export renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderSettings {
    /// Cap on either preview dimension. Previews are never upscaled.
    pub max_preview_dimension: u32,
    /// JPEG quality for previews (1-100).
    pub preview_quality: u8,
    /// JPEG quality for the full-resolution export (1-100).
    pub export_quality: u8,
    /// Resampling used when a preview is downscaled. Exports are never
    /// resampled.
    pub preview_filter: FilterType,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            max_preview_dimension: DEFAULT_MAX_PREVIEW_DIMENSION,
            preview_quality: DEFAULT_PREVIEW_QUALITY,
            export_quality: DEFAULT_EXPORT_QUALITY,
            preview_filter: FilterType::Bilinear,
        }
    }
}

impl RenderSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp every field into its valid range.
    pub fn sanitized(self) -> Self {
        Self {
            max_preview_dimension: self.max_preview_dimension.max(1),
            preview_quality: self.preview_quality.clamp(MIN_QUALITY, MAX_QUALITY),
            export_quality: self.export_quality.clamp(MIN_QUALITY, MAX_QUALITY),
            ..self
        }
    }
}
