//! The fixed set of crop variations sent for analysis.
//!
//! The analysis service picks its "best crop" from these labels, so the
//! labels and their order are part of the contract with it:
//!
//! | # | Label | Ratio | Alignment | Zoom |
//! |---|-------|-------|-----------|------|
//! | 1 | `Original` | none | center | no |
//! | 2 | `4:5 Center` | 4/5 | center | no |
//! | 3 | `4:5 Upper` | 4/5 | top | no |
//! | 4 | `1:1 Zoomed` | 1/1 | center | yes |
//! | 5 | `9:16 Story` | 9/16 | center | no |
//!
//! Adding or removing a variation only touches [`CropKind`]; the rectangle
//! math in [`crate::geometry`] stays the same.

mod label;

use serde::{Deserialize, Serialize};

use crate::geometry::{Alignment, CropRect, CropRequest};

pub use label::ExportPlan;

/// MIME type of every rendered variation and export.
pub const JPEG_MIME: &str = "image/jpeg";

/// Ratio of the portrait feed crop.
pub const RATIO_4_5: f64 = 4.0 / 5.0;
/// Ratio of the square crop.
pub const RATIO_1_1: f64 = 1.0;
/// Ratio of the story crop.
pub const RATIO_9_16: f64 = 9.0 / 16.0;

/// One entry of the variation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CropKind {
    #[serde(rename = "Original")]
    Original,
    #[serde(rename = "4:5 Center")]
    FourFiveCenter,
    #[serde(rename = "4:5 Upper")]
    FourFiveUpper,
    #[serde(rename = "1:1 Zoomed")]
    SquareZoomed,
    #[serde(rename = "9:16 Story")]
    NineSixteenStory,
}

impl CropKind {
    /// All variations in the order they are rendered and presented.
    pub const ALL: [CropKind; 5] = [
        CropKind::Original,
        CropKind::FourFiveCenter,
        CropKind::FourFiveUpper,
        CropKind::SquareZoomed,
        CropKind::NineSixteenStory,
    ];

    /// The label shown to the analysis service and the user.
    pub fn label(self) -> &'static str {
        match self {
            CropKind::Original => "Original",
            CropKind::FourFiveCenter => "4:5 Center",
            CropKind::FourFiveUpper => "4:5 Upper",
            CropKind::SquareZoomed => "1:1 Zoomed",
            CropKind::NineSixteenStory => "9:16 Story",
        }
    }

    /// The crop request this variation renders with.
    pub fn request(self) -> CropRequest {
        match self {
            CropKind::Original => CropRequest::full_frame(),
            CropKind::FourFiveCenter => CropRequest::new(Some(RATIO_4_5), Alignment::Center, false),
            CropKind::FourFiveUpper => CropRequest::new(Some(RATIO_4_5), Alignment::Top, false),
            CropKind::SquareZoomed => CropRequest::new(Some(RATIO_1_1), Alignment::Center, true),
            CropKind::NineSixteenStory => {
                CropRequest::new(Some(RATIO_9_16), Alignment::Center, false)
            }
        }
    }

    /// Exact label lookup. Use [`ExportPlan::parse`] for untrusted labels.
    pub fn from_label(label: &str) -> Option<CropKind> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }

    /// All labels in table order.
    pub fn labels() -> [&'static str; 5] {
        Self::ALL.map(CropKind::label)
    }
}

impl std::fmt::Display for CropKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A rendered crop variation.
#[derive(Debug, Clone, PartialEq)]
pub struct Variation {
    /// Which table entry produced this variation.
    pub kind: CropKind,
    /// Encoded image bytes.
    pub bytes: Vec<u8>,
    /// MIME type of `bytes`.
    pub mime_type: &'static str,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Source region the variation was rendered from.
    pub rect: CropRect,
}

impl Variation {
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}
