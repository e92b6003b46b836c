//! The structured judgement returned for one photo.

use serde::{Deserialize, Serialize};

use crate::geometry::{Alignment, CropRect};
use crate::naming::export_file_name;
use crate::pipeline::export_rect;
use crate::variation::ExportPlan;

/// Tag buckets used to group photos in the results gallery.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VibeCategory {
    /// Visual style, e.g. "Dark Feminine".
    pub aesthetic: String,
    /// Personality or slang tag, e.g. "Face Card".
    pub genz: String,
    /// Context, e.g. "Fit Check".
    pub moment: String,
}

/// The analysis service's verdict for one photo.
///
/// Every field is optional on the wire; missing values take their defaults
/// so a partial answer still yields a usable export.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Verdict {
    /// Overall score, 0-100.
    pub aesthetic_score: f64,
    pub vibes: Vec<String>,
    pub vibe_category: Option<VibeCategory>,
    /// Where the photo works best, e.g. "PFP" or "Story".
    pub best_for: String,
    pub vibe_description: String,
    pub critique: String,
    pub captions: Vec<String>,
    /// Label of the winning variation. Untrusted text.
    pub best_crop: String,
    /// Alignment directive for the export. Untrusted text.
    pub crop_alignment: String,
    pub crop_reason: String,
    pub crop_suggestion: String,
    /// "1:1", "4:5" or "9:16".
    pub best_fit_format: String,
    pub hashtags: Vec<String>,
}

impl Verdict {
    /// Crop parameters recovered from `best_crop`.
    pub fn plan(&self) -> ExportPlan {
        ExportPlan::parse(&self.best_crop)
    }

    /// Alignment directive, falling back to center.
    pub fn alignment(&self) -> Alignment {
        Alignment::from_directive(&self.crop_alignment)
    }

    /// Source rectangle of the chosen crop for a source of the given size.
    pub fn export_rect(&self, source_width: u32, source_height: u32) -> CropRect {
        export_rect(
            source_width,
            source_height,
            &self.best_crop,
            &self.crop_alignment,
        )
    }

    /// First vibe tag, if any.
    pub fn primary_vibe(&self) -> Option<&str> {
        self.vibes
            .iter()
            .map(|v| v.trim())
            .find(|v| !v.is_empty())
    }

    /// Download name for the exported crop.
    pub fn export_file_name(&self) -> String {
        export_file_name(self.primary_vibe())
    }
}
