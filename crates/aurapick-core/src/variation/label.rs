//! Mapping untrusted "best crop" labels back to crop geometry.
//!
//! The analysis service is asked to answer with one of the table labels,
//! but its wording is not guaranteed. Labels are therefore read by token:
//!
//! - `"4:5"`, `"1:1"`, `"9:16"` select the ratio (checked in that order).
//!   No ratio token means no crop.
//! - `"Zoomed"` turns on the zoom modifier and pins the alignment to center.
//! - `"Upper"` pins the alignment to top.
//!
//! Any pinned alignment is carried as an explicit
//! [`ExportPlan::alignment_override`] and wins over the separately supplied
//! directive. Parsing never fails.

use serde::{Deserialize, Serialize};

use super::{CropKind, RATIO_1_1, RATIO_4_5, RATIO_9_16};
use crate::geometry::{Alignment, CropRequest};

const RATIO_TOKENS: [(&str, f64); 3] = [
    ("4:5", RATIO_4_5),
    ("1:1", RATIO_1_1),
    ("9:16", RATIO_9_16),
];

/// Crop parameters recovered from a best-crop label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPlan {
    /// Target ratio, `None` for the full frame.
    pub target_ratio: Option<f64>,
    /// Whether the zoom modifier applies.
    pub zoom: bool,
    /// Alignment fixed by the label itself, if any.
    pub alignment_override: Option<Alignment>,
}

impl ExportPlan {
    /// Read a label. Unknown labels produce the full-frame plan.
    pub fn parse(label: &str) -> Self {
        let target_ratio = RATIO_TOKENS
            .iter()
            .find(|(token, _)| label.contains(token))
            .map(|&(_, ratio)| ratio);

        let zoom = label.contains("Zoomed");
        let alignment_override = if zoom {
            Some(Alignment::Center)
        } else if label.contains("Upper") {
            Some(Alignment::Top)
        } else {
            None
        };

        Self {
            target_ratio,
            zoom,
            alignment_override,
        }
    }

    /// Whether the label carried any geometry at all.
    ///
    /// `"Original"` is recognised even though it has no ratio token.
    pub fn is_recognized(label: &str) -> bool {
        label.contains("Original") || RATIO_TOKENS.iter().any(|(token, _)| label.contains(token))
    }

    /// The alignment that applies once the directive is taken into account.
    pub fn alignment(&self, directive: Alignment) -> Alignment {
        self.alignment_override.unwrap_or(directive)
    }

    /// Build the crop request, using `directive` unless the label pins the
    /// alignment.
    pub fn request(&self, directive: Alignment) -> CropRequest {
        CropRequest::new(self.target_ratio, self.alignment(directive), self.zoom)
    }
}

impl From<CropKind> for ExportPlan {
    fn from(kind: CropKind) -> Self {
        Self::parse(kind.label())
    }
}
