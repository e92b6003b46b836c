//! Vertical anchoring for height-constrained crops.

use serde::{Deserialize, Serialize};

/// Where a height-constrained crop sits inside the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Equal margins above and below.
    #[default]
    Center,
    /// Anchored to the top edge.
    Top,
    /// Anchored to the bottom edge.
    Bottom,
}

impl Alignment {
    /// Parse a free-form alignment directive.
    ///
    /// `"top"` and `"bottom"` (case-insensitive, surrounding whitespace
    /// ignored) select their edge. Anything else, including `"center"`,
    /// yields [`Alignment::Center`].
    pub fn from_directive(directive: &str) -> Self {
        let directive = directive.trim();
        if directive.eq_ignore_ascii_case("top") {
            Alignment::Top
        } else if directive.eq_ignore_ascii_case("bottom") {
            Alignment::Bottom
        } else {
            Alignment::Center
        }
    }

    /// The directive string for this alignment.
    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Center => "center",
            Alignment::Top => "top",
            Alignment::Bottom => "bottom",
        }
    }
}
