//! Crate-level error type for the per-photo pipeline.

use thiserror::Error;

use crate::decode::DecodeError;
use crate::render::RenderError;

/// Why a photo could not be processed.
///
/// Each photo's pipeline fails independently; nothing here is retried.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The uploaded bytes could not be decoded.
    #[error("Cannot decode image: {0}")]
    Decode(#[from] DecodeError),

    /// One crop could not be rendered. No partial output is returned.
    #[error("Failed to render '{label}': {source}")]
    Render {
        label: &'static str,
        #[source]
        source: RenderError,
    },
}

impl ProcessError {
    pub(crate) fn render(label: &'static str, source: RenderError) -> Self {
        ProcessError::Render { label, source }
    }

    /// Whether the failure happened before any geometry was computed.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, ProcessError::Decode(_))
    }
}
