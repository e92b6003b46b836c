//! Output and error types for the renderers.

use thiserror::Error;

use crate::encode::EncodeError;
use crate::geometry::GeometryError;
use crate::variation::JPEG_MIME;

/// Errors raised while rendering a crop.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The crop rectangle cannot be rendered against this source.
    #[error("Invalid crop geometry: {0}")]
    Geometry(#[from] GeometryError),

    /// No drawing surface could be created for the requested output.
    #[error("Cannot create a {width}x{height} drawing surface")]
    Surface { width: u32, height: u32 },

    /// The composed pixels could not be encoded.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// An encoded crop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Encoded image bytes.
    pub bytes: Vec<u8>,
    /// MIME type of `bytes`.
    pub mime_type: &'static str,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
}

impl Rendered {
    pub(crate) fn jpeg(bytes: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            bytes,
            mime_type: JPEG_MIME,
            width,
            height,
        }
    }
}
