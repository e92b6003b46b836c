//! AuraPick Core - crop variations and full-resolution export
//!
//! This crate holds the per-photo processing behind AuraPick: decoding an
//! upload, rendering the fixed table of crop variations sent for aesthetic
//! analysis, and re-rendering the winning crop at native resolution.
//!
//! - [`geometry`]: aspect-ratio crop resolution with alignment and zoom
//! - [`variation`]: the variation table and best-crop label parsing
//! - [`decode`] / [`encode`]: bytes in, JPEG bytes out
//! - [`render`]: preview and full-resolution rendering
//! - [`pipeline`]: the two per-photo entry points
//! - [`analysis`]: request and response shapes for the analysis service

pub mod analysis;
pub mod decode;
pub mod encode;
pub mod error;
pub mod geometry;
pub mod naming;
pub mod pipeline;
pub mod render;
pub mod settings;
pub mod variation;

pub use analysis::{AnalysisRequest, Verdict};
pub use decode::{decode_image, SourceImage};
pub use error::ProcessError;
pub use geometry::{resolve, resolve_request, Alignment, CropRect, CropRequest};
pub use naming::export_file_name;
pub use pipeline::{
    export_from_bytes, export_full_resolution, export_rect, generate_variations,
    generate_variations_from_bytes, variation_rect,
};
pub use render::Rendered;
pub use settings::{FilterType, RenderSettings};
pub use variation::{CropKind, ExportPlan, Variation};
