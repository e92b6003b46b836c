//! Per-photo pipeline: variations for analysis, then the chosen export.
//!
//! ```text
//! bytes ──decode──▶ SourceImage ──▶ 5 × (resolve ▶ render_preview) ──▶ Vec<Variation>
//!                        │
//!   verdict label ───────┴──▶ ExportPlan ▶ resolve ▶ render_full_resolution ──▶ Rendered
//! ```
//!
//! Both branches go through [`resolve_request`], so the exported crop is the
//! same rectangle the analysis service judged, only at a different output
//! resolution.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::decode::{decode_image, SourceImage};
use crate::error::ProcessError;
use crate::geometry::{resolve_request, Alignment, CropRect};
use crate::render::{render_full_resolution, render_preview, Rendered};
use crate::settings::RenderSettings;
use crate::variation::{CropKind, ExportPlan, Variation};

/// Render the five analysis variations of a photo, in table order.
///
/// With the `parallel` feature the renders run on the rayon pool; the
/// returned order is the table order either way. Any failure fails the
/// whole call.
pub fn generate_variations(
    source: &SourceImage,
    settings: &RenderSettings,
) -> Result<Vec<Variation>, ProcessError> {
    #[cfg(feature = "parallel")]
    let variations = CropKind::ALL
        .par_iter()
        .map(|&kind| render_variation(source, kind, settings))
        .collect::<Result<Vec<_>, _>>()?;

    #[cfg(not(feature = "parallel"))]
    let variations = CropKind::ALL
        .iter()
        .map(|&kind| render_variation(source, kind, settings))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(variations)
}

/// Decode `bytes` and render its variations.
pub fn generate_variations_from_bytes(
    bytes: &[u8],
    settings: &RenderSettings,
) -> Result<Vec<Variation>, ProcessError> {
    let source = decode_image(bytes)?;
    generate_variations(&source, settings)
}

fn render_variation(
    source: &SourceImage,
    kind: CropKind,
    settings: &RenderSettings,
) -> Result<Variation, ProcessError> {
    let rect = variation_rect(source.width(), source.height(), kind);
    let rendered = render_preview(source, &rect, settings)
        .map_err(|e| ProcessError::render(kind.label(), e))?;

    debug!(
        label = kind.label(),
        width = rendered.width,
        height = rendered.height,
        bytes = rendered.bytes.len(),
        "rendered variation"
    );

    Ok(Variation {
        kind,
        bytes: rendered.bytes,
        mime_type: rendered.mime_type,
        width: rendered.width,
        height: rendered.height,
        rect,
    })
}

/// The source rectangle a table variation is rendered from.
pub fn variation_rect(source_width: u32, source_height: u32, kind: CropKind) -> CropRect {
    resolve_request(source_width, source_height, &kind.request())
}

/// The source rectangle the exporter uses for a best-crop label and an
/// alignment directive.
///
/// Never fails: unknown labels give the full frame and unknown directives
/// mean center.
pub fn export_rect(
    source_width: u32,
    source_height: u32,
    best_crop_label: &str,
    alignment_directive: &str,
) -> CropRect {
    let plan = ExportPlan::parse(best_crop_label);
    let request = plan.request(Alignment::from_directive(alignment_directive));
    resolve_request(source_width, source_height, &request)
}

/// Render the crop named by the analysis verdict at full source resolution.
///
/// The label is untrusted text: it is read by token (see [`ExportPlan`]) and
/// an unrecognised label exports the uncropped original instead of failing.
pub fn export_full_resolution(
    source: &SourceImage,
    best_crop_label: &str,
    alignment_directive: &str,
    settings: &RenderSettings,
) -> Result<Rendered, ProcessError> {
    if !ExportPlan::is_recognized(best_crop_label) {
        warn!(
            label = best_crop_label,
            "unrecognised best-crop label, exporting the original frame"
        );
    }

    let rect = export_rect(
        source.width(),
        source.height(),
        best_crop_label,
        alignment_directive,
    );
    let rendered = render_full_resolution(source, &rect, settings)
        .map_err(|e| ProcessError::render(label_for_errors(best_crop_label), e))?;

    info!(
        label = best_crop_label,
        alignment = alignment_directive,
        width = rendered.width,
        height = rendered.height,
        "exported full-resolution crop"
    );

    Ok(rendered)
}

/// Decode `bytes` and export the chosen crop.
pub fn export_from_bytes(
    bytes: &[u8],
    best_crop_label: &str,
    alignment_directive: &str,
    settings: &RenderSettings,
) -> Result<Rendered, ProcessError> {
    let source = decode_image(bytes)?;
    export_full_resolution(&source, best_crop_label, alignment_directive, settings)
}

/// Map an arbitrary label to a static one for error reporting.
fn label_for_errors(label: &str) -> &'static str {
    CropKind::from_label(label)
        .map(CropKind::label)
        .unwrap_or("custom label")
}
