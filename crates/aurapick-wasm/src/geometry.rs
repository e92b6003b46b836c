//! Crop geometry bindings.
//!
//! Lets the UI draw crop overlays with exactly the rectangles the renderer
//! uses.
//!
//! ```typescript
//! import { resolve_crop, crop_labels } from '@aurapick/wasm';
//!
//! const rect = resolve_crop(4000, 3000, 1.0, 'center', true);
//! // { x: 800, y: 300, width: 2400, height: 2400 }
//! ```

use aurapick_core::{export_rect, resolve_request, Alignment, CropKind, CropRequest};
use wasm_bindgen::prelude::*;

use crate::types::JsCropRect;

/// Resolve a crop rectangle for a source of the given size.
///
/// Pass `undefined` as `ratio` for the full frame. Unknown alignment strings
/// mean center.
#[wasm_bindgen]
pub fn resolve_crop(
    source_width: u32,
    source_height: u32,
    ratio: Option<f64>,
    alignment: &str,
    zoom: bool,
) -> JsCropRect {
    let request = CropRequest::new(ratio, Alignment::from_directive(alignment), zoom);
    resolve_request(source_width, source_height, &request).into()
}

/// Rectangle the exporter will use for a verdict's label and alignment.
#[wasm_bindgen]
pub fn resolve_export_crop(
    source_width: u32,
    source_height: u32,
    best_crop: &str,
    alignment: &str,
) -> JsCropRect {
    export_rect(source_width, source_height, best_crop, alignment).into()
}

/// Variation labels in rendering order.
#[wasm_bindgen]
pub fn crop_labels() -> js_sys::Array {
    CropKind::labels()
        .into_iter()
        .map(JsValue::from_str)
        .collect()
}
