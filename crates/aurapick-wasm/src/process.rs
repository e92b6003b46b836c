//! Per-photo pipeline bindings.
//!
//! # Example
//!
//! ```typescript
//! import { generate_variations, export_full_resolution, export_file_name } from '@aurapick/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const variations = generate_variations(bytes);
//! // ... send to the analysis service, get a verdict back ...
//! const jpeg = export_full_resolution(bytes, verdict.bestCrop, verdict.cropAlignment);
//! const name = export_file_name(verdict.vibes[0]);
//! ```

use aurapick_core::{
    decode::decode_image, pipeline, ExportPlan, ProcessError, RenderSettings, Variation,
};
use wasm_bindgen::prelude::*;

use crate::console_warn;
use crate::types::{settings_from_js, JsVariation};

/// Decode a photo and render its five preview variations.
///
/// `settings` is an optional plain object, e.g. `{ maxPreviewDimension: 768 }`.
/// The returned array holds `JsVariation`s in rendering order.
#[wasm_bindgen]
pub fn generate_variations(bytes: &[u8], settings: JsValue) -> Result<js_sys::Array, JsValue> {
    let settings = settings_from_js(settings)?;
    let variations = variations_for(bytes, &settings).map_err(to_js_error)?;

    Ok(variations
        .into_iter()
        .map(|v| JsValue::from(JsVariation::from(v)))
        .collect())
}

/// Render the chosen crop at full source resolution as JPEG bytes.
///
/// An unrecognised label exports the original frame and logs a console
/// warning.
#[wasm_bindgen]
pub fn export_full_resolution(
    bytes: &[u8],
    best_crop: &str,
    alignment: &str,
) -> Result<Vec<u8>, JsValue> {
    if !ExportPlan::is_recognized(best_crop) {
        console_warn(&format!(
            "Unrecognised crop label '{best_crop}', exporting the original frame"
        ));
    }
    export_bytes(bytes, best_crop, alignment, &RenderSettings::default()).map_err(to_js_error)
}

/// Download name for an exported crop, built from its first vibe tag.
#[wasm_bindgen]
pub fn export_file_name(vibe: Option<String>) -> String {
    aurapick_core::export_file_name(vibe.as_deref())
}

fn variations_for(bytes: &[u8], settings: &RenderSettings) -> Result<Vec<Variation>, ProcessError> {
    let source = decode_image(bytes)?;
    pipeline::generate_variations(&source, settings)
}

fn export_bytes(
    bytes: &[u8],
    best_crop: &str,
    alignment: &str,
    settings: &RenderSettings,
) -> Result<Vec<u8>, ProcessError> {
    pipeline::export_from_bytes(bytes, best_crop, alignment, settings).map(|r| r.bytes)
}

fn to_js_error(err: ProcessError) -> JsValue {
    JsValue::from_str(&err.to_string())
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use aurapick_core::encode::encode_jpeg;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn sample_jpeg() -> Vec<u8> {
        encode_jpeg(&vec![90u8; 64 * 48 * 3], 64, 48, 90).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_generate_variations_default_settings() {
        let array = generate_variations(&sample_jpeg(), JsValue::UNDEFINED).unwrap();
        assert_eq!(array.length(), 5);
    }

    #[wasm_bindgen_test]
    fn test_generate_variations_invalid_bytes() {
        assert!(generate_variations(&[1, 2, 3], JsValue::NULL).is_err());
    }

    #[wasm_bindgen_test]
    fn test_export_unknown_label_falls_back() {
        let jpeg = export_full_resolution(&sample_jpeg(), "mystery", "center").unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }
}
