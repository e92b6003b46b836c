//! Analysis service request/response bindings.
//!
//! The HTTP call itself stays in JavaScript, where the API key lives.

use aurapick_core::analysis::{self, AnalysisError, AnalysisRequest};
use aurapick_core::RenderSettings;
use wasm_bindgen::prelude::*;

/// Build the JSON request body for one photo.
#[wasm_bindgen]
pub fn build_analysis_request(bytes: &[u8]) -> Result<String, JsValue> {
    request_json(bytes).map_err(|e| JsValue::from_str(&e))
}

/// Endpoint URL for a model, without the API key.
#[wasm_bindgen]
pub fn analysis_endpoint(model: Option<String>) -> String {
    analysis::generate_content_url(model.as_deref().unwrap_or(analysis::DEFAULT_MODEL))
}

/// Parse the model's JSON text into a plain verdict object.
#[wasm_bindgen]
pub fn parse_verdict(text: &str) -> Result<JsValue, JsValue> {
    let verdict = analysis::parse_verdict(text).map_err(to_js_error)?;
    serde_wasm_bindgen::to_value(&verdict).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Parse a full `generateContent` response body into a verdict object.
#[wasm_bindgen]
pub fn parse_analysis_response(body: &str) -> Result<JsValue, JsValue> {
    let verdict = analysis::parse_response(body).map_err(to_js_error)?;
    serde_wasm_bindgen::to_value(&verdict).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn request_json(bytes: &[u8]) -> Result<String, String> {
    let settings = RenderSettings::default();
    let variations = aurapick_core::generate_variations_from_bytes(bytes, &settings)
        .map_err(|e| e.to_string())?;
    AnalysisRequest::from_variations(&variations)
        .to_json()
        .map_err(|e| e.to_string())
}

fn to_js_error(err: AnalysisError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
