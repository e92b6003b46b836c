//! WASM-compatible wrapper types.
//!
//! These wrap the core geometry and variation types so JavaScript can read
//! them through plain getters.

use aurapick_core::{CropRect, RenderSettings, Variation};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// A crop rectangle in source pixel coordinates.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JsCropRect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

#[wasm_bindgen]
impl JsCropRect {
    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Plain `{ x, y, width, height }` object, e.g. for CSS overlays.
    #[wasm_bindgen(js_name = toJSON)]
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl From<CropRect> for JsCropRect {
    fn from(rect: CropRect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}

/// One rendered preview variation.
///
/// `bytes()` copies the JPEG data into a fresh `Uint8Array`.
#[wasm_bindgen]
pub struct JsVariation {
    label: String,
    bytes: Vec<u8>,
    mime_type: String,
    width: u32,
    height: u32,
}

#[wasm_bindgen]
impl JsVariation {
    /// Variation label, e.g. "4:5 Upper".
    #[wasm_bindgen(getter)]
    pub fn label(&self) -> String {
        self.label.clone()
    }

    #[wasm_bindgen(getter, js_name = mimeType)]
    pub fn mime_type(&self) -> String {
        self.mime_type.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.bytes.len()
    }

    /// Encoded JPEG bytes.
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

impl From<Variation> for JsVariation {
    fn from(variation: Variation) -> Self {
        Self {
            label: variation.label().to_string(),
            mime_type: variation.mime_type.to_string(),
            width: variation.width,
            height: variation.height,
            bytes: variation.bytes,
        }
    }
}

/// Read optional render settings passed from JavaScript.
///
/// `undefined` and `null` mean defaults; missing fields take their defaults.
pub(crate) fn settings_from_js(value: JsValue) -> Result<RenderSettings, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(RenderSettings::default());
    }
    let settings: RenderSettings =
        serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(settings.sanitized())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aurapick_core::CropKind;

    #[test]
    fn test_crop_rect_conversion() {
        let rect = JsCropRect::from(CropRect::new(800.0, 300.0, 2400.0, 2400.0));
        assert_eq!(rect.x(), 800.0);
        assert_eq!(rect.y(), 300.0);
        assert_eq!(rect.width(), 2400.0);
        assert_eq!(rect.height(), 2400.0);
    }

    #[test]
    fn test_crop_rect_serializes_as_plain_object() {
        let rect = JsCropRect::from(CropRect::new(0.0, 125.0, 300.0, 375.0));
        let value = serde_json::to_value(rect).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "x": 0.0, "y": 125.0, "width": 300.0, "height": 375.0 })
        );
    }

    #[test]
    fn test_variation_conversion() {
        let variation = Variation {
            kind: CropKind::NineSixteenStory,
            bytes: vec![0xFF, 0xD8, 0xFF, 0xD9],
            mime_type: "image/jpeg",
            width: 180,
            height: 320,
            rect: CropRect::full(180, 320),
        };
        let js = JsVariation::from(variation);
        assert_eq!(js.label(), "9:16 Story");
        assert_eq!(js.mime_type(), "image/jpeg");
        assert_eq!((js.width(), js.height()), (180, 320));
        assert_eq!(js.byte_length(), 4);
        assert_eq!(js.bytes(), vec![0xFF, 0xD8, 0xFF, 0xD9]);
    }
}
