//! AuraPick WASM - WebAssembly bindings for AuraPick
//!
//! This crate exposes the aurapick-core pipeline to the browser.
//!
//! # Module Structure
//!
//! - `geometry` - Crop rectangle resolution for overlays
//! - `process` - Variation rendering and full-resolution export
//! - `analysis` - Analysis service request building and verdict parsing
//! - `types` - WASM-compatible wrapper types
//!
//! # Usage
//!
//! ```typescript
//! import init, { generate_variations, build_analysis_request } from '@aurapick/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const body = build_analysis_request(bytes);
//! ```

use wasm_bindgen::prelude::*;

mod analysis;
mod geometry;
mod process;
mod types;

pub use analysis::{
    analysis_endpoint, build_analysis_request, parse_analysis_response, parse_verdict,
};
pub use geometry::{crop_labels, resolve_crop, resolve_export_crop};
pub use process::{export_file_name, export_full_resolution, generate_variations};
pub use types::{JsCropRect, JsVariation};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Print a warning to the browser console. No-op off wasm32.
pub(crate) fn console_warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(message));

    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_console_warn_native_is_noop() {
        console_warn("ignored");
    }
}
