//! JPEG encoding for previews and exports.
//!
//! Both output paths produce JPEG: previews at a reduced quality to keep the
//! analysis request small, exports at maximum quality.
//!
//! # Examples
//!
//! ```ignore
//! use aurapick_core::encode::encode_jpeg;
//!
//! let pixels = vec![255u8; 100 * 100 * 3]; // White image
//! let jpeg_bytes = encode_jpeg(&pixels, 100, 100, 85).unwrap();
//! println!("Encoded {} bytes", jpeg_bytes.len());
//! ```

mod jpeg;

pub use jpeg::{encode_jpeg, encode_rgb_image, EncodeError, MAX_QUALITY, MIN_QUALITY};
