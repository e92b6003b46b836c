//! Image decoding for uploaded photos.
//!
//! This module provides functionality for:
//! - Sniffing and decoding common consumer photo formats (JPEG, PNG, WebP, GIF)
//! - Applying EXIF orientation so geometry matches what the browser shows
//! - Reading upright dimensions without a full decode
//!
//! A decode failure is the only way a photo can be rejected before any crop
//! geometry is computed.
//!
//! # Examples
//!
//! ```ignore
//! use aurapick_core::decode::decode_image;
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width(), image.height());
//! ```

mod reader;
mod types;

pub use reader::{decode_dimensions, decode_image};
pub use types::{DecodeError, Orientation, SourceImage};
