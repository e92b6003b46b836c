//! Crop geometry: where a variation's pixels come from.
//!
//! Everything here is pure arithmetic over source dimensions. The same
//! functions drive both the low-resolution previews sent for analysis and
//! the full-resolution export, so a crop judged in preview is exactly the
//! crop that gets downloaded.
//!
//! # Coordinate System
//!
//! - Units are source pixels, origin at the top-left corner
//! - Rectangles keep fractional coordinates until [`CropRect::to_pixels`]
//! - Ratios are width divided by height (4:5 is `0.8`)

mod alignment;
mod rect;
mod resolve;

pub use alignment::Alignment;
pub use rect::{CropRect, GeometryError, PixelRect};
pub use resolve::{resolve, resolve_request, CropRequest, ZOOM_FACTOR};
