//! Rendering crop rectangles into encoded images.
//!
//! Two renderers share one compositing step:
//!
//! - [`render_preview`] downsizes to fit [`RenderSettings::max_preview_dimension`]
//!   and encodes at preview quality, for transmission to the analysis service
//! - [`render_full_resolution`] keeps the crop's native pixel size and encodes
//!   at export quality, for the downloaded asset
//!
//! Both paint the crop over a white background, so transparent sources come
//! out white rather than black.
//!
//! [`RenderSettings::max_preview_dimension`]: crate::settings::RenderSettings::max_preview_dimension

mod composite;
mod full;
mod preview;
mod types;

pub use composite::flatten_onto_white;
pub use full::render_full_resolution;
pub use preview::{preview_dimensions, render_preview};
pub use types::{RenderError, Rendered};
