//! The boundary with the remote aesthetic-analysis service.
//!
//! The service itself is a black box reached over HTTP by the caller. This
//! module only shapes what goes in and reads what comes out:
//!
//! - [`AnalysisRequest`] packs the rendered variations and an image
//!   reference map into a `generateContent` request body
//! - [`parse_response`] / [`parse_verdict`] turn the reply into a [`Verdict`]
//!
//! The verdict's `bestCrop` and `cropAlignment` stay raw strings. They are
//! interpreted through [`ExportPlan`](crate::variation::ExportPlan) and
//! [`Alignment::from_directive`](crate::geometry::Alignment::from_directive),
//! which never fail.

mod request;
mod response;
mod verdict;

pub use request::{
    generate_content_url, reference_map, AnalysisRequest, DEFAULT_MODEL, SYSTEM_INSTRUCTION,
};
pub use response::{parse_response, parse_verdict, AnalysisError};
pub use verdict::{VibeCategory, Verdict};
