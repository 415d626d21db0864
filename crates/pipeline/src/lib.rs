//! The Zikcut AI flows.
//!
//! Each flow is validate → render prompt → invoke → check output. The
//! thumbnail flow adds a second, fan-out phase with partial-failure
//! aggregation and cooperative cancellation. [`runner::run_flow`]
//! dispatches a tagged request to the matching flow.

pub mod error;
pub mod highlight_reel;
pub mod landing_image;
pub mod output;
pub mod registry;
pub mod runner;
pub mod short_form_video;
pub mod thumbnails;
pub mod translation;
