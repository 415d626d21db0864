//! Domain types for the Zikcut AI flows.
//!
//! Everything in this crate is pure: data URIs, typed generation requests
//! and their validators, result shapes, and the prompt documents rendered
//! from validated requests. Nothing here performs I/O.

pub mod data_uri;
pub mod error;
pub mod lyrics;
pub mod prompt;
pub mod request;
pub mod result;
pub mod templates;
pub mod validation;
