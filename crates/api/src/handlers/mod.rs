//! Request handlers.
//!
//! Handlers delegate to the flows in `zikcut_pipeline` and map errors via
//! [`crate::error::AppError`].

pub mod flows;
