//! Generative backend seam.
//!
//! [`backend::GenerativeBackend`] is the single trait the flows talk to.
//! [`invoker::Invoker`] wraps it with the per-call contracts every flow
//! shares (modality negotiation, the fixed safety policy, empty and
//! malformed output detection). [`gemini::GeminiClient`] is the production
//! implementation over the Gemini `generateContent` REST endpoint.

pub mod backend;
pub mod config;
pub mod gemini;
pub mod invoker;
pub mod messages;
pub mod safety;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
