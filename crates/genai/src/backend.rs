//! The generative backend trait and its call options.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use zikcut_core::data_uri::DataUri;
use zikcut_core::prompt::PromptDocument;

use crate::safety::SafetySetting;

/// Output modality a call may produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Modality {
    Text,
    Image,
}

/// Per-call generation options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub response_modalities: Vec<Modality>,
    pub safety_settings: Vec<SafetySetting>,
    /// Ask for a specific response body type, e.g. `application/json`.
    pub response_mime_type: Option<String>,
}

impl GenerateOptions {
    /// Whether the call is expected to produce media.
    pub fn wants_media(&self) -> bool {
        self.response_modalities.contains(&Modality::Image)
    }
}

/// What came back from one call. Either part may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateResponse {
    pub text: Option<String>,
    pub media: Option<DataUri>,
}

impl GenerateResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            media: None,
        }
    }

    pub fn media(uri: DataUri) -> Self {
        Self {
            text: None,
            media: Some(uri),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

/// Errors raised by a backend implementation.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend returned a non-2xx status code.
    #[error("Backend API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The response body did not have the expected shape.
    #[error("Failed to decode backend response: {0}")]
    Decode(String),
}

/// A remote or local generative model.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    async fn generate(
        &self,
        prompt: &PromptDocument,
        options: &GenerateOptions,
    ) -> Result<GenerateResponse, BackendError>;
}
