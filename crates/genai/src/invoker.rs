//! Contract layer between the flows and a [`GenerativeBackend`].
//!
//! The invoker owns the rules every call shares:
//!
//! - media output is requested as `[TEXT, IMAGE]`; an image-only request is
//!   a caller error and is rejected before the backend is reached,
//! - the fixed [`content_safety_policy`] is attached to every call,
//! - missing media and unparseable structured output are typed failures.
//!
//! There are no retries at this layer.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use zikcut_core::data_uri::{DataUri, MediaKind};
use zikcut_core::prompt::PromptDocument;

use crate::backend::{BackendError, GenerateOptions, GenerateResponse, GenerativeBackend, Modality};
use crate::safety::content_safety_policy;

/// MIME type requested for structured output.
pub const JSON_MIME_TYPE: &str = "application/json";

/// Modalities requested for every media-producing call.
pub const MEDIA_MODALITIES: &[Modality] = &[Modality::Text, Modality::Image];

/// Failures of a single backend invocation.
#[derive(Debug, thiserror::Error)]
pub enum InvokeError {
    #[error("Generative backend unavailable: {0}")]
    BackendUnavailable(#[from] BackendError),

    /// The call succeeded but produced nothing usable.
    #[error("Generation returned no usable {0}")]
    EmptyGenerationResult(String),

    #[error("Structured output did not match the expected shape: {0}")]
    SchemaMismatch(String),

    #[error("Invalid response modalities {0:?}: media output requires both TEXT and IMAGE")]
    InvalidModalities(Vec<Modality>),
}

/// Cheaply cloneable handle over a shared backend.
#[derive(Clone)]
pub struct Invoker {
    backend: Arc<dyn GenerativeBackend>,
}

impl Invoker {
    pub fn new(backend: Arc<dyn GenerativeBackend>) -> Self {
        Self { backend }
    }

    /// Issue one call with explicit modalities.
    pub async fn invoke(
        &self,
        prompt: &PromptDocument,
        modalities: &[Modality],
        response_mime_type: Option<&str>,
    ) -> Result<GenerateResponse, InvokeError> {
        check_modalities(modalities)?;

        let options = GenerateOptions {
            response_modalities: modalities.to_vec(),
            safety_settings: content_safety_policy(),
            response_mime_type: response_mime_type.map(str::to_string),
        };

        tracing::debug!(
            parts = prompt.parts().len(),
            media_parts = prompt.media_parts().len(),
            wants_media = options.wants_media(),
            "Invoking generative backend",
        );

        self.backend.generate(prompt, &options).await.map_err(|e| {
            tracing::warn!(error = %e, "Generative backend call failed");
            InvokeError::BackendUnavailable(e)
        })
    }

    /// JSON output parsed into `T`. A surrounding Markdown code fence is
    /// tolerated.
    pub async fn structured<T: DeserializeOwned>(
        &self,
        prompt: &PromptDocument,
    ) -> Result<T, InvokeError> {
        let response = self
            .invoke(prompt, &[Modality::Text], Some(JSON_MIME_TYPE))
            .await?;
        let raw = response
            .text
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| InvokeError::EmptyGenerationResult("structured output".to_string()))?;

        parse_structured(&raw)
    }

    /// Media output of the given kind.
    pub async fn media(
        &self,
        prompt: &PromptDocument,
        kind: MediaKind,
    ) -> Result<DataUri, InvokeError> {
        let response = self.invoke(prompt, MEDIA_MODALITIES, None).await?;
        match response.media {
            Some(uri) if uri.kind() == Some(kind) => Ok(uri),
            Some(uri) => {
                tracing::warn!(expected = %kind, got = uri.essence(), "Backend returned wrong media kind");
                Err(InvokeError::EmptyGenerationResult(format!("{kind} media")))
            }
            None => Err(InvokeError::EmptyGenerationResult(format!("{kind} media"))),
        }
    }
}

/// Image output without text is never a valid request.
fn check_modalities(modalities: &[Modality]) -> Result<(), InvokeError> {
    let has_text = modalities.contains(&Modality::Text);
    let has_image = modalities.contains(&Modality::Image);
    if modalities.is_empty() || (has_image && !has_text) {
        return Err(InvokeError::InvalidModalities(modalities.to_vec()));
    }
    Ok(())
}

/// Parse JSON output, stripping an optional Markdown code fence first.
pub fn parse_structured<T: DeserializeOwned>(raw: &str) -> Result<T, InvokeError> {
    serde_json::from_str(strip_code_fence(raw)).map_err(|e| {
        tracing::warn!(error = %e, "Structured output failed to parse");
        InvokeError::SchemaMismatch(e.to_string())
    })
}

/// Remove a surrounding ```` ``` ```` / ```` ```json ```` fence, if any.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest.trim_start_matches("json"),
    };
    body.strip_suffix("```").unwrap_or(body).trim()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
