//! REST client for the Gemini `generateContent` endpoint.
//!
//! Wraps the HTTP call with [`reqwest`]. Body construction and response
//! interpretation are pure functions ([`build_request_body`],
//! [`interpret_response`]) so they can be tested without a network.

use std::time::Duration;

use async_trait::async_trait;
use zikcut_core::data_uri::DataUri;
use zikcut_core::prompt::{PromptDocument, PromptPart};

use crate::backend::{BackendError, GenerateOptions, GenerateResponse, GenerativeBackend};
use crate::config::GenAiConfig;
use crate::messages::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, InlineData, Part,
};

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// HTTP client for the Gemini API.
pub struct GeminiClient {
    client: reqwest::Client,
    config: GenAiConfig,
}

impl GeminiClient {
    /// Create a client with its own connection pool and the configured timeout.
    pub fn new(config: GenAiConfig) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: GenAiConfig) -> Self {
        Self { client, config }
    }

    /// Image-capable model when image output is requested, text model otherwise.
    fn model_for(&self, options: &GenerateOptions) -> &str {
        if options.wants_media() {
            &self.config.image_model
        } else {
            &self.config.text_model
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`BackendError::Api`]
    /// containing the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(BackendError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, BackendError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl GenerativeBackend for GeminiClient {
    async fn generate(
        &self,
        prompt: &PromptDocument,
        options: &GenerateOptions,
    ) -> Result<GenerateResponse, BackendError> {
        let model = self.model_for(options);
        let body = build_request_body(prompt, options);

        tracing::debug!(model, "Sending generateContent request");

        let response = self
            .client
            .post(self.endpoint(model))
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let parsed: GenerateContentResponse = Self::parse_response(response).await?;
        interpret_response(parsed)
    }
}

/// Build the request body for one prompt document.
///
/// The whole document becomes a single `user` turn; part order is kept.
pub fn build_request_body(prompt: &PromptDocument, options: &GenerateOptions) -> GenerateContentRequest {
    let parts = prompt
        .parts()
        .iter()
        .map(|part| match part {
            PromptPart::Text(text) => Part {
                text: Some(text.clone()),
                inline_data: None,
            },
            PromptPart::Media(uri) => Part {
                text: None,
                inline_data: Some(InlineData {
                    mime_type: uri.mime_type().to_string(),
                    data: uri.payload().to_string(),
                }),
            },
        })
        .collect();

    GenerateContentRequest {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts,
        }],
        generation_config: GenerationConfig {
            response_modalities: options.response_modalities.clone(),
            response_mime_type: options.response_mime_type.clone(),
        },
        safety_settings: options.safety_settings.clone(),
    }
}

/// Reduce a response to its text and first inline media.
///
/// Text parts of the first candidate are concatenated. A response without
/// candidates (e.g. a blocked prompt) yields an empty result.
pub fn interpret_response(response: GenerateContentResponse) -> Result<GenerateResponse, BackendError> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        let block_reason = response
            .prompt_feedback
            .and_then(|f| f.block_reason)
            .unwrap_or_else(|| "none".to_string());
        tracing::warn!(block_reason = %block_reason, "Generation returned no candidates");
        return Ok(GenerateResponse::empty());
    };

    let parts = candidate.content.map(|c| c.parts).unwrap_or_default();

    let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
    let media = parts
        .iter()
        .find_map(|p| p.inline_data.as_ref())
        .map(|data| DataUri::from_parts(&data.mime_type, &data.data))
        .transpose()
        .map_err(|e| BackendError::Decode(format!("inline data: {e}")))?;

    if text.is_empty() && media.is_none() {
        tracing::warn!(
            finish_reason = candidate.finish_reason.as_deref().unwrap_or("unknown"),
            "Generation candidate had no content",
        );
    }

    Ok(GenerateResponse {
        text: (!text.is_empty()).then_some(text),
        media,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
