#![allow(dead_code)]

use std::sync::Arc;

use serde_json::json;
use zikcut_core::data_uri::DataUri;
use zikcut_core::prompt::PromptDocument;
use zikcut_genai::backend::{BackendError, GenerateOptions, GenerateResponse};
use zikcut_genai::invoker::Invoker;
use zikcut_genai::testing::{RecordedCall, ScriptedBackend};

pub const MP4: &str = "data:video/mp4;base64,AAAAIGZ0eXBpc29t";
pub const MP3: &str = "data:audio/mpeg;base64,SUQzBAA=";
pub const PNG: &str = "data:image/png;base64,iVBORw0KGgo=";
pub const JPG: &str = "data:image/jpeg;base64,/9j/4AAQ";
pub const WEBP: &str = "data:image/webp;base64,UklGRg==";

/// Invoker over `backend`.
pub fn invoker(backend: &Arc<ScriptedBackend>) -> Invoker {
    Invoker::new(backend.clone())
}

pub fn uri(s: &str) -> DataUri {
    DataUri::parse(s).unwrap()
}

/// Structured text response with `value` serialized as JSON.
pub fn json_response(value: serde_json::Value) -> GenerateResponse {
    GenerateResponse::text(value.to_string())
}

/// The idea-generation response for the given visual prompts.
pub fn ideas_response(prompts: &[&str]) -> GenerateResponse {
    let ideas: Vec<_> = prompts
        .iter()
        .map(|p| json!({ "visualPrompt": p, "description": format!("Concept: {p}") }))
        .collect();
    json_response(json!({ "ideas": ideas }))
}

/// Whether a call asked for image output.
pub fn is_image_call(options: &GenerateOptions) -> bool {
    options.wants_media()
}

/// Image calls only, in issue order.
pub fn image_calls(calls: &[RecordedCall]) -> Vec<&RecordedCall> {
    calls.iter().filter(|c| is_image_call(&c.options)).collect()
}

/// Backend answering the idea call with `prompts` and each image call with
/// `image(prompt_text)`.
pub fn batch_backend<F>(prompts: &'static [&'static str], image: F) -> Arc<ScriptedBackend>
where
    F: Fn(&str) -> Result<GenerateResponse, BackendError> + Send + Sync + 'static,
{
    ScriptedBackend::new(move |prompt: &PromptDocument, options: &GenerateOptions| {
        if is_image_call(options) {
            image(&prompt.joined_text())
        } else {
            Ok(ideas_response(prompts))
        }
    })
}

pub fn png_response() -> GenerateResponse {
    GenerateResponse::media(uri(PNG))
}

pub fn api_error() -> BackendError {
    BackendError::Api {
        status: 500,
        body: "internal".to_string(),
    }
}
