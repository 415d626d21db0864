//! Live translation, and lyric writing on top of it.

use serde::Deserialize;
use zikcut_core::lyrics::{compose_lyrics_brief, LyricsBrief};
use zikcut_core::request::{TranslationRequest, Validate};
use zikcut_core::result::TranslationResult;
use zikcut_core::templates::translation_prompt;
use zikcut_genai::invoker::Invoker;

use crate::error::FlowError;
use crate::output::require_text;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslationOutput {
    translated_text: String,
}

pub async fn translate_text(
    invoker: &Invoker,
    request: &TranslationRequest,
) -> Result<TranslationResult, FlowError> {
    let input = request.validate()?;
    tracing::info!(
        flow = "translateText",
        target_language = %input.target_language,
        source_chars = input.source_text.chars().count(),
        "Flow started",
    );

    let output: TranslationOutput = invoker.structured(&translation_prompt(&input)).await?;
    Ok(TranslationResult {
        translated_text: require_text(output.translated_text, "translated text")?,
    })
}

/// Write song lyrics from a brief. The lyrics come back as `translated_text`.
pub async fn write_lyrics(
    invoker: &Invoker,
    brief: &LyricsBrief,
) -> Result<TranslationResult, FlowError> {
    let brief = brief.validate()?;
    tracing::debug!(language = %brief.language, "Composing lyrics brief");
    translate_text(invoker, &compose_lyrics_brief(&brief)).await
}
