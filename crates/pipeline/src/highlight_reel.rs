//! Highlight reel from a recorded stream.

use serde::Deserialize;
use zikcut_core::request::{HighlightReelRequest, Validate};
use zikcut_core::result::HighlightReelResult;
use zikcut_core::templates::highlight_reel_prompt;
use zikcut_genai::invoker::Invoker;

use crate::error::FlowError;
use crate::output::require_media_uri;

/// Structured output the model is asked for.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReelOutput {
    highlight_reel_data_uri: String,
    summary: String,
}

/// Cut a highlight reel and summarize it.
///
/// The reel must come back as the same media kind as the source.
pub async fn create_highlight_reel(
    invoker: &Invoker,
    request: &HighlightReelRequest,
) -> Result<HighlightReelResult, FlowError> {
    let input = request.validate()?;
    let kind = input.expected_output_kind();
    tracing::info!(
        flow = "createHighlightReel",
        source_mime = input.source_media.essence(),
        "Flow started",
    );

    let output: ReelOutput = invoker.structured(&highlight_reel_prompt(&input)).await?;
    let output_media_uri = require_media_uri(
        output.highlight_reel_data_uri,
        kind,
        &format!("{kind} highlight reel"),
    )?;

    Ok(HighlightReelResult {
        output_media_uri,
        summary: output.summary.trim().to_string(),
    })
}
