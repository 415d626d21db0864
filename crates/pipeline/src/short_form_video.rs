//! Short vertical video cut from a recorded stream.

use serde::Deserialize;
use zikcut_core::data_uri::MediaKind;
use zikcut_core::request::{ShortFormVideoRequest, Validate};
use zikcut_core::result::ShortFormVideoResult;
use zikcut_core::templates::short_form_video_prompt;
use zikcut_genai::invoker::Invoker;

use crate::error::FlowError;
use crate::output::require_media_uri;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ShortOutput {
    short_video_data_uri: String,
    description: String,
    tags: Vec<String>,
}

pub async fn create_short_form_video(
    invoker: &Invoker,
    request: &ShortFormVideoRequest,
) -> Result<ShortFormVideoResult, FlowError> {
    let input = request.validate()?;
    tracing::info!(
        flow = "createShortFormVideo",
        duration_secs = input.desired_duration_seconds,
        aspect_ratio = %input.aspect_ratio,
        "Flow started",
    );

    let output: ShortOutput = invoker.structured(&short_form_video_prompt(&input)).await?;
    let output_media_uri =
        require_media_uri(output.short_video_data_uri, MediaKind::Video, "short video")?;

    // Blank tags are dropped, surrounding whitespace is removed.
    let tags = output
        .tags
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    Ok(ShortFormVideoResult {
        output_media_uri,
        description: output.description.trim().to_string(),
        tags,
    })
}
