//! Dispatch of tagged requests to their flow.

use tokio_util::sync::CancellationToken;
use zikcut_core::request::GenerationRequest;
use zikcut_core::result::GenerationResult;
use zikcut_genai::invoker::Invoker;

use crate::error::FlowError;
use crate::highlight_reel::create_highlight_reel;
use crate::landing_image::generate_landing_image;
use crate::short_form_video::create_short_form_video;
use crate::thumbnails::{generate_thumbnails, ThumbnailSettings};
use crate::translation::translate_text;

/// Handles every flow needs.
#[derive(Clone)]
pub struct FlowContext {
    pub invoker: Invoker,
    pub thumbnails: ThumbnailSettings,
}

impl FlowContext {
    pub fn new(invoker: Invoker, thumbnails: ThumbnailSettings) -> Self {
        Self { invoker, thumbnails }
    }
}

/// Run whichever flow `request` names.
///
/// `cancel` only affects the thumbnail batch; the other flows make a single
/// backend call.
pub async fn run_flow(
    ctx: &FlowContext,
    request: &GenerationRequest,
    cancel: &CancellationToken,
) -> Result<GenerationResult, FlowError> {
    tracing::debug!(flow = request.flow_name(), "Dispatching flow");

    let result = match request {
        GenerationRequest::CreateHighlightReel(req) => {
            GenerationResult::CreateHighlightReel(create_highlight_reel(&ctx.invoker, req).await?)
        }
        GenerationRequest::CreateShortFormVideo(req) => GenerationResult::CreateShortFormVideo(
            create_short_form_video(&ctx.invoker, req).await?,
        ),
        GenerationRequest::GenerateThumbnails(req) => GenerationResult::GenerateThumbnails(
            generate_thumbnails(&ctx.invoker, req, ctx.thumbnails, cancel).await?,
        ),
        GenerationRequest::TranslateText(req) => {
            GenerationResult::TranslateText(translate_text(&ctx.invoker, req).await?)
        }
        GenerationRequest::GenerateLandingImage(req) => {
            GenerationResult::GenerateLandingImage(generate_landing_image(&ctx.invoker, req).await)
        }
    };

    Ok(result)
}
