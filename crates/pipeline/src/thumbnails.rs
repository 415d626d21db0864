//! Two-phase thumbnail / album-art batch.
//!
//! **Phase 1** is a single structured call over the description and the
//! whole reference gallery. It yields up to `count` [`ThumbnailIdea`]s;
//! extra ideas are dropped and zero ideas ends the flow with
//! [`FlowError::NoIdeasGenerated`].
//!
//! **Phase 2** issues one image call per idea, anchored on the first
//! reference image only, with at most `concurrency` calls in flight.
//! A failed or empty image is logged and skipped. Results keep the
//! originating idea order and leave no gaps; if every image fails the
//! flow ends with [`FlowError::NoThumbnailsProduced`].
//!
//! The cancellation token is checked before phase 1 and before each
//! per-idea call, and aborts in-flight calls. A cancelled batch fails with
//! [`FlowError::Cancelled`] even if some images were already produced.

use futures::stream::{self, StreamExt};
use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use zikcut_core::data_uri::{DataUri, MediaKind};
use zikcut_core::request::{ThumbnailRequest, Validate, ValidatedThumbnails};
use zikcut_core::result::{GeneratedThumbnail, ThumbnailBatchResult, ThumbnailIdea};
use zikcut_core::templates::{thumbnail_ideas_prompt, thumbnail_image_prompt};
use zikcut_genai::invoker::Invoker;

use crate::error::FlowError;

/// Per-idea image calls allowed in flight when not configured.
pub const DEFAULT_THUMBNAIL_CONCURRENCY: usize = 2;

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbnailSettings {
    concurrency: usize,
}

impl ThumbnailSettings {
    /// Concurrency is clamped to at least 1.
    pub fn new(concurrency: usize) -> Self {
        Self {
            concurrency: concurrency.max(1),
        }
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }
}

impl Default for ThumbnailSettings {
    fn default() -> Self {
        Self::new(DEFAULT_THUMBNAIL_CONCURRENCY)
    }
}

// ---------------------------------------------------------------------------
// Flow
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct IdeasOutput {
    ideas: Vec<ThumbnailIdea>,
}

/// Outcome of one phase-2 image call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageOutcome {
    Produced(GeneratedThumbnail),
    Failed,
    Cancelled,
}

/// Run the full two-phase batch.
pub async fn generate_thumbnails(
    invoker: &Invoker,
    request: &ThumbnailRequest,
    settings: ThumbnailSettings,
    cancel: &CancellationToken,
) -> Result<ThumbnailBatchResult, FlowError> {
    let input = request.validate()?;
    tracing::info!(
        flow = "generateThumbnails",
        count = input.count,
        reference_images = input.reference_images.len(),
        concurrency = settings.concurrency(),
        "Flow started",
    );

    if cancel.is_cancelled() {
        return Err(FlowError::Cancelled);
    }
    let ideas = tokio::select! {
        biased;
        _ = cancel.cancelled() => return Err(FlowError::Cancelled),
        ideas = request_ideas(invoker, &input) => ideas?,
    };

    let anchor = input.anchor_image();
    let outcomes: Vec<ImageOutcome> = stream::iter(ideas.into_iter().enumerate())
        .map(|(index, idea)| render_idea(invoker, index, idea, anchor, cancel))
        .buffered(settings.concurrency())
        .collect()
        .await;

    assemble_batch(outcomes)
}

/// Phase 1: one structured call for up to `count` ideas.
async fn request_ideas(
    invoker: &Invoker,
    input: &ValidatedThumbnails,
) -> Result<Vec<ThumbnailIdea>, FlowError> {
    let output: IdeasOutput = invoker.structured(&thumbnail_ideas_prompt(input)).await?;
    let returned = output.ideas.len();

    let ideas: Vec<ThumbnailIdea> = output
        .ideas
        .into_iter()
        .filter(|idea| !idea.visual_prompt.trim().is_empty())
        .take(input.count as usize)
        .collect();

    if ideas.is_empty() {
        tracing::warn!(returned, "Idea generation produced no usable ideas");
        return Err(FlowError::NoIdeasGenerated);
    }

    tracing::debug!(returned, kept = ideas.len(), "Thumbnail ideas received");
    Ok(ideas)
}

/// Phase 2: one image call for one idea.
async fn render_idea(
    invoker: &Invoker,
    index: usize,
    idea: ThumbnailIdea,
    anchor: Option<&DataUri>,
    cancel: &CancellationToken,
) -> ImageOutcome {
    if cancel.is_cancelled() {
        return ImageOutcome::Cancelled;
    }

    let prompt = thumbnail_image_prompt(&idea, anchor);
    let result = tokio::select! {
        biased;
        _ = cancel.cancelled() => return ImageOutcome::Cancelled,
        result = invoker.media(&prompt, MediaKind::Image) => result,
    };

    match result {
        Ok(uri) => ImageOutcome::Produced(GeneratedThumbnail {
            image_uri: uri.into_string(),
            prompt_used: Some(idea.visual_prompt),
        }),
        Err(e) => {
            tracing::warn!(index, error = %e, "Thumbnail image failed, skipping");
            ImageOutcome::Failed
        }
    }
}

/// Compact outcomes into a batch result, preserving order.
pub fn assemble_batch(outcomes: Vec<ImageOutcome>) -> Result<ThumbnailBatchResult, FlowError> {
    let attempted = outcomes.len();
    if outcomes.iter().any(|o| matches!(o, ImageOutcome::Cancelled)) {
        tracing::info!(attempted, "Thumbnail batch cancelled");
        return Err(FlowError::Cancelled);
    }

    let thumbnails: Vec<GeneratedThumbnail> = outcomes
        .into_iter()
        .filter_map(|o| match o {
            ImageOutcome::Produced(thumb) => Some(thumb),
            ImageOutcome::Failed | ImageOutcome::Cancelled => None,
        })
        .collect();

    if thumbnails.is_empty() {
        tracing::warn!(attempted, "Every thumbnail image failed");
        return Err(FlowError::NoThumbnailsProduced { attempted });
    }

    tracing::info!(attempted, produced = thumbnails.len(), "Thumbnail batch completed");
    Ok(ThumbnailBatchResult { thumbnails })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
