//! Handlers for the generation flows.
//!
//! Each handler deserializes the typed request, runs the flow against the
//! shared invoker and wraps the result in a [`DataResponse`]. Flow failures
//! are mapped to HTTP by [`crate::error::AppError`].

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use zikcut_core::lyrics::LyricsBrief;
use zikcut_core::request::{
    GenerationRequest, HighlightReelRequest, LandingImageRequest, ShortFormVideoRequest,
    ThumbnailRequest, TranslationRequest,
};
use zikcut_pipeline::registry::FLOWS;
use zikcut_pipeline::{highlight_reel, landing_image, runner, short_form_video, thumbnails, translation};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// GET /api/v1/flows
pub async fn list_flows() -> impl IntoResponse {
    Json(DataResponse { data: FLOWS })
}

// ---------------------------------------------------------------------------
// Tagged dispatch
// ---------------------------------------------------------------------------

/// POST /api/v1/flows/run
///
/// Body is `{ "flow": "<name>", "input": { ... } }`; the response data is
/// `{ "flow": "<name>", "output": { ... } }`.
pub async fn run_flow(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> AppResult<impl IntoResponse> {
    let cancel = state.shutdown.child_token();
    let result = runner::run_flow(&state.flows, &request, &cancel).await?;

    Ok(Json(DataResponse { data: result }))
}

// ---------------------------------------------------------------------------
// Media flows
// ---------------------------------------------------------------------------

/// POST /api/v1/flows/highlight-reel
pub async fn create_highlight_reel(
    State(state): State<AppState>,
    Json(input): Json<HighlightReelRequest>,
) -> AppResult<impl IntoResponse> {
    let result = highlight_reel::create_highlight_reel(&state.flows.invoker, &input).await?;

    tracing::info!(summary_chars = result.summary.len(), "Highlight reel created");

    Ok(Json(DataResponse { data: result }))
}

/// POST /api/v1/flows/short-form-video
pub async fn create_short_form_video(
    State(state): State<AppState>,
    Json(input): Json<ShortFormVideoRequest>,
) -> AppResult<impl IntoResponse> {
    let result = short_form_video::create_short_form_video(&state.flows.invoker, &input).await?;

    tracing::info!(tags = result.tags.len(), "Short-form video created");

    Ok(Json(DataResponse { data: result }))
}

/// POST /api/v1/flows/thumbnails
///
/// The batch stops issuing image calls once the server starts shutting down.
pub async fn generate_thumbnails(
    State(state): State<AppState>,
    Json(input): Json<ThumbnailRequest>,
) -> AppResult<impl IntoResponse> {
    let cancel = state.shutdown.child_token();
    let result = thumbnails::generate_thumbnails(
        &state.flows.invoker,
        &input,
        state.flows.thumbnails,
        &cancel,
    )
    .await?;

    Ok(Json(DataResponse { data: result }))
}

// ---------------------------------------------------------------------------
// Text flows
// ---------------------------------------------------------------------------

/// POST /api/v1/flows/translate
pub async fn translate_text(
    State(state): State<AppState>,
    Json(input): Json<TranslationRequest>,
) -> AppResult<impl IntoResponse> {
    let result = translation::translate_text(&state.flows.invoker, &input).await?;

    Ok(Json(DataResponse { data: result }))
}

/// POST /api/v1/flows/lyrics
pub async fn write_lyrics(
    State(state): State<AppState>,
    Json(input): Json<LyricsBrief>,
) -> AppResult<impl IntoResponse> {
    let result = translation::write_lyrics(&state.flows.invoker, &input).await?;

    Ok(Json(DataResponse { data: result }))
}

// ---------------------------------------------------------------------------
// Landing image
// ---------------------------------------------------------------------------

/// POST /api/v1/flows/landing-image
///
/// Always 200: failures come back as the placeholder image URL.
pub async fn generate_landing_image(
    State(state): State<AppState>,
    Json(input): Json<LandingImageRequest>,
) -> impl IntoResponse {
    let result = landing_image::generate_landing_image(&state.flows.invoker, &input).await;

    Json(DataResponse { data: result })
}
