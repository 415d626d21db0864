//! Route definitions for the generation flows.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::flows;
use crate::state::AppState;

/// Flow routes mounted at `/flows`.
///
/// ```text
/// GET    /                  -> list_flows
/// POST   /run               -> run_flow
/// POST   /highlight-reel    -> create_highlight_reel
/// POST   /short-form-video  -> create_short_form_video
/// POST   /thumbnails        -> generate_thumbnails
/// POST   /translate         -> translate_text
/// POST   /lyrics            -> write_lyrics
/// POST   /landing-image     -> generate_landing_image
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(flows::list_flows))
        .route("/run", post(flows::run_flow))
        .route("/highlight-reel", post(flows::create_highlight_reel))
        .route("/short-form-video", post(flows::create_short_form_video))
        .route("/thumbnails", post(flows::generate_thumbnails))
        .route("/translate", post(flows::translate_text))
        .route("/lyrics", post(flows::write_lyrics))
        .route("/landing-image", post(flows::generate_landing_image))
}
