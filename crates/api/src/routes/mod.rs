pub mod flows;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /flows                                           flow catalog (GET)
/// /flows/run                                       any flow, tagged request (POST)
/// /flows/highlight-reel                            highlight reel (POST)
/// /flows/short-form-video                          short-form video (POST)
/// /flows/thumbnails                                thumbnail / album-art batch (POST)
/// /flows/translate                                 live translation (POST)
/// /flows/lyrics                                    lyric writing (POST)
/// /flows/landing-image                             landing image (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/flows", flows::router())
}
