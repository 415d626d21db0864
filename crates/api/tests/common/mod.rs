#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;
use zikcut_api::config::{ServerConfig, DEFAULT_MAX_BODY_BYTES};
use zikcut_api::router::build_app_router;
use zikcut_api::state::AppState;
use zikcut_genai::invoker::Invoker;
use zikcut_genai::testing::ScriptedBackend;
use zikcut_pipeline::runner::FlowContext;
use zikcut_pipeline::thumbnails::ThumbnailSettings;

pub const MP4: &str = "data:video/mp4;base64,AAAAIGZ0eXBpc29t";
pub const PNG: &str = "data:image/png;base64,iVBORw0KGgo=";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:9002".to_string()],
        request_timeout_secs: 30,
        thumbnail_concurrency: 2,
        max_body_bytes: DEFAULT_MAX_BODY_BYTES,
    }
}

/// Build the full application router over `backend`, with the same
/// middleware stack production uses.
pub fn build_test_app(backend: Arc<ScriptedBackend>) -> Router {
    build_test_app_with_shutdown(backend, CancellationToken::new())
}

/// Like [`build_test_app`], with a caller-controlled shutdown token.
pub fn build_test_app_with_shutdown(
    backend: Arc<ScriptedBackend>,
    shutdown: CancellationToken,
) -> Router {
    build_test_app_with_config(backend, shutdown, test_config())
}

/// Like [`build_test_app`], with a caller-supplied configuration.
pub fn build_test_app_with_config(
    backend: Arc<ScriptedBackend>,
    shutdown: CancellationToken,
    config: ServerConfig,
) -> Router {
    let state = AppState {
        config: Arc::new(config.clone()),
        flows: FlowContext::new(
            Invoker::new(backend),
            ThumbnailSettings::new(config.thumbnail_concurrency),
        ),
        shutdown,
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: String) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// A PNG data URI whose payload decodes to `bytes` bytes (a multiple of 3).
pub fn png_of_size(bytes: usize) -> String {
    format!("data:image/png;base64,{}", "A".repeat(bytes / 3 * 4))
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
