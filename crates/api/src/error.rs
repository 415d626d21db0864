use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use zikcut_pipeline::error::FlowError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`FlowError`] and implements [`IntoResponse`] to produce
/// consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A flow-level error from `zikcut_pipeline`.
    #[error(transparent)]
    Flow(#[from] FlowError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Flow(flow) = &self;
        let (status, code, message) = match flow {
            FlowError::Validation(failure) => {
                let body = json!({
                    "error": failure.to_string(),
                    "code": "VALIDATION_ERROR",
                    "fields": failure.fields,
                });
                return (StatusCode::BAD_REQUEST, axum::Json(body)).into_response();
            }
            FlowError::InvalidModalities(_) => {
                tracing::error!(error = %flow, "Flow requested invalid modalities");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    INTERNAL_MESSAGE.to_string(),
                )
            }
            FlowError::BackendUnavailable(_) => {
                tracing::error!(error = %flow, "Generative backend unavailable");
                (
                    StatusCode::BAD_GATEWAY,
                    "BACKEND_UNAVAILABLE",
                    "The generative backend is unavailable".to_string(),
                )
            }
            FlowError::EmptyGenerationResult(_) => (
                StatusCode::BAD_GATEWAY,
                "EMPTY_GENERATION_RESULT",
                flow.to_string(),
            ),
            FlowError::SchemaMismatch(_) => {
                (StatusCode::BAD_GATEWAY, "SCHEMA_MISMATCH", flow.to_string())
            }
            FlowError::NoIdeasGenerated => {
                (StatusCode::BAD_GATEWAY, "NO_IDEAS_GENERATED", flow.to_string())
            }
            FlowError::NoThumbnailsProduced { .. } => (
                StatusCode::BAD_GATEWAY,
                "NO_THUMBNAILS_PRODUCED",
                flow.to_string(),
            ),
            FlowError::Cancelled => {
                (StatusCode::SERVICE_UNAVAILABLE, "CANCELLED", flow.to_string())
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
