use zikcut_core::error::ValidationFailure;
use zikcut_genai::backend::{BackendError, Modality};
use zikcut_genai::invoker::InvokeError;

/// Failures surfaced by a flow.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// The request broke its structural contract. The backend was not called.
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    #[error("Generative backend unavailable: {0}")]
    BackendUnavailable(#[source] BackendError),

    #[error("Generation returned no usable {0}")]
    EmptyGenerationResult(String),

    #[error("Generated output did not match the expected shape: {0}")]
    SchemaMismatch(String),

    #[error("Invalid response modalities {0:?}")]
    InvalidModalities(Vec<Modality>),

    #[error("No thumbnail ideas were generated")]
    NoIdeasGenerated,

    #[error("None of the {attempted} thumbnail images could be generated")]
    NoThumbnailsProduced { attempted: usize },

    #[error("Flow was cancelled")]
    Cancelled,
}

impl From<InvokeError> for FlowError {
    fn from(err: InvokeError) -> Self {
        match err {
            InvokeError::BackendUnavailable(e) => FlowError::BackendUnavailable(e),
            InvokeError::EmptyGenerationResult(what) => FlowError::EmptyGenerationResult(what),
            InvokeError::SchemaMismatch(detail) => FlowError::SchemaMismatch(detail),
            InvokeError::InvalidModalities(m) => FlowError::InvalidModalities(m),
        }
    }
}
