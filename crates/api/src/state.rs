use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use zikcut_pipeline::runner::FlowContext;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Invoker and thumbnail settings shared by every flow.
    pub flows: FlowContext,
    /// Cancelled when the server starts shutting down. Long-running batches
    /// run on child tokens of this one.
    pub shutdown: CancellationToken,
}
