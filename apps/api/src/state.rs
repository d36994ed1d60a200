use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionBackend;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Read-only after startup: the completion backend and config are built once
/// in `main` and cloned into each handler. No mutable state crosses requests.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend behind a trait object so tests can swap in a stub.
    pub llm: Arc<dyn CompletionBackend>,
    pub config: Config,
}
