use std::sync::Arc;

use crate::events::FlowObserver;
use crate::llm_client::ModelClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable text-completion backend. Default: GeminiClient.
    pub model: Arc<dyn ModelClient>,
    /// Pluggable flow event sink. Default: TracingObserver.
    pub observer: Arc<dyn FlowObserver>,
}
