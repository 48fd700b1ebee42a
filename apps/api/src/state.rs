use std::sync::Arc;

use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable generation backend. Production: `HfClient`; tests swap in a stub.
    pub generator: Arc<dyn TextGenerator>,
}
