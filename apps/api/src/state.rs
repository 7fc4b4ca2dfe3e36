use std::sync::Arc;

use crate::tailoring::Tailor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable AI tailor. `None` when no API key is configured.
    pub tailor: Option<Arc<dyn Tailor>>,
}
