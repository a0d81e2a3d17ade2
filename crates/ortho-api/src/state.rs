use std::sync::Arc;

use crate::config::ApiConfig;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ApiConfig>,
}
