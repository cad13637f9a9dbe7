use std::sync::Arc;

use console_access_application::ErrorCatalog;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub error_catalog: Arc<ErrorCatalog>,
}

impl AppState {
    pub fn new(error_catalog: ErrorCatalog) -> Self {
        Self {
            error_catalog: Arc::new(error_catalog),
        }
    }
}
