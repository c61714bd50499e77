//! Shared application state passed to every request handler.

use std::sync::Arc;

use adapters::TableStore;

/// Holds the single store client built at startup. The handle is behind the
/// `TableStore` trait so tests can plug in an in-memory double.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TableStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn TableStore>) -> Self {
        Self { store }
    }
}
