//! Application state shared across handlers.

use datastore::DetectionStore;
use std::sync::Arc;

/// Shared application state.
///
/// The handler is stateless per invocation; the only shared piece is
/// the store client, which holds no mutable state of its own.
#[derive(Clone)]
pub struct AppState {
    /// Detection store (data API in production, mock in tests)
    pub store: Arc<dyn DetectionStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn DetectionStore>) -> Self {
        Self { store }
    }
}
