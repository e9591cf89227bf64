//! Common test setup functions.

use api::{router, state::AppState};
use axum::Router;
use birdwatch_core::DetectionRecord;
use datastore::DetectionStore;
use std::sync::Arc;

use crate::mocks::MockStore;

/// Test context running the production router over a mock store.
///
/// This exercises the same code paths as production: the real axum
/// router with all middleware, with only the `DetectionStore` seam
/// swapped for an in-memory mock.
pub struct TestContext {
    pub mock_store: Arc<MockStore>,
    pub router: Router,
}

impl TestContext {
    /// Create a new test context.
    pub fn new() -> Self {
        let mock_store = Arc::new(MockStore::new());
        let state = AppState::new(mock_store.clone() as Arc<dyn DetectionStore>);
        let router = router(state);

        Self { mock_store, router }
    }

    /// Get all records captured by the mock store.
    pub fn captured_records(&self) -> Vec<DetectionRecord> {
        self.mock_store.captured_records()
    }

    /// Get count of captured records.
    pub fn captured_record_count(&self) -> usize {
        self.mock_store.record_count()
    }

    /// Set the mock store to fail (for error testing).
    pub fn set_store_failure(&self, should_fail: bool) {
        self.mock_store.set_should_fail(should_fail);
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
