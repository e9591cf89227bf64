//! Mock implementations for testing.

use async_trait::async_trait;
use birdwatch_core::{DetectionRecord, Result};
use datastore::{CreateResult, DetectionStore};
use parking_lot::Mutex;
use std::sync::Arc;

/// Mock store that captures records in memory.
///
/// Implements the same `DetectionStore` trait as the real
/// `GraphQlStore`, so tests can verify the exact records the handler
/// would persist without a live data API.
#[derive(Clone)]
pub struct MockStore {
    /// All records submitted through this store.
    records: Arc<Mutex<Vec<DetectionRecord>>>,
    /// Simulate downstream failures if set.
    should_fail: Arc<Mutex<bool>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            should_fail: Arc::new(Mutex::new(false)),
        }
    }

    /// Get all captured records.
    pub fn captured_records(&self) -> Vec<DetectionRecord> {
        self.records.lock().clone()
    }

    /// Get the count of captured records.
    pub fn record_count(&self) -> usize {
        self.records.lock().len()
    }

    /// Clear captured records.
    pub fn clear(&self) {
        self.records.lock().clear();
    }

    /// Set failure mode for testing error handling.
    pub fn set_should_fail(&self, fail: bool) {
        *self.should_fail.lock() = fail;
    }
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DetectionStore for MockStore {
    async fn create_detection(&self, record: &DetectionRecord) -> Result<CreateResult> {
        if *self.should_fail.lock() {
            return Err(birdwatch_core::Error::store("Mock store failure"));
        }

        let mut records = self.records.lock();
        records.push(record.clone());
        let id = format!("det-{}", records.len());

        Ok(CreateResult { id: Some(id) })
    }

    fn is_healthy(&self) -> bool {
        !*self.should_fail.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_record() -> DetectionRecord {
        DetectionRecord {
            device_id: "pi-1".into(),
            species_code: "AMCO".into(),
            scientific_name: None,
            common_name: None,
            confidence: 0.9,
            timestamp: "2024-01-01T00:00:00Z".into(),
            location: None,
            audio_url: None,
            image_url: None,
        }
    }

    #[tokio::test]
    async fn test_mock_store_captures_records() {
        let mock = MockStore::new();

        let result = mock.create_detection(&test_record()).await.unwrap();
        assert_eq!(result.id.as_deref(), Some("det-1"));
        assert_eq!(mock.record_count(), 1);
        assert_eq!(mock.captured_records()[0].device_id, "pi-1");
    }

    #[tokio::test]
    async fn test_mock_store_failure_mode() {
        let mock = MockStore::new();
        mock.set_should_fail(true);

        let result = mock.create_detection(&test_record()).await;
        assert!(result.is_err());
        assert!(!mock.is_healthy());
        assert_eq!(mock.record_count(), 0);
    }
}
