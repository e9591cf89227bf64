//! Data API client.

use async_trait::async_trait;
use birdwatch_core::{DetectionRecord, Error, Result};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::StoreConfig;

/// The `createDetection` mutation document.
const CREATE_DETECTION: &str = "\
mutation CreateDetection($input: CreateDetectionInput!) {
  createDetection(input: $input) {
    id
  }
}";

/// Result of persisting one detection.
#[derive(Debug, Clone)]
pub struct CreateResult {
    /// Server-assigned record id, when the API returns one.
    pub id: Option<String>,
}

/// Persistence seam for detection records.
///
/// Production uses [`GraphQlStore`]; tests substitute a mock that
/// captures records in memory.
#[async_trait]
pub trait DetectionStore: Send + Sync {
    /// Submits one record via the data API's create operation.
    async fn create_detection(&self, record: &DetectionRecord) -> Result<CreateResult>;

    /// Whether the last known state of the store connection is usable.
    fn is_healthy(&self) -> bool;
}

/// GraphQL response envelope for `createDetection`.
#[derive(Debug, Deserialize)]
struct CreateResponse {
    data: Option<CreateData>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
struct CreateData {
    #[serde(rename = "createDetection")]
    create_detection: Option<CreatedDetection>,
}

#[derive(Debug, Deserialize)]
struct CreatedDetection {
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

/// Client for the managed data service's GraphQL endpoint.
pub struct GraphQlStore {
    config: StoreConfig,
    http_client: reqwest::Client,
}

impl GraphQlStore {
    /// Creates a new store client.
    pub fn new(config: StoreConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::config(format!("failed to create HTTP client: {}", e)))?;

        debug!(endpoint = %config.endpoint, "Created data API client");

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Posts a GraphQL document and returns the decoded body.
    pub(crate) async fn post_graphql(&self, body: serde_json::Value) -> Result<serde_json::Value> {
        let mut request = self
            .http_client
            .post(&self.config.endpoint)
            .json(&body);

        if let Some(ref key) = self.config.api_key {
            request = request.header("x-api-key", key);
        }

        let response = request.send().await.map_err(|e| {
            warn!(error = %e, "Data API request failed");
            Error::store(format!("data API unavailable: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Data API returned error");
            return Err(Error::store(format!("data API returned {}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| Error::store(format!("invalid data API response: {}", e)))
    }
}

#[async_trait]
impl DetectionStore for GraphQlStore {
    async fn create_detection(&self, record: &DetectionRecord) -> Result<CreateResult> {
        let body = json!({
            "query": CREATE_DETECTION,
            "variables": { "input": record },
        });

        let raw = self.post_graphql(body).await?;
        let response: CreateResponse = serde_json::from_value(raw)
            .map_err(|e| Error::store(format!("invalid createDetection response: {}", e)))?;

        // A 200 with an errors array is still a rejection (schema or auth)
        if let Some(errors) = response.errors {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            return Err(Error::store(format!(
                "createDetection rejected: {}",
                messages.join("; ")
            )));
        }

        let id = response
            .data
            .and_then(|d| d.create_detection)
            .and_then(|c| c.id);

        debug!(id = id.as_deref().unwrap_or("unknown"), "Detection persisted");

        Ok(CreateResult { id })
    }

    fn is_healthy(&self) -> bool {
        // The HTTP client is stateless; liveness comes from the
        // startup/periodic checks in `health`.
        true
    }
}
