//! Data API configuration.

use serde::{Deserialize, Serialize};

/// Data API client configuration.
///
/// Endpoint and credentials are environment-supplied; the service never
/// hardcodes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// GraphQL endpoint of the managed data service
    pub endpoint: String,
    /// API key sent in the `x-api-key` header (optional)
    pub api_key: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:4000/graphql".to_string(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}
