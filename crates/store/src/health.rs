//! Data API health checks.

use serde_json::json;
use tracing::{debug, error};

use crate::client::GraphQlStore;

/// Check data API connection health with a minimal query.
pub async fn check_connection(store: &GraphQlStore) -> bool {
    let probe = json!({ "query": "query { __typename }" });

    match store.post_graphql(probe).await {
        Ok(_) => {
            debug!("Data API connection healthy");
            true
        }
        Err(e) => {
            error!("Data API health check failed: {}", e);
            false
        }
    }
}
