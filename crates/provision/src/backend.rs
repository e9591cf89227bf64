//! Backend manifest assembly.

use serde::{Deserialize, Serialize};

use crate::auth::AuthDefinition;
use crate::data::{detection_model, ModelDefinition};
use crate::storage::{audio_clip_bucket, StorageDefinition};

/// Deployment parameters for the ingestion function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDefinition {
    pub name: String,
    pub timeout_seconds: u32,
    pub memory_mb: u32,
}

/// Complete backend definition handed to the provisioning tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendDefinition {
    pub auth: AuthDefinition,
    pub models: Vec<ModelDefinition>,
    pub storage: StorageDefinition,
    pub functions: Vec<FunctionDefinition>,
}

impl BackendDefinition {
    /// The full Birdwatch backend: auth, the Detection model, the
    /// audio-clip bucket, and the ingestion function.
    pub fn birdwatch() -> Self {
        Self {
            auth: AuthDefinition::birdwatch(),
            models: vec![detection_model()],
            storage: audio_clip_bucket(),
            functions: vec![FunctionDefinition {
                name: "detection-ingest".into(),
                timeout_seconds: 30,
                memory_mb: 256,
            }],
        }
    }

    /// Serialize the manifest as pretty-printed JSON.
    pub fn to_manifest_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
