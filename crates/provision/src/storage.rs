//! Blob storage definition: the bucket for short bird audio clips.

use serde::{Deserialize, Serialize};

/// Identity class an access rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Identity {
    Authenticated,
    Guest,
}

/// Action granted by an access rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessAction {
    Read,
    Write,
}

/// One path-scoped access rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessRule {
    pub path: String,
    pub identity: Identity,
    pub actions: Vec<AccessAction>,
}

/// A storage bucket with its access rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageDefinition {
    pub name: String,
    pub access: Vec<AccessRule>,
}

/// The audio-clip bucket devices upload into.
pub fn audio_clip_bucket() -> StorageDefinition {
    let rw = vec![AccessAction::Read, AccessAction::Write];
    StorageDefinition {
        name: "birdnet-audio-clips".into(),
        access: vec![
            AccessRule {
                path: "audio/*".into(),
                identity: Identity::Authenticated,
                actions: rw.clone(),
            },
            AccessRule {
                path: "audio/*".into(),
                identity: Identity::Guest,
                actions: rw,
            },
        ],
    }
}
