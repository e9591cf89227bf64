//! Data model definition: the Detection schema the data API enforces.

use serde::{Deserialize, Serialize};

/// Field type in the managed data schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Float,
    Datetime,
    /// Nested custom type with its own fields
    Custom(Vec<FieldDefinition>),
}

/// One field of a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
}

impl FieldDefinition {
    pub fn required(name: &str, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: true,
        }
    }

    pub fn optional(name: &str, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: false,
        }
    }
}

/// Authorization rule on a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthRule {
    /// Unauthenticated access via the deployment's public API key
    PublicApiKey,
    /// Record owner
    Owner,
    /// Any signed-in user
    Authenticated,
}

/// A model in the managed data schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDefinition {
    pub name: String,
    pub fields: Vec<FieldDefinition>,
    pub authorization: Vec<AuthRule>,
}

/// The Detection model persisted by `createDetection`.
pub fn detection_model() -> ModelDefinition {
    ModelDefinition {
        name: "Detection".into(),
        fields: vec![
            FieldDefinition::required("deviceId", FieldType::String),
            FieldDefinition::required("speciesCode", FieldType::String),
            FieldDefinition::optional("scientificName", FieldType::String),
            FieldDefinition::optional("commonName", FieldType::String),
            FieldDefinition::required("confidence", FieldType::Float),
            FieldDefinition::required("timestamp", FieldType::Datetime),
            FieldDefinition::optional(
                "location",
                FieldType::Custom(vec![
                    FieldDefinition::optional("lat", FieldType::Float),
                    FieldDefinition::optional("lon", FieldType::Float),
                ]),
            ),
            FieldDefinition::optional("audioUrl", FieldType::String),
            FieldDefinition::optional("imageUrl", FieldType::String),
        ],
        authorization: vec![AuthRule::PublicApiKey, AuthRule::Owner, AuthRule::Authenticated],
    }
}
