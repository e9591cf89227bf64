//! Declarative backend definitions for the Birdwatch deployment.
//!
//! These are static configuration data consumed by the provisioning
//! tool at deploy time. None of it runs in the ingestion path; the
//! runtime talks to the services these definitions describe.

pub mod auth;
pub mod backend;
pub mod data;
pub mod storage;

pub use auth::{AuthDefinition, PasswordPolicy};
pub use backend::{BackendDefinition, FunctionDefinition};
pub use data::{AuthRule, FieldDefinition, FieldType, ModelDefinition};
pub use storage::{AccessAction, AccessRule, Identity, StorageDefinition};
