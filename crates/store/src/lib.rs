//! Data API client for the ingestion service.
//!
//! The managed data service exposes one logical operation used here:
//! `createDetection`. Everything about it besides the mutation itself
//! (authorization model, schema enforcement) is an external concern.

pub mod client;
pub mod config;
pub mod health;

pub use client::{CreateResult, DetectionStore, GraphQlStore};
pub use config::StoreConfig;
