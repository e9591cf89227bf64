//! Internal telemetry for the Birdwatch ingestion service.
//!
//! Structured logs via `tracing`, plus in-process counters and a
//! component health registry feeding the health endpoints.

pub mod health;
pub mod metrics;
pub mod tracing_setup;

pub use health::*;
pub use metrics::*;
pub use tracing_setup::*;
