//! Core types and validation for the Birdwatch ingestion service.

pub mod error;
pub mod limits;
pub mod report;

pub use error::{Error, Result};
pub use report::*;
