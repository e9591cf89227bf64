//! Unified error type for the ingestion service.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the ingestion service.
#[derive(Debug, Error)]
pub enum Error {
    /// Report failed the required-field invariant, or the payload could
    /// not be parsed at all.
    #[error("validation error: {0}")]
    Validation(String),

    /// Downstream data API rejected or never received the record.
    #[error("store error: {0}")]
    Store(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Get the HTTP status code for this error.
    ///
    /// Validation failures are the only client errors; a store failure
    /// is surfaced as 502 so the trigger bridge can apply its own retry.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Store(_) => 502,
            Self::Config(_) => 500,
        }
    }
}
