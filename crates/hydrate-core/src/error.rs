//! Error types for Hydrate core operations.
//!
//! The core absorbs most failure modes into safe defaults (see the
//! `storage` module); what remains surfaces through `HydrateError`.
//! The CLI layer maps these to user-friendly messages.

use thiserror::Error;

/// Result type alias for Hydrate operations.
pub type Result<T> = std::result::Result<T, HydrateError>;

/// Core error type for Hydrate operations.
#[derive(Debug, Error)]
pub enum HydrateError {
    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Snapshot serialization error
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Reminder scheduling error
    #[error("Scheduler error: {0}")]
    Scheduler(String),
}

impl From<std::io::Error> for HydrateError {
    fn from(err: std::io::Error) -> Self {
        HydrateError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for HydrateError {
    fn from(err: serde_json::Error) -> Self {
        HydrateError::Snapshot(err.to_string())
    }
}
