//! Livecap Error Types
//!
//! Centralized error handling for the caption utilities.

use thiserror::Error;

/// Central error type for livecap
#[derive(Error, Debug)]
pub enum LivecapError {
    #[error("Memory watchdog error: {0}")]
    Memory(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for livecap operations
pub type LivecapResult<T> = Result<T, LivecapError>;
