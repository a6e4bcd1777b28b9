//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Sealbox
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum SealboxError {
    /// SDK lifecycle failure (client construction, registration, identity).
    #[error("SDK error: {0}")]
    Sdk(String),

    /// Encrypt/decrypt failure reported by the session or the accelerator.
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Document picker failure other than cancellation or a duplicate request.
    #[error("Picker error: {0}")]
    Picker(String),

    /// Filesystem read/write/copy failure.
    #[error("Filesystem error: {0}")]
    Filesystem(String),

    /// Configuration loading or validation failure.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A workflow was triggered while the shell is not in the Ready state.
    #[error("Shell not ready: {0}")]
    Unavailable(String),

    /// Internal error that does not fit any other category.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Sealbox operations
pub type Result<T> = std::result::Result<T, SealboxError>;

/// Outcome classes of a document selection request.
///
/// Cancellation and duplicate requests are expected picker outcomes, not
/// failures; the selector normalizes them into a warned no-op. Only
/// `Failed` aborts the calling workflow.
#[derive(Error, Debug, Clone)]
pub enum SelectionError {
    /// The user dismissed the picker without choosing a file.
    #[error("selection cancelled by user")]
    Cancelled,

    /// A selection request was issued while another is still in flight.
    /// The newer request is dropped.
    #[error("a selection request is already in flight")]
    InProgress,

    /// Any other picker failure, propagated to the caller.
    #[error(transparent)]
    Failed(#[from] SealboxError),
}
