//! Error types for the audio backend boundary
//!
//! Engine operations themselves are total: backend failures are caught at
//! the seam, logged, and never propagated to callers.

use thiserror::Error;

/// Errors surfaced by an audio backend
#[derive(Debug, Error)]
pub enum BackendError {
    /// The native play() call was rejected (autoplay policy, missing
    /// permissions, corrupt source)
    #[error("playback rejected: {0}")]
    Rejected(String),

    /// play() was issued with no source loaded
    #[error("no source loaded")]
    NoSource,
}

/// Result type for backend operations
pub type Result<T> = std::result::Result<T, BackendError>;
