//! Error types for event dispatch and trace persistence.

use thiserror::Error;

/// Errors produced while forwarding a matched event.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The bound callback reported failure.
    ///
    /// The underlying error is opaque to the dispatch core and propagated
    /// verbatim; there is no retry.
    #[error("callback failed: {0}")]
    Callback(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl DispatchError {
    /// Wraps an arbitrary error as a callback failure.
    pub fn callback(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        DispatchError::Callback(err.into())
    }
}

/// Errors produced while saving or loading a dispatch trace.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed trace file: {0}")]
    Malformed(#[from] serde_json::Error),
}
