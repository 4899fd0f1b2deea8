//! Error types for lzring operations.
//!
//! The taxonomy is deliberately small. I/O failures from the underlying
//! reader/writer are always fatal and propagate immediately. Running off the
//! end of a compressed stream is *not* an error: reader operations return
//! `Ok(None)` for that case, which keeps clean termination structurally
//! distinct from failure.

use std::io;
use thiserror::Error;

/// The main error type for lzring operations.
#[derive(Debug, Error)]
pub enum LzRingError {
    /// I/O error from the underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Rejected codec parameters.
    #[error("Invalid codec parameters: {message}")]
    InvalidParams {
        /// Description of the rejected value.
        message: String,
    },
}

/// Result type alias for lzring operations.
pub type Result<T> = std::result::Result<T, LzRingError>;

impl LzRingError {
    /// Create an invalid parameters error.
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::InvalidParams {
            message: message.into(),
        }
    }
}
