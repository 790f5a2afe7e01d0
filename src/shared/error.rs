//! Shared Error Types
//!
//! Failures raised by the plain-data types in `shared`. The server maps
//! these to its own client-facing messages.
use thiserror::Error;

/// Errors produced by shared types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Input is not 24 hex characters
    #[error("invalid user ID format: {input:?}")]
    InvalidUserId {
        /// The rejected text
        input: String,
    },
}
