/**
 * Backend Error Types
 *
 * This module defines the error taxonomy every operation boundary converts
 * its failures into. Nothing below a handler escapes as anything else.
 *
 * # Error Categories
 *
 * - `InvalidInput` - malformed identifier or missing required field (400)
 * - `Unauthorized` - missing or invalid bearer token, bad credentials (401)
 * - `NotFound` - user or group absent (404)
 * - `Conflict` - uniqueness violation such as a taken email (409)
 * - `StoreFailure` - any unexpected store or driver error (500)
 * - `HandlerError` - any other status a handler wants to return
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::store::StoreError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use groupnotes::backend::error::BackendError;
///
/// let err = BackendError::not_found("User not found");
/// assert_eq!(err.status_code().as_u16(), 404);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Malformed identifier or missing required field
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Human-readable error message
        message: String,
    },

    /// User or group absent
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Authentication failed
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// Uniqueness violation
    #[error("Conflict: {message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// Unexpected store failure
    ///
    /// `context` is the client-facing message, the source is surfaced as the
    /// error detail.
    #[error("{context}: {source}")]
    StoreFailure {
        /// What the operation was doing
        context: String,
        /// Underlying store error
        #[source]
        source: StoreError,
    },

    /// Handler error with an explicit status
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },
}

impl BackendError {
    /// Create a new invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a new not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a new conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Wrap a store error with the message the client sees
    pub fn store(context: impl Into<String>, source: StoreError) -> Self {
        Self::StoreFailure {
            context: context.into(),
            source,
        }
    }

    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `InvalidInput` - 400 Bad Request
    /// - `Unauthorized` - 401 Unauthorized
    /// - `NotFound` - 404 Not Found
    /// - `Conflict` - 409 Conflict
    /// - `StoreFailure` - 500 Internal Server Error
    /// - `HandlerError` - Uses the status code from the error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::StoreFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::HandlerError { status, .. } => *status,
        }
    }

    /// Get the client-facing error message
    pub fn message(&self) -> String {
        match self {
            Self::InvalidInput { message }
            | Self::NotFound { message }
            | Self::Unauthorized { message }
            | Self::Conflict { message }
            | Self::HandlerError { message, .. } => message.clone(),
            Self::StoreFailure { context, .. } => context.clone(),
        }
    }

    /// Error detail surfaced alongside the message, for internal failures
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::StoreFailure { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }
}
