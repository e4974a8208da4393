//! Error taxonomy for API calls.
//!
//! ERROR HANDLING
//! ==============
//! Classification happens exactly once, in the envelope codec, based on
//! the HTTP status. Services pass errors upward unchanged; orchestration
//! hooks inspect them only to decide credential rollback; pages render
//! them via `Display`.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// A failed API interaction, classified by cause.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Client-side or server-side input rejection (400/422).
    #[error("{0}")]
    Validation(String),
    /// Missing or rejected credentials (401/403).
    #[error("{0}")]
    Auth(String),
    /// Duplicate identity on signup (409).
    #[error("{0}")]
    Conflict(String),
    /// Any other non-2xx response.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-2xx status with the message extracted from the
    /// error envelope.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            400 | 422 => Self::Validation(message),
            401 | 403 => Self::Auth(message),
            409 => Self::Conflict(message),
            _ => Self::Server { status, message },
        }
    }

    /// Whether this error means the current credential was rejected.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}
