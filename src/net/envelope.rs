//! Codec for the backend's response envelopes.
//!
//! Success bodies are `{"data": T}`; failures are
//! `{"errors": [{"code"?, "message", "field"?}]}`. Decoding is pure so
//! the full classification path is testable against literal JSON without
//! a network stack.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// Success wrapper used by every 2xx endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// One entry of the error envelope.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub code: Option<String>,
    pub message: String,
    #[serde(default)]
    pub field: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    errors: Vec<ErrorDetail>,
}

/// Decode a completed HTTP exchange into `T` or an [`ApiError`].
///
/// 2xx bodies are unwrapped from the `data` envelope; everything else is
/// classified by status with the first envelope message, falling back to
/// a generic label when the error body is absent or malformed.
///
/// # Errors
///
/// Returns `ApiError::Decode` for a 2xx body that does not match `T`,
/// and the status-classified variant for any non-2xx response.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if (200..300).contains(&status) {
        let envelope: Envelope<T> =
            serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        return Ok(envelope.data);
    }
    Err(ApiError::from_status(status, error_message(status, body)))
}

/// Extract the first error message from a failure body, or synthesize a
/// status-based fallback.
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|env| env.errors.into_iter().next())
        .map_or_else(|| format!("request failed with status {status}"), |d| d.message)
}
