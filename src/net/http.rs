//! Configured HTTP client with credential attachment.
//!
//! DESIGN
//! ======
//! One client instance carries the API base path and the injected
//! credential store. Every outbound request re-reads the store, so a
//! credential committed by the login flow is attached to the very next
//! call and a cleared credential stops being sent immediately. There is
//! no response-path interceptor: a 401 surfaces to the caller as
//! `ApiError::Auth` with no retry or refresh.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

#[cfg(feature = "hydrate")]
use serde::Serialize;
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

#[cfg(feature = "hydrate")]
use super::envelope::decode_response;
#[cfg(feature = "hydrate")]
use super::error::ApiError;
use crate::state::session::CredentialStore;

/// Join the API base path with an endpoint path, normalizing the
/// separating slash.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Header value attaching `token` as a bearer credential.
pub fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Request client bound to one API base path and one credential store.
#[derive(Clone, Debug)]
pub struct ApiClient<C> {
    base: String,
    credentials: C,
}

impl<C: CredentialStore> ApiClient<C> {
    pub fn new(base: impl Into<String>, credentials: C) -> Self {
        Self {
            base: base.into(),
            credentials,
        }
    }

    /// Absolute path for an endpoint under this client's base.
    pub fn endpoint(&self, path: &str) -> String {
        join_url(&self.base, path)
    }

    /// `Authorization` header value for the next request, when a
    /// credential is currently stored.
    pub fn auth_header(&self) -> Option<String> {
        self.credentials.load().map(|token| bearer_value(&token))
    }

    /// `GET` an endpoint and decode the `{"data": ...}` envelope.
    ///
    /// # Errors
    ///
    /// `ApiError::Network` when no response arrives; otherwise whatever
    /// the envelope codec classifies.
    #[cfg(feature = "hydrate")]
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let mut request = gloo_net::http::Request::get(&self.endpoint(path));
        if let Some(value) = self.auth_header() {
            request = request.header("Authorization", &value);
        }
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_response(status, &body)
    }

    /// `POST` a JSON body to an endpoint and decode the `{"data": ...}`
    /// envelope.
    ///
    /// # Errors
    ///
    /// `ApiError::Network` when serialization or transport fails;
    /// otherwise whatever the envelope codec classifies.
    #[cfg(feature = "hydrate")]
    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let mut request = gloo_net::http::Request::post(&self.endpoint(path));
        if let Some(value) = self.auth_header() {
            request = request.header("Authorization", &value);
        }
        let response = request
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_response(status, &body)
    }
}
