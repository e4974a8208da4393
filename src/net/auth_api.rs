//! Auth service: signup, login, and profile fetch.
//!
//! Client-side (hydrate): real HTTP calls via the shared [`ApiClient`].
//! Server-side (SSR) and host tests: stubs returning `ApiError::Network`
//! since these endpoints are only meaningful in the browser.
//!
//! The service does no error translation — the classified failure from
//! the envelope codec is propagated unchanged; the orchestration hooks
//! are the only place that inspects outcomes.

#[cfg(test)]
#[path = "auth_api_test.rs"]
mod auth_api_test;

use super::error::ApiError;
use super::http::ApiClient;
use super::types::{LoginRequest, SignupRequest, User};
#[cfg(feature = "hydrate")]
use super::{envelope::Envelope, types::TokenResponse};
use crate::state::session::CredentialStore;

pub(crate) const SIGNUP_PATH: &str = "/auth/signup";
pub(crate) const LOGIN_PATH: &str = "/auth/login";
pub(crate) const PROFILE_PATH: &str = "/users";

/// Domain-level auth operations, implemented over HTTP in production and
/// by stubs in flow tests.
// Single-threaded WASM target: no Send bound wanted on the futures.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Create an account; resolves to the created user.
    async fn signup(&self, req: &SignupRequest) -> Result<User, ApiError>;
    /// Exchange credentials for a bearer token.
    async fn login(&self, req: &LoginRequest) -> Result<String, ApiError>;
    /// Fetch the authenticated user's profile; requires a stored
    /// credential for the bearer header.
    async fn fetch_profile(&self) -> Result<User, ApiError>;
}

/// [`AuthApi`] over the shared HTTP client.
#[derive(Clone, Debug)]
pub struct HttpAuthApi<C> {
    client: ApiClient<C>,
}

impl<C: CredentialStore> HttpAuthApi<C> {
    pub fn new(client: ApiClient<C>) -> Self {
        Self { client }
    }
}

impl<C: CredentialStore> AuthApi for HttpAuthApi<C> {
    async fn signup(&self, req: &SignupRequest) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            // Signup bodies are wrapped in the request envelope.
            let body = Envelope { data: req.clone() };
            self.client.post_json(SIGNUP_PATH, &body).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = req;
            Err(not_available())
        }
    }

    async fn login(&self, req: &LoginRequest) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            // Login bodies are sent flat, not enveloped.
            let resp: TokenResponse = self.client.post_json(LOGIN_PATH, req).await?;
            Ok(resp.token)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = req;
            Err(not_available())
        }
    }

    async fn fetch_profile(&self) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.client.get_json(PROFILE_PATH).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &self.client;
            Err(not_available())
        }
    }
}

#[cfg(not(feature = "hydrate"))]
fn not_available() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}
