//! Feed service: list and create posts.
//!
//! Same split as the auth service: real HTTP under `hydrate`, stubs
//! elsewhere. Both endpoints sit behind the backend's auth middleware,
//! so the shared client's bearer attachment applies.

#[cfg(test)]
#[path = "post_api_test.rs"]
mod post_api_test;

#[cfg(feature = "hydrate")]
use super::envelope::Envelope;
use super::error::ApiError;
use super::http::ApiClient;
use super::types::{CreatePostRequest, Post};
use crate::state::session::CredentialStore;

pub(crate) const POSTS_PATH: &str = "/posts";

/// Domain-level feed operations.
// Single-threaded WASM target: no Send bound wanted on the futures.
#[allow(async_fn_in_trait)]
pub trait PostApi {
    /// Fetch the feed, newest first as returned by the backend.
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError>;
    /// Publish a post; resolves to the created record.
    async fn create_post(&self, req: &CreatePostRequest) -> Result<Post, ApiError>;
}

/// [`PostApi`] over the shared HTTP client.
#[derive(Clone, Debug)]
pub struct HttpPostApi<C> {
    client: ApiClient<C>,
}

impl<C: CredentialStore> HttpPostApi<C> {
    pub fn new(client: ApiClient<C>) -> Self {
        Self { client }
    }
}

impl<C: CredentialStore> PostApi for HttpPostApi<C> {
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.client.get_json(POSTS_PATH).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &self.client;
            Err(not_available())
        }
    }

    async fn create_post(&self, req: &CreatePostRequest) -> Result<Post, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = Envelope { data: req.clone() };
            self.client.post_json(POSTS_PATH, &body).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = req;
            Err(not_available())
        }
    }
}

#[cfg(not(feature = "hydrate"))]
fn not_available() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}
