//! REST plumbing: wire DTOs, envelope codec, error taxonomy, the
//! configured HTTP client, and the auth/feed services built on it.

pub mod auth_api;
pub mod envelope;
pub mod error;
pub mod http;
pub mod post_api;
pub mod types;
