//! Shared wire DTOs for the GoSocial REST API.
//!
//! DESIGN
//! ======
//! These types intentionally mirror the backend's JSON contract so serde
//! round-trips stay lossless: success bodies arrive wrapped in a
//! `{"data": ...}` envelope, error bodies in `{"errors": [...]}`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A user record as returned by the auth and profile endpoints.
///
/// The password field is never serialized by the backend and has no
/// counterpart here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// ISO 8601 last-update timestamp.
    pub updated_at: String,
    /// ISO 8601 timestamp of the last login, if the user has logged in.
    #[serde(default)]
    pub last_login: Option<String>,
}

/// A feed post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Unique post identifier.
    pub id: i64,
    /// Author's user identifier.
    pub user_id: i64,
    /// Post body text.
    pub content: String,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// ISO 8601 last-update timestamp.
    pub updated_at: String,
}

/// Request body for `POST /auth/signup`, sent wrapped as `{"data": ...}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/login`, sent flat.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Success payload of `POST /auth/login`: the bearer credential to attach
/// to subsequent requests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Request body for `POST /posts`, sent wrapped as `{"data": ...}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub content: String,
}
