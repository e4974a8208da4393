//! Signup orchestration.
//!
//! Single-step variant of the login flow: there is no secondary call, so
//! no compensating action is needed. The backend returns the created
//! user (session cookies, not a token), so signup establishes the
//! profile without a bearer credential.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use crate::net::auth_api::AuthApi;
use crate::net::error::ApiError;
use crate::net::types::{SignupRequest, User};
use crate::state::session::{CredentialStore, SessionState};

/// Create an account and commit the returned user to the session.
///
/// # Errors
///
/// The classified backend failure, unchanged; the session is untouched
/// on error.
pub async fn run_signup<A: AuthApi, C: CredentialStore>(
    api: &A,
    store: &C,
    session: &mut SessionState,
    req: &SignupRequest,
) -> Result<User, ApiError> {
    let user = api.signup(req).await?;
    session.set_user(store, Some(user.clone()));
    Ok(user)
}
