//! Session revalidation after startup restore.
//!
//! `SessionState::restore` only re-adopts the persisted credential; it
//! cannot tell whether the backend still honors it. This hook closes the
//! gap with a profile fetch: success repopulates the profile, a rejected
//! credential is dropped, and a transport failure keeps the credential
//! so an offline start does not log the user out.

#[cfg(test)]
#[path = "restore_test.rs"]
mod restore_test;

use crate::net::auth_api::AuthApi;
use crate::net::error::ApiError;
use crate::state::session::{CredentialStore, SessionState};

/// Validate a restored credential by fetching the profile.
///
/// No-op when no credential was restored.
///
/// # Errors
///
/// The profile-fetch failure, after the session has been adjusted:
/// cleared for auth rejections, left intact otherwise.
pub async fn revalidate_session<A: AuthApi, C: CredentialStore>(
    api: &A,
    store: &C,
    session: &mut SessionState,
) -> Result<(), ApiError> {
    if session.credential().is_none() {
        return Ok(());
    }

    match api.fetch_profile().await {
        Ok(user) => {
            session.set_user(store, Some(user));
            Ok(())
        }
        Err(err) => {
            if err.is_auth() {
                // The backend no longer honors the stored token.
                session.set_credential(store, None);
            }
            Err(err)
        }
    }
}
