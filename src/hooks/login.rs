//! Login orchestration: token exchange followed by profile fetch.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login endpoint returns only a bearer token; the profile comes
//! from a second, bearer-guarded call. Because the credential is
//! committed between the two steps, a profile failure must roll it back
//! so the session never ends authenticated without a profile.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::auth_api::AuthApi;
use crate::net::error::ApiError;
use crate::net::types::{LoginRequest, User};
use crate::state::session::{CredentialStore, SessionState};

/// Run the full login flow against `session`.
///
/// Success commits the token and the fetched profile. A token-exchange
/// failure clears any stale credential; a profile-fetch failure rolls
/// back the just-committed token. Either way the session ends
/// unauthenticated on error.
///
/// Re-entry while a call is in flight is gated by the page's busy flag;
/// a second concurrent invocation would race on last-write-wins.
///
/// # Errors
///
/// The classified failure of whichever step broke, unchanged.
pub async fn run_login<A: AuthApi, C: CredentialStore>(
    api: &A,
    store: &C,
    session: &mut SessionState,
    req: &LoginRequest,
) -> Result<User, ApiError> {
    let token = match api.login(req).await {
        Ok(token) => token,
        Err(err) => {
            // A failed login never leaves a stale credential behind.
            session.set_credential(store, None);
            return Err(err);
        }
    };

    session.set_credential(store, Some(token));

    match api.fetch_profile().await {
        Ok(user) => {
            session.set_user(store, Some(user.clone()));
            Ok(user)
        }
        Err(err) => {
            // Compensating action: undo the committed credential.
            session.set_credential(store, None);
            Err(err)
        }
    }
}
