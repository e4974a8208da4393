//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect
//! behavior, and none of them should redirect before the startup
//! restore pass has had a chance to adopt a persisted credential.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Whether a protected view should bounce to `/login`.
pub fn should_redirect_unauth(session: &SessionState) -> bool {
    session.is_restored() && !session.is_authenticated()
}

/// Redirect to `/login` whenever the session has restored and no
/// identity is present.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
