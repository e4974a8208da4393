//! Top navigation bar with the current identity and logout.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{LocalStorageCredentials, SessionState};

/// Label for the signed-in identity: the username, or a neutral fallback
/// while the profile has not been fetched yet.
pub fn identity_label(session: &SessionState) -> String {
    session
        .user()
        .map_or_else(|| "Signed in".to_owned(), |u| format!("@{}", u.username))
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.update(|state| state.set_credential(&LocalStorageCredentials, None));
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"GoSocial"</a>
            <div class="navbar__session">
                <span class="navbar__user">{move || identity_label(&session.get())}</span>
                <button class="navbar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </nav>
    }
}
