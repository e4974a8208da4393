//! Login page: email + password form driving the login flow.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::types::LoginRequest;
use crate::state::session::SessionState;

/// Validate the login form, returning the request to send.
///
/// Password length is only sanity-checked here; the backend owns the
/// real policy.
///
/// # Errors
///
/// A user-facing message for the first failing field.
pub fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Invalid email address.");
    }
    if password.len() < 3 {
        return Err("Password is required.");
    }
    Ok(LoginRequest {
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // In-flight gate: a second submit while pending is ignored.
        if busy.get() {
            return;
        }
        let req = match validate_login_input(&email.get(), &password.get()) {
            Ok(req) => req,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                use crate::config::API_BASE;
                use crate::net::auth_api::HttpAuthApi;
                use crate::net::http::ApiClient;
                use crate::state::session::LocalStorageCredentials;

                let api = HttpAuthApi::new(ApiClient::new(API_BASE, LocalStorageCredentials));
                let mut state = session.get_untracked();
                let result =
                    crate::hooks::login::run_login(&api, &LocalStorageCredentials, &mut state, &req)
                        .await;
                session.set(state);
                match result {
                    Ok(_) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/");
                        }
                    }
                    Err(e) => {
                        error.set(e.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (req, session);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"GoSocial"</h1>
                <p class="login-card__subtitle">"Enter your credentials to access your account."</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-form__label">
                        "Email"
                        <input
                            class="login-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-form__label">
                        "Password"
                        <input
                            class="login-input"
                            type="password"
                            placeholder="********"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging In..." } else { "Login" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "No account yet? "
                    <a href="/signup">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
