//! Signup page: account-creation form driving the signup flow.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::net::types::SignupRequest;
use crate::state::session::SessionState;

/// Validate the signup form against the backend's field rules, returning
/// the request to send.
///
/// # Errors
///
/// A user-facing message for the first failing field.
pub fn validate_signup_input(
    first_name: &str,
    last_name: &str,
    username: &str,
    email: &str,
    password: &str,
) -> Result<SignupRequest, &'static str> {
    let first_name = first_name.trim();
    let last_name = last_name.trim();
    let username = username.trim();
    let email = email.trim();

    if !(3..=50).contains(&first_name.chars().count()) {
        return Err("First name must be 3-50 characters.");
    }
    if !(3..=50).contains(&last_name.chars().count()) {
        return Err("Last name must be 3-50 characters.");
    }
    if !(3..=50).contains(&username.chars().count()) {
        return Err("Username must be 3-50 characters.");
    }
    if !username.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err("Username may only contain letters and digits.");
    }
    if email.is_empty() || !email.contains('@') || email.chars().count() > 50 {
        return Err("Invalid email address.");
    }
    if !(8..=50).contains(&password.chars().count()) {
        return Err("Password must be 8-50 characters.");
    }

    Ok(SignupRequest {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let req = match validate_signup_input(
            &first_name.get(),
            &last_name.get(),
            &username.get(),
            &email.get(),
            &password.get(),
        ) {
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
                let result = crate::hooks::signup::run_signup(
                    &api,
                    &LocalStorageCredentials,
                    &mut state,
                    &req,
                )
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
        <div class="signup-page">
            <div class="signup-card">
                <h1>"Create your account"</h1>
                <form class="signup-form" on:submit=on_submit>
                    <label class="signup-form__label">
                        "First name"
                        <input
                            class="signup-input"
                            type="text"
                            prop:value=move || first_name.get()
                            on:input=move |ev| first_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="signup-form__label">
                        "Last name"
                        <input
                            class="signup-input"
                            type="text"
                            prop:value=move || last_name.get()
                            on:input=move |ev| last_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="signup-form__label">
                        "Username"
                        <input
                            class="signup-input"
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="signup-form__label">
                        "Email"
                        <input
                            class="signup-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="signup-form__label">
                        "Password"
                        <input
                            class="signup-input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="signup-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing Up..." } else { "Sign Up" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="signup-message signup-message--error">{move || error.get()}</p>
                </Show>
                <p class="signup-card__footer">
                    "Already have an account? "
                    <a href="/login">"Login"</a>
                </p>
            </div>
        </div>
    }
}
