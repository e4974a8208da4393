//! # gosocial-client
//!
//! Leptos + WASM frontend for the GoSocial social-networking API:
//! signup/login forms, a home feed, and client-side session management
//! over the backend's versioned REST endpoints.
//!
//! This crate contains pages, components, application state, the wire
//! types, and the credential-attaching HTTP client. Auth flows live in
//! `hooks` and are exercised against stub backends in host tests.

pub mod app;
pub mod components;
pub mod config;
pub mod hooks;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
