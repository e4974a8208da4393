//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{home::HomePage, login::LoginPage, signup::SignupPage};
use crate::state::feed::FeedState;
use crate::state::session::{LocalStorageCredentials, SessionState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and feed contexts, restores a persisted session
/// before the first render, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Restore the persisted credential synchronously so route guards see
    // it on the first pass, then revalidate it against the backend.
    let session = RwSignal::new({
        let mut state = SessionState::default();
        state.restore(&LocalStorageCredentials);
        state
    });
    let feed = RwSignal::new(FeedState::default());

    provide_context(session);
    provide_context(feed);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            use crate::config::API_BASE;
            use crate::net::auth_api::HttpAuthApi;
            use crate::net::http::ApiClient;

            let api = HttpAuthApi::new(ApiClient::new(API_BASE, LocalStorageCredentials));
            let mut state = session.get_untracked();
            if let Err(e) =
                crate::hooks::restore::revalidate_session(&api, &LocalStorageCredentials, &mut state)
                    .await
            {
                log::warn!("session revalidation failed: {e}");
            }
            session.set(state);
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/gosocial-client.css"/>
        <Title text="GoSocial"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
