//! Home page: the authenticated feed.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::components::post_card::PostCard;
use crate::components::post_composer::PostComposer;
use crate::state::feed::FeedState;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

/// Placeholder line to show instead of the post list, if any.
pub fn feed_placeholder(feed: &FeedState) -> Option<&'static str> {
    if feed.loading {
        return Some("Loading posts...");
    }
    if feed.posts.is_empty() {
        return Some("No posts yet. Be the first to share something.");
    }
    None
}

/// Home page — guarded feed with a composer on top.
/// Redirects to `/login` if no session is present once restore has run.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let feed = expect_context::<RwSignal<FeedState>>();
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate);

    // Initial feed fetch on mount.
    #[cfg(feature = "hydrate")]
    {
        feed.update(|state| state.loading = true);
        leptos::task::spawn_local(async move {
            use crate::config::API_BASE;
            use crate::net::http::ApiClient;
            use crate::net::post_api::HttpPostApi;
            use crate::state::session::LocalStorageCredentials;

            let api = HttpPostApi::new(ApiClient::new(API_BASE, LocalStorageCredentials));
            let mut state = feed.get_untracked();
            crate::hooks::feed::load_feed(&api, &mut state).await;
            feed.set(state);
        });
    }

    view! {
        <div class="home-page">
            <Navbar/>
            <main class="home-page__feed">
                <PostComposer/>
                <Show when=move || feed.get().error.is_some()>
                    <p class="feed-message feed-message--error">
                        {move || feed.get().error.unwrap_or_default()}
                    </p>
                </Show>
                {move || {
                    let state = feed.get();
                    feed_placeholder(&state).map_or_else(
                        || {
                            view! {
                                <div class="feed-list">
                                    {state
                                        .posts
                                        .iter()
                                        .cloned()
                                        .map(|post| view! { <PostCard post=post/> })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                                .into_any()
                        },
                        |placeholder| {
                            view! { <p class="feed-message">{placeholder}</p> }.into_any()
                        },
                    )
                }}
            </main>
        </div>
    }
}
