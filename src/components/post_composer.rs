//! Composer for publishing a new feed post.

use leptos::prelude::*;

use crate::hooks::feed::validate_post_content;
use crate::state::feed::FeedState;

#[component]
pub fn PostComposer() -> impl IntoView {
    let feed = expect_context::<RwSignal<FeedState>>();
    let draft = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        // Reject locally before touching the network.
        if let Err(msg) = validate_post_content(&draft.get()) {
            error.set(msg.to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let content = draft.get();
            leptos::task::spawn_local(async move {
                use crate::config::API_BASE;
                use crate::net::http::ApiClient;
                use crate::net::post_api::HttpPostApi;
                use crate::state::session::LocalStorageCredentials;

                let api = HttpPostApi::new(ApiClient::new(API_BASE, LocalStorageCredentials));
                let mut state = feed.get_untracked();
                let result = crate::hooks::feed::submit_post(&api, &mut state, &content).await;
                feed.set(state);
                match result {
                    Ok(_) => draft.set(String::new()),
                    Err(e) => error.set(e.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = feed;
            busy.set(false);
        }
    };

    view! {
        <form class="post-composer" on:submit=on_submit>
            <textarea
                class="post-composer__input"
                placeholder="What's on your mind?"
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
            ></textarea>
            <div class="post-composer__actions">
                <Show when=move || !error.get().is_empty()>
                    <span class="post-composer__error">{move || error.get()}</span>
                </Show>
                <button class="post-composer__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Posting..." } else { "Post" }}
                </button>
            </div>
        </form>
    }
}
