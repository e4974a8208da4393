//! Reusable card component for feed posts.

#[cfg(test)]
#[path = "post_card_test.rs"]
mod post_card_test;

use leptos::prelude::*;

use crate::net::types::Post;

/// Author line for a post. The list endpoint carries only the author's
/// id, so the label is an id reference rather than a username.
pub fn author_label(user_id: i64) -> String {
    format!("User #{user_id}")
}

/// Human-readable timestamp: the date portion of an ISO 8601 string.
/// Falls back to the raw value for anything unexpected.
pub fn format_timestamp(iso: &str) -> &str {
    iso.split_once('T').map_or(iso, |(date, _)| date)
}

/// A card showing one post: author line, timestamps, and body.
#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let updated = (post.updated_at != post.created_at)
        .then(|| format!(" | Updated: {}", format_timestamp(&post.updated_at)));

    view! {
        <article class="post-card">
            <header class="post-card__header">
                <span class="post-card__author">{author_label(post.user_id)}</span>
                <span class="post-card__dates">
                    {format!("Posted on: {}", format_timestamp(&post.created_at))}
                    {updated}
                </span>
            </header>
            <p class="post-card__content">{post.content}</p>
        </article>
    }
}
