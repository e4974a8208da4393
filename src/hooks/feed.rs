//! Feed orchestration: load the post list and publish new posts.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use crate::net::error::ApiError;
use crate::net::post_api::PostApi;
use crate::net::types::{CreatePostRequest, Post};
use crate::state::feed::FeedState;

/// Longest post body the backend accepts.
pub const MAX_POST_LEN: usize = 1000;

/// Validate a composer draft, returning the trimmed body.
///
/// # Errors
///
/// A user-facing message for an empty or oversized draft.
pub fn validate_post_content(content: &str) -> Result<String, &'static str> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err("Post cannot be empty.");
    }
    if trimmed.chars().count() > MAX_POST_LEN {
        return Err("Post is limited to 1000 characters.");
    }
    Ok(trimmed.to_owned())
}

/// Fetch the feed into `feed`. Failures are recorded on the state rather
/// than propagated; previously loaded posts stay visible.
pub async fn load_feed<P: PostApi>(api: &P, feed: &mut FeedState) {
    feed.loading = true;
    match api.list_posts().await {
        Ok(posts) => feed.loaded(posts),
        Err(err) => feed.failed(err.to_string()),
    }
}

/// Publish a validated draft and prepend the created post to the feed.
///
/// # Errors
///
/// `ApiError::Validation` for a rejected draft (never reaches the
/// network), otherwise the backend failure unchanged.
pub async fn submit_post<P: PostApi>(
    api: &P,
    feed: &mut FeedState,
    content: &str,
) -> Result<Post, ApiError> {
    let content =
        validate_post_content(content).map_err(|msg| ApiError::Validation(msg.to_owned()))?;
    let post = api.create_post(&CreatePostRequest { content }).await?;
    feed.prepend(post.clone());
    Ok(post)
}
