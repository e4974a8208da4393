//! Feed state: the loaded post list and its fetch status.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use crate::net::types::Post;

/// Home-feed state driven by the feed hooks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedState {
    pub posts: Vec<Post>,
    pub loading: bool,
    pub error: Option<String>,
}

impl FeedState {
    /// Replace the feed with a fresh fetch result.
    pub fn loaded(&mut self, posts: Vec<Post>) {
        self.posts = posts;
        self.loading = false;
        self.error = None;
    }

    /// Record a fetch failure, keeping any previously loaded posts.
    pub fn failed(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Insert a freshly created post at the top of the feed.
    pub fn prepend(&mut self, post: Post) {
        self.posts.insert(0, post);
    }
}
