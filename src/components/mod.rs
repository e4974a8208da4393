pub mod navbar;
pub mod post_card;
pub mod post_composer;
