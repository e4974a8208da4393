//! Async orchestration flows composing the API services with session and
//! feed state. Pages call these from `spawn_local`; tests drive them
//! with stub services on a blocking executor.

pub mod feed;
pub mod login;
pub mod restore;
pub mod signup;
