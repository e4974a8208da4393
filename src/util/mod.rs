//! Small shared helpers: route guarding and localStorage glue.

pub mod auth;
pub mod storage;
