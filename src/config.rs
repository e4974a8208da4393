//! Client configuration.
//!
//! The API is served same-origin under a versioned prefix, so the base
//! is a path rather than a full URL. Deployments that front the API
//! elsewhere rebuild with a different constant.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Versioned API prefix every request path is joined onto.
pub const API_BASE: &str = "/api/v1";
