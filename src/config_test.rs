use super::*;
use crate::net::http::join_url;

#[test]
fn api_base_has_no_trailing_slash() {
    assert!(!API_BASE.ends_with('/'));
}

#[test]
fn login_endpoint_matches_backend_route() {
    assert_eq!(join_url(API_BASE, "/auth/login"), "/api/v1/auth/login");
}
