use super::*;
use crate::net::types::{TokenResponse, User};

fn user_body(id: i64) -> String {
    format!(
        r#"{{"data":{{
            "id": {id},
            "first_name": "Test",
            "last_name": "User",
            "username": "testuser",
            "email": "test@example.com",
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z",
            "last_login": null
        }}}}"#
    )
}

// =============================================================
// Success envelope
// =============================================================

#[test]
fn status_200_unwraps_user_envelope() {
    let user: User = decode_response(200, &user_body(123)).unwrap();
    assert_eq!(user.id, 123);
    assert_eq!(user.email, "test@example.com");
}

#[test]
fn status_201_unwraps_created_resource() {
    let user: User = decode_response(201, &user_body(7)).unwrap();
    assert_eq!(user.id, 7);
}

#[test]
fn status_200_unwraps_token_envelope() {
    let resp: TokenResponse =
        decode_response(200, r#"{"data":{"token":"mock-jwt-token"}}"#).unwrap();
    assert_eq!(resp.token, "mock-jwt-token");
}

#[test]
fn malformed_success_body_is_decode_error() {
    let result: Result<User, ApiError> = decode_response(200, r#"{"data":{"id":"nope"}}"#);
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[test]
fn empty_success_body_is_decode_error() {
    let result: Result<TokenResponse, ApiError> = decode_response(200, "");
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

// =============================================================
// Error envelope
// =============================================================

#[test]
fn status_409_surfaces_conflict_message() {
    let body = r#"{"errors":[{"message":"Username already exists"}]}"#;
    let result: Result<User, ApiError> = decode_response(409, body);
    assert_eq!(
        result,
        Err(ApiError::Conflict("Username already exists".to_owned()))
    );
}

#[test]
fn status_401_surfaces_auth_message() {
    let body = r#"{"errors":[{"code":"UNAUTHORIZED","message":"Invalid email or password."}]}"#;
    let result: Result<TokenResponse, ApiError> = decode_response(401, body);
    assert_eq!(
        result,
        Err(ApiError::Auth("Invalid email or password.".to_owned()))
    );
}

#[test]
fn status_400_with_field_detail_surfaces_validation() {
    let body =
        r#"{"errors":[{"code":"VALIDATION_ERROR","message":"Email format is invalid.","field":"email"}]}"#;
    let result: Result<User, ApiError> = decode_response(400, body);
    assert_eq!(
        result,
        Err(ApiError::Validation("Email format is invalid.".to_owned()))
    );
}

#[test]
fn status_500_without_body_synthesizes_message() {
    let result: Result<User, ApiError> = decode_response(500, "");
    assert_eq!(
        result,
        Err(ApiError::Server {
            status: 500,
            message: "request failed with status 500".to_owned()
        })
    );
}

#[test]
fn error_message_picks_first_of_multiple() {
    let body = r#"{"errors":[{"message":"first"},{"message":"second"}]}"#;
    assert_eq!(error_message(400, body), "first");
}

#[test]
fn error_message_falls_back_on_malformed_body() {
    assert_eq!(error_message(503, "<html>"), "request failed with status 503");
}
