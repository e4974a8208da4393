use super::*;

// =============================================================
// User
// =============================================================

#[test]
fn user_decodes_backend_json() {
    let json = r#"{
        "id": 1,
        "first_name": "Mock",
        "last_name": "User",
        "username": "mockuser",
        "email": "mock@example.com",
        "created_at": "2025-01-01T00:00:00Z",
        "updated_at": "2025-01-01T00:00:00Z",
        "last_login": null
    }"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.username, "mockuser");
    assert!(user.last_login.is_none());
}

#[test]
fn user_decodes_without_last_login_field() {
    let json = r#"{
        "id": 2,
        "first_name": "A",
        "last_name": "B",
        "username": "ab",
        "email": "a@b.com",
        "created_at": "2025-01-01T00:00:00Z",
        "updated_at": "2025-01-01T00:00:00Z"
    }"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert!(user.last_login.is_none());
}

#[test]
fn user_decodes_last_login_timestamp() {
    let json = r#"{
        "id": 3,
        "first_name": "A",
        "last_name": "B",
        "username": "ab",
        "email": "a@b.com",
        "created_at": "2025-01-01T00:00:00Z",
        "updated_at": "2025-01-02T00:00:00Z",
        "last_login": "2025-01-03T09:30:00Z"
    }"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.last_login.as_deref(), Some("2025-01-03T09:30:00Z"));
}

// =============================================================
// Post
// =============================================================

#[test]
fn post_decodes_backend_json() {
    let json = r#"{
        "id": 10,
        "user_id": 1,
        "content": "hello feed",
        "created_at": "2025-01-01T00:00:00Z",
        "updated_at": "2025-01-01T00:00:00Z"
    }"#;
    let post: Post = serde_json::from_str(json).unwrap();
    assert_eq!(post.id, 10);
    assert_eq!(post.user_id, 1);
    assert_eq!(post.content, "hello feed");
}

// =============================================================
// Requests
// =============================================================

#[test]
fn signup_request_serializes_snake_case_fields() {
    let req = SignupRequest {
        first_name: "Test".to_owned(),
        last_name: "User".to_owned(),
        username: "testuser".to_owned(),
        email: "test@example.com".to_owned(),
        password: "password123".to_owned(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["first_name"], "Test");
    assert_eq!(value["last_name"], "User");
    assert_eq!(value["password"], "password123");
}

#[test]
fn login_request_serializes_flat() {
    let req = LoginRequest {
        email: "test@example.com".to_owned(),
        password: "password123".to_owned(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["email"], "test@example.com");
    assert_eq!(value["password"], "password123");
}

#[test]
fn token_response_decodes() {
    let resp: TokenResponse = serde_json::from_str(r#"{"token":"mock-jwt-token"}"#).unwrap();
    assert_eq!(resp.token, "mock-jwt-token");
}
