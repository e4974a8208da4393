use futures::executor::block_on;

use super::*;
use crate::net::types::LoginRequest;
use crate::state::session::MemoryCredentials;

fn sample_user(id: i64) -> User {
    User {
        id,
        first_name: "Test".to_owned(),
        last_name: "User".to_owned(),
        username: "testuser".to_owned(),
        email: "test@example.com".to_owned(),
        created_at: "2025-01-01T00:00:00Z".to_owned(),
        updated_at: "2025-01-01T00:00:00Z".to_owned(),
        last_login: None,
    }
}

fn signup_request() -> SignupRequest {
    SignupRequest {
        first_name: "Test".to_owned(),
        last_name: "User".to_owned(),
        username: "testuser".to_owned(),
        email: "test@example.com".to_owned(),
        password: "password123".to_owned(),
    }
}

struct StubAuth {
    signup: Result<User, ApiError>,
}

impl AuthApi for StubAuth {
    async fn signup(&self, _req: &SignupRequest) -> Result<User, ApiError> {
        self.signup.clone()
    }

    async fn login(&self, _req: &LoginRequest) -> Result<String, ApiError> {
        Err(ApiError::Network("unused in signup tests".to_owned()))
    }

    async fn fetch_profile(&self) -> Result<User, ApiError> {
        Err(ApiError::Network("unused in signup tests".to_owned()))
    }
}

#[test]
fn successful_signup_commits_user() {
    let api = StubAuth {
        signup: Ok(sample_user(42)),
    };
    let store = MemoryCredentials::default();
    let mut session = SessionState::default();

    let user = block_on(run_signup(&api, &store, &mut session, &signup_request())).unwrap();

    assert_eq!(user.id, 42);
    assert!(session.is_authenticated());
    assert_eq!(session.user().map(|u| u.id), Some(42));
    // Signup issues no bearer token.
    assert!(session.credential().is_none());
}

#[test]
fn duplicate_username_leaves_session_unauthenticated() {
    let api = StubAuth {
        signup: Err(ApiError::Conflict("Username already exists".to_owned())),
    };
    let store = MemoryCredentials::default();
    let mut session = SessionState::default();

    let err = block_on(run_signup(&api, &store, &mut session, &signup_request())).unwrap_err();

    assert_eq!(err.to_string(), "Username already exists");
    assert!(!session.is_authenticated());
    assert!(session.user().is_none());
}

#[test]
fn server_error_propagates_unchanged() {
    let api = StubAuth {
        signup: Err(ApiError::Server {
            status: 500,
            message: "internal".to_owned(),
        }),
    };
    let store = MemoryCredentials::default();
    let mut session = SessionState::default();

    let err = block_on(run_signup(&api, &store, &mut session, &signup_request())).unwrap_err();

    assert!(matches!(err, ApiError::Server { status: 500, .. }));
    assert!(!session.is_authenticated());
}
