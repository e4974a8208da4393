use futures::executor::block_on;

use super::*;
use crate::net::types::{LoginRequest, SignupRequest, User};
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

struct StubAuth {
    profile: Result<User, ApiError>,
}

impl AuthApi for StubAuth {
    async fn signup(&self, _req: &SignupRequest) -> Result<User, ApiError> {
        Err(ApiError::Network("unused in restore tests".to_owned()))
    }

    async fn login(&self, _req: &LoginRequest) -> Result<String, ApiError> {
        Err(ApiError::Network("unused in restore tests".to_owned()))
    }

    async fn fetch_profile(&self) -> Result<User, ApiError> {
        self.profile.clone()
    }
}

fn restored_session(store: &MemoryCredentials, token: &str) -> SessionState {
    store.save(token);
    let mut session = SessionState::default();
    session.restore(store);
    session
}

#[test]
fn valid_token_repopulates_profile() {
    let store = MemoryCredentials::default();
    let mut session = restored_session(&store, "abc");
    let api = StubAuth {
        profile: Ok(sample_user(9)),
    };

    block_on(revalidate_session(&api, &store, &mut session)).unwrap();

    assert!(session.is_authenticated());
    assert_eq!(session.credential(), Some("abc"));
    assert_eq!(session.user().map(|u| u.id), Some(9));
}

#[test]
fn rejected_token_is_cleared() {
    let store = MemoryCredentials::default();
    let mut session = restored_session(&store, "expired");
    let api = StubAuth {
        profile: Err(ApiError::Auth("token expired".to_owned())),
    };

    let err = block_on(revalidate_session(&api, &store, &mut session)).unwrap_err();

    assert!(err.is_auth());
    assert!(!session.is_authenticated());
    assert!(session.credential().is_none());
    assert!(store.load().is_none());
}

#[test]
fn network_failure_keeps_credential() {
    let store = MemoryCredentials::default();
    let mut session = restored_session(&store, "abc");
    let api = StubAuth {
        profile: Err(ApiError::Network("offline".to_owned())),
    };

    let err = block_on(revalidate_session(&api, &store, &mut session)).unwrap_err();

    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(session.credential(), Some("abc"));
    assert!(session.is_authenticated());
    assert!(session.user().is_none());
}

#[test]
fn no_credential_is_a_no_op() {
    let store = MemoryCredentials::default();
    let mut session = SessionState::default();
    session.restore(&store);
    let api = StubAuth {
        profile: Ok(sample_user(1)),
    };

    block_on(revalidate_session(&api, &store, &mut session)).unwrap();

    assert!(!session.is_authenticated());
    assert!(session.user().is_none());
}
