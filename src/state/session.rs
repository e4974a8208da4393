//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single source of truth for the bearer credential and user profile.
//! Route guards, the HTTP client, and user-aware components all read it;
//! only the orchestration hooks mutate it. The durable-storage slot is
//! injected through [`CredentialStore`] so flows stay testable with an
//! in-memory store instead of a browser.
//!
//! INVARIANTS
//! ==========
//! Clearing either the credential or the profile clears both, so an
//! unauthenticated state always means "both absent". Mutation goes
//! through the methods below; fields are private to keep that airtight.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;
use crate::util::storage;

/// Fixed localStorage key holding the bearer credential.
pub const CREDENTIAL_STORAGE_KEY: &str = "gosocial_auth_token";

/// Durable storage slot for the bearer credential.
///
/// The browser implementation is [`LocalStorageCredentials`]; tests
/// inject an in-memory store.
pub trait CredentialStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// [`CredentialStore`] backed by browser localStorage under
/// [`CREDENTIAL_STORAGE_KEY`]. No-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageCredentials;

impl CredentialStore for LocalStorageCredentials {
    fn load(&self) -> Option<String> {
        storage::load_string(CREDENTIAL_STORAGE_KEY)
    }

    fn save(&self, token: &str) {
        storage::save_string(CREDENTIAL_STORAGE_KEY, token);
    }

    fn clear(&self) {
        storage::remove(CREDENTIAL_STORAGE_KEY);
    }
}

/// Session tuple: credential, user profile, and the derived
/// authenticated flag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    credential: Option<String>,
    user: Option<User>,
    restored: bool,
}

impl SessionState {
    /// Current bearer credential, if any.
    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    /// Current user profile, if any.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether an identity is established: a credential awaiting profile
    /// revalidation, a profile from signup, or both after login.
    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some() || self.user.is_some()
    }

    /// Whether the startup restore pass has run. Route guards wait for
    /// this before redirecting, so a persisted session is not bounced to
    /// the login page during the first render.
    pub fn is_restored(&self) -> bool {
        self.restored
    }

    /// Install or clear the credential.
    ///
    /// `Some`: persist to durable storage and set as current. `None`:
    /// remove from durable storage and clear both credential and
    /// profile. Idempotent, no failure mode.
    pub fn set_credential<C: CredentialStore>(&mut self, store: &C, value: Option<String>) {
        match value {
            Some(token) => {
                store.save(&token);
                self.credential = Some(token);
            }
            None => {
                store.clear();
                self.credential = None;
                self.user = None;
            }
        }
    }

    /// Replace or clear the user profile.
    ///
    /// Clearing the profile also clears the credential, keeping the
    /// clearing rules symmetric with [`Self::set_credential`].
    pub fn set_user<C: CredentialStore>(&mut self, store: &C, value: Option<User>) {
        match value {
            Some(user) => self.user = Some(user),
            None => {
                store.clear();
                self.credential = None;
                self.user = None;
            }
        }
    }

    /// Startup restore: adopt the persisted credential if one exists and
    /// mark the restore pass complete. Revalidation against the backend
    /// is a separate async step (`hooks::restore`).
    pub fn restore<C: CredentialStore>(&mut self, store: &C) {
        if let Some(token) = store.load() {
            self.set_credential(store, Some(token));
        }
        self.restored = true;
    }
}

/// In-memory [`CredentialStore`] standing in for localStorage in tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemoryCredentials(std::cell::RefCell<Option<String>>);

#[cfg(test)]
impl CredentialStore for MemoryCredentials {
    fn load(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.0.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.0.borrow_mut() = None;
    }
}
