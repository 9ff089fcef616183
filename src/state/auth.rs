#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

/// Key of the session-scoped slot holding the serialized [`User`] record.
pub const SESSION_KEY: &str = "user";

#[cfg(feature = "dev-login")]
const DEV_LOGIN_EMAIL: &str = "test@example.com";
#[cfg(feature = "dev-login")]
const DEV_LOGIN_PASSWORD: &str = "1234";

/// The single authenticated-user record.
///
/// An empty `id` is the "not authenticated" sentinel; every downstream
/// reader keys off that predicate rather than an `Option`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub password: String,
    pub loading: bool,
    pub message: String,
}

impl User {
    pub fn is_authenticated(&self) -> bool {
        !self.id.is_empty()
    }
}

/// Session-scoped key-value slot mirroring the in-memory [`User`] record.
///
/// Backed by browser `sessionStorage` in the app ([`crate::util::session`])
/// and by an in-memory slot in tests.
pub trait SessionStore {
    fn read(&self) -> Option<String>;
    fn write(&mut self, value: &str);
    fn remove(&mut self);
}

/// Owner of the single [`User`] record.
///
/// All transitions go through this type so the persisted copy never
/// diverges from a settled (non-pending) in-memory state: success and
/// logout write through, failure leaves the persisted copy untouched.
#[derive(Clone, Debug)]
pub struct AuthSession<S> {
    user: User,
    store: S,
    restored: bool,
}

impl<S: SessionStore> AuthSession<S> {
    pub fn new(store: S) -> Self {
        Self {
            user: User::default(),
            store,
            restored: false,
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_authenticated()
    }

    /// Hydrate the record from the persisted copy.
    ///
    /// Runs at most once per session, before any reader observes the
    /// record. A missing persisted copy is a no-op; a corrupt one is
    /// treated as absent.
    pub fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;

        if let Some(raw) = self.store.read() {
            match serde_json::from_str::<User>(&raw) {
                Ok(user) => self.user = user,
                // Fail open: a record we cannot parse is as good as none.
                Err(_) => self.store.remove(),
            }
        }
    }

    /// Mark an authentication exchange as in flight.
    ///
    /// Must be called synchronously before the network request is issued
    /// so no reader observes a resolved outcome while `loading` is false.
    pub fn begin_login(&mut self) {
        self.user.loading = true;
    }

    /// Settle the in-flight exchange as authenticated.
    ///
    /// Stores the session token, drops the password and any stale error
    /// text, and writes the full record through to the persisted copy.
    pub fn resolve_success(&mut self, token: &str) {
        self.user.id = token.to_owned();
        self.user.password = String::new();
        self.user.message = String::new();
        self.user.loading = false;
        self.persist();
    }

    /// Settle the in-flight exchange as rejected or unreachable.
    ///
    /// `id` keeps its prior value and the persisted copy is not touched;
    /// the error surfaces only as display text.
    pub fn resolve_failure(&mut self, message: &str) {
        self.user.loading = false;
        self.user.message = message.to_owned();
    }

    /// Local-development bypass: authenticate synchronously when the
    /// credentials match the fixed development pair.
    ///
    /// Returns `true` if the bypass applied. Unlike the real exchange the
    /// `id` is the email itself, but the password is still cleared before
    /// the write-through.
    #[cfg(feature = "dev-login")]
    pub fn login_dev(&mut self, email: &str, password: &str) -> bool {
        if email != DEV_LOGIN_EMAIL || password != DEV_LOGIN_PASSWORD {
            return false;
        }
        self.user = User {
            id: email.to_owned(),
            ..User::default()
        };
        self.persist();
        true
    }

    /// Reset to the sentinel record and delete the persisted copy.
    ///
    /// Idempotent; has no failure mode.
    pub fn logout(&mut self) {
        self.user = User::default();
        self.store.remove();
    }

    fn persist(&mut self) {
        if let Ok(json) = serde_json::to_string(&self.user) {
            self.store.write(&json);
        }
    }
}
