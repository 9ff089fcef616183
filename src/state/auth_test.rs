use std::cell::RefCell;
use std::rc::Rc;

use super::*;

/// In-memory stand-in for the browser session store. Cloning shares the
/// slot so tests can inspect it after handing the store to a session.
#[derive(Clone, Debug, Default)]
struct MemoryStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    fn with(value: &str) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(value.to_owned()))),
        }
    }

    fn snapshot(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl SessionStore for MemoryStore {
    fn read(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn write(&mut self, value: &str) {
        *self.slot.borrow_mut() = Some(value.to_owned());
    }

    fn remove(&mut self) {
        *self.slot.borrow_mut() = None;
    }
}

fn authenticated_session() -> (AuthSession<MemoryStore>, MemoryStore) {
    let store = MemoryStore::default();
    let mut session = AuthSession::new(store.clone());
    session.begin_login();
    session.resolve_success("abc123");
    (session, store)
}

// =============================================================
// Sentinel record
// =============================================================

#[test]
fn default_record_is_sentinel() {
    let session = AuthSession::new(MemoryStore::default());
    assert_eq!(*session.user(), User::default());
    assert!(!session.is_authenticated());
}

#[test]
fn sentinel_predicate_tracks_id() {
    let mut session = AuthSession::new(MemoryStore::default());
    assert!(!session.is_authenticated());

    session.begin_login();
    session.resolve_success("abc123");
    assert!(session.is_authenticated());

    session.logout();
    assert!(!session.is_authenticated());
}

// =============================================================
// restore
// =============================================================

#[test]
fn restore_without_persisted_copy_is_noop() {
    let mut session = AuthSession::new(MemoryStore::default());
    session.restore();
    assert_eq!(*session.user(), User::default());
}

#[test]
fn restore_overwrites_from_persisted_copy() {
    let store = MemoryStore::with(
        r#"{"id":"abc123","password":"","loading":false,"message":""}"#,
    );
    let mut session = AuthSession::new(store);
    session.restore();
    assert_eq!(session.user().id, "abc123");
    assert!(session.is_authenticated());
}

#[test]
fn restore_applies_at_most_once() {
    let store = MemoryStore::default();
    let mut session = AuthSession::new(store.clone());
    session.restore();

    store
        .slot
        .replace(Some(r#"{"id":"late","password":"","loading":false,"message":""}"#.to_owned()));
    session.restore();
    assert_eq!(session.user().id, "");
}

#[test]
fn restore_with_malformed_copy_fails_open() {
    let store = MemoryStore::with("{not json");
    let mut session = AuthSession::new(store.clone());
    session.restore();
    assert_eq!(*session.user(), User::default());
    // The corrupt slot is dropped so the next session starts clean.
    assert_eq!(store.snapshot(), None);
}

#[test]
fn restore_tolerates_missing_fields() {
    let store = MemoryStore::with(r#"{"id":"abc123"}"#);
    let mut session = AuthSession::new(store);
    session.restore();
    assert_eq!(session.user().id, "abc123");
    assert!(!session.user().loading);
}

// =============================================================
// login transitions
// =============================================================

#[test]
fn begin_login_sets_loading() {
    let mut session = AuthSession::new(MemoryStore::default());
    session.begin_login();
    assert!(session.user().loading);
}

#[test]
fn success_sets_token_and_clears_password() {
    let store = MemoryStore::default();
    let mut session = AuthSession::new(store);
    session.begin_login();
    session.resolve_success("abc123");

    let user = session.user();
    assert_eq!(user.id, "abc123");
    assert_eq!(user.password, "");
    assert_eq!(user.message, "");
    assert!(!user.loading);
}

#[test]
fn success_writes_through_to_persisted_copy() {
    let (session, store) = authenticated_session();

    let raw = store.snapshot().expect("persisted copy should exist");
    let persisted: User = serde_json::from_str(&raw).expect("valid JSON");
    assert_eq!(persisted.id, session.user().id);
    assert_eq!(persisted.password, "");
    assert!(!persisted.loading);
}

#[test]
fn success_clears_stale_error_message() {
    let mut session = AuthSession::new(MemoryStore::default());
    session.begin_login();
    session.resolve_failure("invalid credentials");
    session.begin_login();
    session.resolve_success("abc123");
    assert_eq!(session.user().message, "");
}

#[test]
fn failure_keeps_sentinel_and_surfaces_message() {
    let store = MemoryStore::default();
    let mut session = AuthSession::new(store.clone());
    session.begin_login();
    session.resolve_failure("invalid credentials");

    let user = session.user();
    assert_eq!(user.id, "");
    assert_eq!(user.message, "invalid credentials");
    assert!(!user.loading);
    assert_eq!(store.snapshot(), None);
}

#[test]
fn failure_keeps_prior_authenticated_id() {
    let (mut session, store) = authenticated_session();
    let persisted_before = store.snapshot();

    session.begin_login();
    session.resolve_failure("network error");
    assert_eq!(session.user().id, "abc123");
    assert_eq!(store.snapshot(), persisted_before);
}

#[test]
fn loading_never_survives_resolution() {
    let mut session = AuthSession::new(MemoryStore::default());

    session.begin_login();
    session.resolve_success("abc123");
    assert!(!session.user().loading);

    session.begin_login();
    session.resolve_failure("rejected");
    assert!(!session.user().loading);
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_resets_and_deletes_persisted_copy() {
    let (mut session, store) = authenticated_session();
    assert!(store.snapshot().is_some());

    session.logout();
    assert_eq!(*session.user(), User::default());
    assert_eq!(store.snapshot(), None);
}

#[test]
fn logout_twice_is_idempotent() {
    let (mut session, store) = authenticated_session();
    session.logout();
    session.logout();
    assert_eq!(*session.user(), User::default());
    assert_eq!(store.snapshot(), None);
}

// =============================================================
// development bypass
// =============================================================

#[cfg(feature = "dev-login")]
mod dev_login {
    use super::*;

    #[test]
    fn matches_fixed_pair() {
        let mut session = AuthSession::new(MemoryStore::default());
        assert!(session.login_dev("test@example.com", "1234"));
        assert!(session.is_authenticated());
        assert!(!session.user().loading);
    }

    #[test]
    fn rejects_other_credentials() {
        let mut session = AuthSession::new(MemoryStore::default());
        assert!(!session.login_dev("test@example.com", "wrong"));
        assert!(!session.login_dev("", ""));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn never_persists_the_password() {
        let store = MemoryStore::default();
        let mut session = AuthSession::new(store.clone());
        assert!(session.login_dev("test@example.com", "1234"));

        let raw = store.snapshot().expect("persisted copy should exist");
        let persisted: User = serde_json::from_str(&raw).expect("valid JSON");
        assert_eq!(persisted.password, "");
    }
}
