//! `sessionStorage`-backed store for the persisted user record.
//!
//! The record survives a page reload but not closing the tab. Requires a
//! browser environment: outside one (SSR) reads find nothing and writes
//! are no-ops.

use crate::state::auth::{SESSION_KEY, SessionStore};

/// The browser [`SessionStore`], keyed by [`SESSION_KEY`].
#[derive(Clone, Copy, Debug, Default)]
pub struct WebSessionStore;

impl SessionStore for WebSessionStore {
    fn read(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()?.session_storage().ok()??;
            storage.get_item(SESSION_KEY).ok()?
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn write(&mut self, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.session_storage() {
                    let _ = storage.set_item(SESSION_KEY, value);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
        }
    }

    fn remove(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.session_storage() {
                    let _ = storage.remove_item(SESSION_KEY);
                }
            }
        }
    }
}
