//! Top-level routed pages.

pub mod chat;
pub mod login;
pub mod stores;
pub mod weather;
