//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `chat`, `stores`, `weather`, `ui`) so
//! individual components can depend on small focused models. View-state
//! transformations live here as pure functions and are unit tested natively.

pub mod auth;
pub mod chat;
pub mod stores;
pub mod ui;
pub mod weather;
