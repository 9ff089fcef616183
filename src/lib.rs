//! # townlens
//!
//! Leptos + WASM frontend for the Townlens dashboard: a login-gated shell
//! hosting an LLM chat view, a commercial-district store browser, and a
//! short-term weather forecast view. Replaces the React + Redux client with
//! a Rust-native UI layer.
//!
//! This crate contains pages, components, application state, network types,
//! and the REST helpers that talk to the backend and the public forecast
//! service.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
