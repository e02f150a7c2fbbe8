//! # auth-portal
//!
//! Leptos + WASM login / signup page.
//!
//! The behavior lives in `controller::AuthController`, which drives tab
//! switching, validation and the request lifecycle against three seams:
//! the `AuthView` render boundary, the `AuthApi` backend and a `Timer`.
//! `pages::auth` binds those seams to Leptos signals, `gloo-net` and
//! `gloo-timers`; the tests bind them to mocks.

pub mod app;
pub mod config;
pub mod controller;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and the panic hook, then hydrate.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
