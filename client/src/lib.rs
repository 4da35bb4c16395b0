//! # keygate-client
//!
//! Leptos + WASM sign-in panel. Renders a sign-in/sign-up form while signed
//! out and a dashboard/profile view while signed in; credential checks,
//! sessions, and user records belong to an external identity provider reached
//! through [`net::identity::IdentityService`].

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
