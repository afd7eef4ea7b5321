//! # arkham-client
//!
//! Leptos + WASM frontend for the Arkham Horror Scenario Manager.
//!
//! The crate splits into a framework-independent core (`state`, `net`,
//! `util`) that owns session, routing, and confirmation-link semantics, and
//! the Leptos `pages`/`components` that render it. The identity backend is an
//! external Supabase project reached through `net::supabase`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
