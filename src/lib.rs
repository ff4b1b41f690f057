//! # catalogo-admin
//!
//! Leptos + WASM single-page client for administering an academic catalog:
//! divisions, educational programs, professors, categories, requirement
//! types, and requisites, each served by its own REST microservice.
//!
//! The crate is organized around the session authorization gate: `state`
//! owns the verified-session machine, `components::auth_route` gates the
//! protected routes on it, and `util::credential_store` persists the bearer
//! credential across reloads. `net` holds the typed REST layer and `pages`
//! the per-route views.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for the hydrate build.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
