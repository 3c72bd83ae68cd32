//! # mentormatch-client
//!
//! Leptos + WASM frontend for the mentor-mentee matching service.
//!
//! The crate is organized around an authenticated-session core: `session`
//! owns the token/user lifecycle, `net` performs REST calls against the
//! backend with session-aware error classification, and `loader` turns
//! protected image bytes into displayable object URLs with deterministic
//! revocation. `pages` and `components` build the UI on top of those
//! layers, with shared reactive models in `state`.

pub mod app;
pub mod components;
pub mod loader;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered DOM into the live app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
