//! # client
//!
//! Leptos + WASM frontend for the portal: a three-entry route table
//! (`/login`, `/register`, `/`) and the pages, auth state, and REST helpers
//! behind it. Built with `ssr` for the server and `hydrate` for the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered `App`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
