//! # taskgate
//!
//! Leptos + WASM client for the task board, centred on its access-control
//! layer: the route guard, the data-readiness guard, and the session
//! integrity repair that follows account pruning.
//!
//! Guard decisions live in `util` as plain functions so they are testable
//! without a browser; `components` turns them into views and navigation.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod services;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
