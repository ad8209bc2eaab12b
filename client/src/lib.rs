//! # client
//!
//! Leptos + WASM frontend for the civic transparency portal.
//!
//! Pages read institutions, laws, reviews and budget lines from the backend
//! REST API, fall back to built-in records when a request fails, and talk to
//! the AI legal assistant. Wire types live in the `records` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach to the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
