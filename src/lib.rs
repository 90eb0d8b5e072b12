//! # stats-assistant
//!
//! Leptos + WASM chat client for the NBA stats question-answering backend.
//!
//! The crate renders one conversation, forwards each question to the backend
//! through a `ChatGateway`, and appends the answer with its cited evidence.
//! `state::chat` holds the turn lifecycle as plain data; `components` wires it
//! to the DOM; `net` talks to the backend.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// Browser entry point: install panic/console logging and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger already initialized: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
