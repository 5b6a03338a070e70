//! # client
//!
//! Leptos + WASM admin console for the embeddable chat widget: AI model
//! configuration, follow-up flows, and widget settings with a live preview.
//!
//! Pages and components live here; shared record types and validation come
//! from the `records` crate. The same crate is rendered on the server (`ssr`)
//! and hydrated in the browser (`hydrate`).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: logging, panic hook, then hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
