//! # client
//!
//! Leptos + WASM frontend for Sphere, the RFP/TOR proposal assistant.
//!
//! Pages, the shared layout, the EN/TH translation table, form drafts and the
//! route guard live here. Session handling and the backend function contract
//! come from the `contract` crate; this crate only supplies the browser
//! transport (`gloo-net`) and `localStorage` persistence.

#![recursion_limit = "256"]
pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
