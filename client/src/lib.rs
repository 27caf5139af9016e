//! # client
//!
//! Leptos + WASM frontend for the ES Consulting site.
//!
//! The crate renders the single marketing page (SSR under `ssr`, hydrated
//! under `hydrate`) and hosts the assistant panel. Replies from the hosted
//! assistant are rendered either as markdown text or as one of the
//! components in [`registry`], chosen by the assistant and validated here.
//! The particle background is driven by the `canvas` crate through
//! `components::particle_canvas`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod registry;
pub mod state;
pub mod tools;
pub mod util;

/// WASM entry point: wire logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"console logger already initialised".into());
    }
    leptos::mount::hydrate_body(app::App);
}
