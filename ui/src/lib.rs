//! # ui
//!
//! Leptos + WASM frontend for the low-code page builder.
//!
//! This crate contains the routed pages (login, register, builder home,
//! pages manager, data modeler, designer), shared components, per-page state
//! and the REST client for the external builder backend. Designer behavior
//! (tree, rendering, drag and drop, properties) lives in the `designer`
//! crate; this crate only bridges it to the DOM and the network.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
