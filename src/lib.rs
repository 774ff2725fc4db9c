//! # theme-manager-ui
//!
//! Leptos + WASM front end for the Theme Manager admin screen: tabbed
//! panels, changed-tab markers, the image-radio widget and per-template
//! rebuild actions.
//!
//! The server embeds a JSON description of the screen (see [`config`]); this
//! crate renders and drives everything from it. Browser-only code sits
//! behind the `csr` feature so the state modules test natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and logger, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
