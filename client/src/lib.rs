//! Product showcase UI: pages, components, and browser-side state.
//!
//! The crate compiles twice. With `ssr` it is linked into the server binary
//! and renders pages against the catalog handle in Leptos context. With
//! `hydrate` it builds to WASM and attaches interactivity to the rendered
//! HTML.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
