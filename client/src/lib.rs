//! # murmur-client
//!
//! Leptos + WASM frontend for the anonymous messaging page.
//!
//! This crate contains the public profile page, the message form and toast
//! components, their page-scoped state, and the REST helper for message
//! suggestions. The `ssr` feature renders it inside the Axum server; the
//! `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
