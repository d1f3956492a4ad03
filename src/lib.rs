//! # jobs-client
//!
//! Leptos + WASM frontend for posting a new job listing.
//!
//! The `/jobs/new` page collects the listing fields, validates them as the
//! user types, sanitizes them on submit, saves the draft to the jobs store,
//! and moves on to `/jobs/new/preview`. The same crate is built with `ssr`
//! for the server binary and with `hydrate` for the browser bundle.

pub mod app;
pub mod components;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod server;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
