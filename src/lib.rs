//! # punarnavah-client
//!
//! Leptos + WASM page for listing a bulk-waste item: the user picks an image,
//! fills in the listing, and the page uploads the image to the media host
//! before posting the record to the backend.
//!
//! This crate contains the page, a toast stack, form and toast state, the
//! HTTP clients, and the submission controller that sequences them.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod submit;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
