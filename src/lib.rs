//! # promptgen-client
//!
//! Leptos + WASM frontend for the automation prompt generator. Collects test
//! automation requirements from a form, posts them to the backend prompt API,
//! and renders the generated prompt plus history and usage statistics views.
//!
//! The backend is an external collaborator reached over a fixed JSON endpoint
//! set under `/api/prompts`. This crate is client-only: nothing is persisted
//! locally and every view is rebuilt from the latest response.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and mounts the app to the body.
#[cfg(feature = "web")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
