//! MediScan - AI medical image analysis
//!
//! Web front end for a diagnosis backend, built with Leptos and WebAssembly.
//! The route table and navigation guard live in [`core::routing`]; the server
//! forwards the backend endpoints through [`core::proxy`].

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
