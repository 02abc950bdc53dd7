//! # schooldesk-client
//!
//! Leptos + WASM frontend for the school administration dashboard.
//!
//! This crate contains pages, components, view-model state, REST helpers for
//! the document backend, and the hydrate entry point. State transitions live
//! in plain structs under `state` so they are testable without a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod entities;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging, read the embedded config and hydrate.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger not installed: {e}");
    }

    let config = config::ClientConfig::from_document();
    log::info!("hydrating {}", config.tenant_name);
    leptos::mount::hydrate_body(move || {
        provide_context(config);
        view! { <app::App/> }
    });
}
