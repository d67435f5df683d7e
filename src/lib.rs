//! # webway-client
//!
//! Leptos + WASM frontend shell: the route table that maps URL paths to
//! page views, and the persisted auth-session store those pages share.
//!
//! Browser-only pieces (`localStorage`, console logging, mounting) sit behind
//! the `csr` feature so the rest builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

/// Browser entry point: install panic and log hooks, then mount [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    match config::AppConfig::bundled() {
        Ok(config) => leptos::mount::mount_to_body(move || view! { <App config=config/> }),
        Err(e) => log::error!("failed to load config.json: {e}"),
    }
}
