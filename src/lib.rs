//! # mantenpro-client
//!
//! Leptos + WASM admin client for the MantenPro maintenance-management API.
//!
//! This crate contains the client router and auth gate, the typed REST
//! client, shared application state, and one page per route: archives,
//! preventive plans, work orders, stock, billing and company settings.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

/// WASM entry point: logging, panic hook, then mount `App` on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    let config = match config::ClientConfig::from_build_env() {
        Ok(config) => config,
        Err(err) => {
            web_sys::console::error_1(&format!("client config rejected, using defaults: {err}").into());
            config::ClientConfig::default()
        }
    };
    let _ = console_log::init_with_level(config.log_level);
    log::info!("mantenpro client starting against {}", config.api_url);

    leptos::mount::mount_to_body(move || view! { <app::App config=config.clone()/> });
}
