//! # educonnect
//!
//! Leptos + WASM frontend for the EduConnect sign-in flow.
//!
//! This crate contains the router shell, the login page, its form state
//! machine, client-side validation, and the auth API client. Logic lives in
//! plain Rust types (`state`, `util`, `net`) so it can be tested natively;
//! `pages` and `components` only render it.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: panic hook, console logging, config, mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {e}");
    }

    let client = net::auth::AuthClient::http(config::ApiConfig::from_build_env());
    leptos::mount::mount_to_body(move || view! { <App client=client/> });
}
