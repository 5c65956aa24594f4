//! # share-ui
//!
//! Leptos + WASM frontend for the Share file-sharing application.
//!
//! This crate contains the site and application headers, their popups
//! (upload history, bug report, account, login), the announcement banner,
//! text input primitives, the REST helpers behind them, and the small state
//! machines that drive each popup.
//!
//! Build with `hydrate` for the browser bundle and with `ssr` for the
//! server-rendered shell. Without either feature only the pure state and
//! formatting logic is active, which is what the unit tests exercise.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("share-ui hydrating");
    leptos::mount::hydrate_body(app::App);
}
