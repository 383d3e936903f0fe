//! # client
//!
//! Leptos + WASM frontend for the portfolio site.
//!
//! This crate contains the section components, the static content they
//! render, the declarative motion presets, and the reveal controller that
//! plays each entrance animation once when its region first scrolls into
//! view. The `server` crate renders it with `ssr`; the browser bundle is the
//! `hydrate` build.

pub mod app;
pub mod components;
pub mod content;
pub mod motion;
pub mod pages;
pub mod reveal;

/// WASM entry point: hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
