//! # smi-site
//!
//! Leptos + WASM behavior layer for the Sri Manjunatheswara Industries
//! marketing site. The page markup is static HTML; this crate adds header
//! scroll state, the mobile menu, active nav links, service tabs, inquiry
//! validation with toast notifications, smooth anchor scrolling, and a
//! persisted light/dark theme.
//!
//! State machines (`state`, `controller`) are plain Rust and test natively.
//! Everything that touches the browser lives behind the `csr` feature.

pub mod bindings;
pub mod components;
pub mod config;
pub mod controller;
#[cfg(feature = "csr")]
pub mod dom;
pub mod state;
pub mod util;

/// WASM entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn boot() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    if let Err(err) = dom::start() {
        log::error!("site behavior failed to start: {err}");
    }
}
