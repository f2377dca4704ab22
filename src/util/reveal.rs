//! Scroll-reveal (AOS) library configuration and invocation.
//!
//! The library is loaded by the host page, not by this crate. Calls go through
//! the global `AOS` object and are skipped when it is absent.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use serde::{Deserialize, Serialize};

/// Options passed to `AOS.init`, using the library's own option names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Animation duration in milliseconds.
    pub duration: u32,
    pub easing: String,
    /// Animate only the first time an element scrolls into view.
    pub once: bool,
    /// Trigger offset in pixels from the viewport edge.
    pub offset: u32,
    pub delay: u32,
    pub disable: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { duration: 800, easing: "ease-out-cubic".to_owned(), once: true, offset: 50, delay: 0, disable: false }
    }
}

#[cfg(feature = "csr")]
const GLOBAL_NAME: &str = "AOS";

/// Call `AOS.init(config)` if the library is loaded.
///
/// # Errors
///
/// Returns an error if the config cannot be handed to JavaScript or the call
/// throws.
#[cfg(feature = "csr")]
pub fn init(config: &RevealConfig) -> Result<(), crate::dom::DomError> {
    let Some(aos) = library() else {
        log::debug!("{GLOBAL_NAME} not loaded; skipping init");
        return Ok(());
    };
    let options = js_sys::JSON::parse(&serde_json::to_string(config)?)?;
    call_method(&aos, "init", &[options])
}

/// Call `AOS.refresh()` if the library is loaded.
///
/// # Errors
///
/// Returns an error if the call throws.
#[cfg(feature = "csr")]
pub fn refresh() -> Result<(), crate::dom::DomError> {
    match library() {
        Some(aos) => call_method(&aos, "refresh", &[]),
        None => Ok(()),
    }
}

#[cfg(feature = "csr")]
fn library() -> Option<wasm_bindgen::JsValue> {
    let value = js_sys::Reflect::get(&js_sys::global(), &wasm_bindgen::JsValue::from_str(GLOBAL_NAME)).ok()?;
    if value.is_undefined() || value.is_null() { None } else { Some(value) }
}

#[cfg(feature = "csr")]
fn call_method(
    target: &wasm_bindgen::JsValue,
    name: &str,
    args: &[wasm_bindgen::JsValue],
) -> Result<(), crate::dom::DomError> {
    use wasm_bindgen::JsCast;

    let method = js_sys::Reflect::get(target, &wasm_bindgen::JsValue::from_str(name))?;
    let Some(method) = method.dyn_ref::<js_sys::Function>() else {
        log::warn!("{GLOBAL_NAME}.{name} is not a function");
        return Ok(());
    };
    match args {
        [] => method.call0(target)?,
        [first, ..] => method.call1(target, first)?,
    };
    Ok(())
}
