//! Diagnostic log on the browser console.

use std::fmt::Display;

use wasm_bindgen::{JsCast, JsValue};

/// Log an informational message.
pub fn info(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

/// Log a warning.
pub fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

/// Log an error with the action that produced it.
pub fn error(context: &str, err: &dyn Display) {
    web_sys::console::error_1(&JsValue::from_str(&format!("{context}: {err}")));
}

/// Best-effort readable message for a thrown JS value.
///
/// Prefers `Error.message`, then a plain string, then the debug form.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        let name = String::from(err.name());
        let message = String::from(err.message());
        return if name.is_empty() {
            message
        } else {
            format!("{name}: {message}")
        };
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
