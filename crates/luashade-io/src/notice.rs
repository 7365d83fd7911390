//! Blocking user notices via `window.alert`.

use crate::diagnostics;

/// Show `message` in a blocking alert.
///
/// Falls back to a console warning when no window is available or the
/// alert is suppressed by the browser.
pub fn alert(message: &str) {
    let shown = web_sys::window().is_some_and(|w| w.alert_with_message(message).is_ok());
    if !shown {
        diagnostics::warn(&format!("notice not shown: {message}"));
    }
}
