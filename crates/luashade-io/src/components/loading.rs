//! Full-screen loading overlay shown while a submission is in flight.

use dioxus::prelude::*;

/// Blocks interaction with the page while `visible`.
#[component]
pub fn LoadingOverlay(visible: bool) -> Element {
    if !visible {
        return rsx! {};
    }

    rsx! {
        div { class: "loading-overlay", role: "status", aria_live: "polite",
            div { class: "spinner" }
            p { "Obfuscating..." }
        }
    }
}
