//! Result surface with download, copy, and new-file actions.

use std::time::Duration;

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdCheck, LdCopy, LdDownload, LdFilePlus};
use gloo_timers::future::TimeoutFuture;
use luashade_core::PostActionError;
use luashade_core::presenter::{COPIED_LABEL, CopyFeedback};

use crate::{clipboard, diagnostics, notice};

/// Props for the [`ResultPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ResultPanelProps {
    /// Transformed source shown on screen and copied to the clipboard.
    source: String,
    /// How long the copy button shows its confirmation.
    copy_feedback: Duration,
    /// Called when the download button is clicked.
    on_download: EventHandler<()>,
    /// Called when the new-file button is clicked.
    on_new_file: EventHandler<()>,
}

/// Shows the obfuscated source with its post-completion actions.
///
/// Copying is handled here: the button switches to a confirmation for
/// `copy_feedback`, or a notice reports the clipboard error.
#[component]
pub fn ResultPanel(props: ResultPanelProps) -> Element {
    let mut feedback = use_signal(CopyFeedback::default);
    let on_download = props.on_download;
    let on_new_file = props.on_new_file;

    let copy_click = {
        let source = props.source.clone();
        let duration = props.copy_feedback;
        move |_| {
            let source = source.clone();
            spawn(async move {
                match clipboard::write_text(&source).await {
                    Ok(()) => {
                        let ticket = feedback.write().start();
                        TimeoutFuture::new(u32::try_from(duration.as_millis()).unwrap_or(u32::MAX))
                            .await;
                        feedback.write().expire(ticket);
                    }
                    Err(e) => {
                        let err = PostActionError::Copy(e.to_string());
                        diagnostics::error("Copy failed", &err);
                        notice::alert(&err.to_string());
                    }
                }
            });
        }
    };

    rsx! {
        div { class: "result-container",
            h2 { "Obfuscated code" }

            pre { class: "result-code",
                code { id: "result-code", "{props.source}" }
            }

            div { class: "result-actions",
                button {
                    class: "button",
                    onclick: move |_| on_download.call(()),
                    Icon { icon: LdDownload, width: 16, height: 16 }
                    " Download"
                }
                button {
                    class: "button",
                    onclick: copy_click,
                    if feedback().is_showing() {
                        Icon { icon: LdCheck, width: 16, height: 16 }
                        " {COPIED_LABEL}"
                    } else {
                        Icon { icon: LdCopy, width: 16, height: 16 }
                        " Copy"
                    }
                }
                button {
                    class: "button button-secondary",
                    onclick: move |_| on_new_file.call(()),
                    Icon { icon: LdFilePlus, width: 16, height: 16 }
                    " New File"
                }
            }
        }
    }
}
