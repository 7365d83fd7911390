//! File upload component with drag-and-drop and file picker.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdUpload;
use luashade_core::intake::{self, ACCEPT_ATTRIBUTE};
use luashade_core::{FileCandidate, ValidationError};

use crate::{diagnostics, notice};

/// Props for the [`FileUpload`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileUploadProps {
    /// Status line, e.g. `Selected: main.lua (1.2 KB)`.
    status: String,
    /// Whether the picker and drop zone are locked.
    disabled: bool,
    /// Called with the first file of a picker or drop event.
    on_select: EventHandler<FileCandidate>,
    /// Called when the first file fails validation before being read.
    on_reject: EventHandler<ValidationError>,
}

/// A drag-and-drop zone with a file picker button.
///
/// Accepts `.lua` and `.txt` files. Only the first file of a selection
/// is considered. Its name is checked before its bytes are read; a
/// rejected name fires `on_reject`, a readable file fires `on_select`.
///
/// The browser's default drop handling (opening the file) is
/// suppressed on every drag event, and the zone is highlighted while a
/// drag is over it.
#[component]
pub fn FileUpload(props: FileUploadProps) -> Element {
    let mut dragging = use_signal(|| false);
    let FileUploadProps {
        on_select,
        on_reject,
        disabled,
        ..
    } = props;

    // Shared by the picker and drop paths.
    let process_files = move |files: Vec<FileData>| async move {
        let Some(file) = files.first() else {
            on_reject.call(ValidationError::NoFileProvided);
            return;
        };
        let name = file.name();
        if let Err(e) = intake::check_name(&name) {
            on_reject.call(e);
            return;
        }
        match file.read_bytes().await {
            Ok(bytes) => on_select.call(FileCandidate {
                name,
                content: bytes.to_vec(),
            }),
            Err(e) => {
                diagnostics::error("Error handling files", &e);
                notice::alert("Error processing the selected file. Please try again.");
            }
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        if disabled {
            return;
        }
        process_files(evt.files()).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        evt.stop_propagation();
        dragging.set(false);
        if disabled {
            return;
        }
        process_files(evt.files()).await;
    };

    let zone_class = if dragging() && !props.disabled {
        "drop-zone drop-zone-highlight"
    } else {
        "drop-zone"
    };

    rsx! {
        div {
            class: "{zone_class}",
            ondragenter: move |evt| {
                evt.prevent_default();
                evt.stop_propagation();
                dragging.set(true);
            },
            ondragover: move |evt| {
                evt.prevent_default();
                evt.stop_propagation();
                dragging.set(true);
            },
            ondragleave: move |evt| {
                evt.prevent_default();
                evt.stop_propagation();
                dragging.set(false);
            },
            ondrop: handle_drop,

            Icon { icon: LdUpload, width: 32, height: 32 }

            p { class: "drop-zone-hint",
                "Drop a Lua file here or "
            }

            label {
                class: if props.disabled { "button button-disabled" } else { "button" },
                input {
                    r#type: "file",
                    accept: ACCEPT_ATTRIBUTE,
                    class: "hidden",
                    disabled: props.disabled,
                    onchange: handle_files,
                }
                "Choose File"
            }

            p { class: "file-info", "{props.status}" }
        }
    }
}
