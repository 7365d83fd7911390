//! luashade-io: Browser I/O and Dioxus component library.
//!
//! Sends submissions with `fetch`, saves results through Blob
//! downloads, writes to the clipboard, reports errors through blocking
//! notices and the console, and provides the UI components of the
//! luashade client.

pub mod api;
pub mod clipboard;
pub mod components;
pub mod diagnostics;
pub mod download;
pub mod notice;

pub use components::{FileUpload, LoadingOverlay, OptionsPanel, ResultPanel};
