//! luashade-core: Job lifecycle state machine for the luashade client (sans-IO).
//!
//! Models everything between "the user picked a file" and "the user has
//! the obfuscated result": file validation, option assembly, the
//! multipart request, response interpretation, and the post-completion
//! rules.
//!
//! This crate has **no I/O dependencies** -- it never touches the network,
//! the DOM, or the clipboard. All browser interaction lives in
//! `luashade-io`, which drives a [`JobController`] through its transition
//! methods.

pub mod config;
pub mod controller;
pub mod error;
pub mod intake;
pub mod options;
pub mod presenter;
pub mod request;
pub mod response;
pub mod settings;

pub use config::{Configuration, assemble};
pub use controller::{JobController, UiPhase};
pub use error::{PostActionError, SubmissionError, ValidationError};
pub use intake::{FileCandidate, FileSize, SelectedFile, format_size};
pub use options::{CUSTOM_PRESET_ID, OptionKey, OptionSet, OptionsState, PresetSelection};
pub use presenter::download_filename;
pub use request::{FieldValue, FormField, SubmissionRequest};
pub use response::{FileRecord, JobResult, RawResponse, interpret};
pub use settings::{ClientConfig, PresetChoice};
