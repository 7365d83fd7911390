//! Error taxonomy for the job lifecycle.
//!
//! Three families, distinguished by what they do to the UI phase:
//!
//! - [`ValidationError`] blocks the attempted transition. No network call
//!   is issued and the phase is unchanged.
//! - [`SubmissionError`] ends a submission. The phase always returns to
//!   `FileSelected` so the selected file survives for a retry.
//! - [`PostActionError`] reports a failed download or copy after a job
//!   completed. The phase is unchanged.

/// A rejected user intent, detected before any network activity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The picker or drop event carried no files.
    #[error("no file was provided")]
    NoFileProvided,

    /// The file name does not end in an accepted suffix.
    #[error(
        "Please select a Lua file (.lua extension) or a text file containing Lua code (.txt): {name}"
    )]
    UnsupportedFormat {
        /// The rejected file name.
        name: String,
    },

    /// Submit was triggered with no file selected.
    #[error("Please select a file first")]
    NoFileSelected,

    /// Submit was triggered with no preset radio checked.
    #[error("Please select an obfuscation preset")]
    NoPresetSelected,

    /// A file was offered while a job is in flight or showing its result.
    #[error("file selection is locked while a job is active")]
    InputsLocked,
}

/// A failed submission. Every variant returns the UI to `FileSelected`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    /// The request never produced a response (offline, CORS, DNS, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The request did not settle within the configured timeout.
    #[error("request timed out after {secs} seconds")]
    TimedOut {
        /// The timeout that elapsed.
        secs: u64,
    },

    /// Non-2xx HTTP status.
    ///
    /// `message` is the server-supplied error when the body carried one,
    /// otherwise a generic message naming the status.
    #[error("{message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Human-readable message.
        message: String,
    },

    /// A 2xx response whose body was not the expected JSON shape.
    #[error("Invalid response format from server")]
    InvalidResponseFormat,

    /// A well-formed 2xx response with `success: false`.
    #[error("{0}")]
    Rejected(String),
}

/// A failed post-completion action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PostActionError {
    /// Download or copy was requested without a completed job.
    #[error("No file to download")]
    NoResult,

    /// Fetching or saving the canonical artifact failed.
    #[error("Error downloading file.")]
    Download(String),

    /// Writing to the system clipboard failed.
    #[error("Failed to copy: {0}")]
    Copy(String),
}

impl PostActionError {
    /// Underlying detail for the diagnostic log, if any.
    ///
    /// The `Display` form of [`Download`](Self::Download) is the generic
    /// notice text; this returns the cause.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::NoResult => None,
            Self::Download(detail) | Self::Copy(detail) => Some(detail),
        }
    }
}
