//! Client configuration.
//!
//! All values are compiled in; nothing is read from the environment or
//! persisted across page loads.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::options::PresetSelection;

/// A named preset offered in the options form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetChoice {
    /// Opaque identifier sent to the service.
    pub id: String,
    /// Radio label.
    pub label: String,
    /// Short description under the label.
    pub description: String,
}

impl PresetChoice {
    fn new(id: &str, label: &str, description: &str) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: description.into(),
        }
    }
}

/// Configuration for the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix of the service endpoints, without a trailing slash.
    pub api_base: String,

    /// Seconds to wait for a submission before aborting it.
    /// `None` waits indefinitely.
    pub submit_timeout_secs: Option<u64>,

    /// How long the copy button shows its confirmation, in milliseconds.
    pub copy_feedback_ms: u32,

    /// Named presets, in display order. The custom entry is always
    /// appended by the UI and is not listed here.
    pub presets: Vec<PresetChoice>,

    /// Preset checked on load and after a reset. Either an id from
    /// `presets`, the custom sentinel, or `None` for nothing checked.
    pub default_preset: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".into(),
            submit_timeout_secs: Some(120),
            copy_feedback_ms: 2000,
            presets: vec![
                PresetChoice::new("light", "Light", "Lightweight protection, smallest output."),
                PresetChoice::new("medium", "Medium", "Balanced protection."),
                PresetChoice::new("heavy", "Heavy", "Strongest protection, largest output."),
            ],
            default_preset: Some("medium".into()),
        }
    }
}

impl ClientConfig {
    /// URL of the submission endpoint.
    #[must_use]
    pub fn submit_url(&self) -> String {
        format!("{}/obfuscate", self.base())
    }

    /// URL of the stored record for `file_id`.
    #[must_use]
    pub fn file_url(&self, file_id: &str) -> String {
        format!("{}/files/{file_id}", self.base())
    }

    fn base(&self) -> &str {
        self.api_base.trim_end_matches('/')
    }

    /// Submission timeout, if any.
    #[must_use]
    pub fn submit_timeout(&self) -> Option<Duration> {
        self.submit_timeout_secs.map(Duration::from_secs)
    }

    /// Duration of the "Copied!" confirmation.
    #[must_use]
    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(u64::from(self.copy_feedback_ms))
    }

    /// The preset checked on load and after a reset.
    #[must_use]
    pub fn default_selection(&self) -> Option<PresetSelection> {
        self.default_preset.as_deref().map(PresetSelection::from_id)
    }
}
