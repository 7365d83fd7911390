//! Reduce the options form into the configuration part of a submission.

use crate::error::ValidationError;
use crate::options::{OptionSet, OptionsState, PresetSelection};

/// Preset identifier plus, for the custom sentinel only, the full option set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Value of the `preset` field.
    pub preset_id: String,
    /// Explicit flags. `None` for named presets.
    pub options: Option<OptionSet>,
}

/// Assemble the submission configuration from the options form.
///
/// Named presets send only their identifier; the service resolves them.
/// The checklist is read if and only if the custom sentinel is checked.
///
/// # Errors
///
/// Returns [`ValidationError::NoPresetSelected`] when no preset is checked.
pub fn assemble(state: &OptionsState) -> Result<Configuration, ValidationError> {
    let preset = state
        .preset
        .as_ref()
        .ok_or(ValidationError::NoPresetSelected)?;
    let options = match preset {
        PresetSelection::Custom => Some(state.checklist),
        PresetSelection::Named(_) => None,
    };
    Ok(Configuration {
        preset_id: preset.id().to_owned(),
        options,
    })
}
