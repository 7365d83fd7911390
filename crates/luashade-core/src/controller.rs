//! The job lifecycle state machine.
//!
//! [`JobController`] owns the only mutable state of the client: the
//! selected file, the options form, the completed job, and the
//! [`UiPhase`]. Every change goes through one of its intent-level
//! methods.
//!
//! Submission is split so the controller never performs I/O:
//!
//! 1. [`begin_submit`](JobController::begin_submit) validates, enters
//!    [`UiPhase::Submitting`], and returns the request to send.
//! 2. The caller sends exactly one request.
//! 3. [`settle`](JobController::settle) interprets the outcome and leaves
//!    `Submitting` on every path.
//!
//! ```text
//! Idle ──select──▶ FileSelected ──begin_submit──▶ Submitting
//!  ▲                 ▲     │                         │  │
//!  │                 └─────┘ select                  │  │ settle (ok)
//!  │                 ▲                               │  ▼
//!  │                 └──────── settle (error) ───────┘ ResultReady
//!  └──────────────────────────── reset ─────────────────────┘
//! ```

use std::fmt;

use crate::config::assemble;
use crate::error::{PostActionError, SubmissionError, ValidationError};
use crate::intake::{self, FileCandidate, NO_FILE_STATUS, SelectedFile};
use crate::options::{OptionKey, OptionsState, PresetSelection};
use crate::request::SubmissionRequest;
use crate::response::{JobResult, RawResponse, interpret};
use crate::settings::ClientConfig;

/// Externally observable phase, governing enabled controls and visible
/// surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UiPhase {
    /// No file selected; submit disabled.
    #[default]
    Idle,
    /// A valid file is selected; submit enabled.
    FileSelected,
    /// A request is in flight; all inputs disabled, loading indicator shown.
    Submitting,
    /// A job completed; upload surface hidden, result surface shown.
    ResultReady,
}

impl UiPhase {
    /// Whether the submit button is enabled.
    #[must_use]
    pub const fn submit_enabled(self) -> bool {
        matches!(self, Self::FileSelected)
    }

    /// Whether the file picker, drop zone, and options form accept input.
    #[must_use]
    pub const fn inputs_enabled(self) -> bool {
        matches!(self, Self::Idle | Self::FileSelected)
    }

    /// Whether the loading overlay is shown.
    #[must_use]
    pub const fn loading_visible(self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Whether the upload surface (drop zone, options, submit) is shown.
    #[must_use]
    pub const fn upload_visible(self) -> bool {
        !self.result_visible()
    }

    /// Whether the result surface is shown.
    #[must_use]
    pub const fn result_visible(self) -> bool {
        matches!(self, Self::ResultReady)
    }
}

impl fmt::Display for UiPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::FileSelected => "file selected",
            Self::Submitting => "submitting",
            Self::ResultReady => "result ready",
        })
    }
}

/// Owner of the single job and everything leading up to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobController {
    phase: UiPhase,
    file: Option<SelectedFile>,
    options: OptionsState,
    result: Option<JobResult>,
    default_preset: Option<PresetSelection>,
}

impl Default for JobController {
    fn default() -> Self {
        Self::new(None)
    }
}

impl JobController {
    /// A controller in [`UiPhase::Idle`] with `default_preset` checked.
    #[must_use]
    pub fn new(default_preset: Option<PresetSelection>) -> Self {
        Self {
            phase: UiPhase::Idle,
            file: None,
            options: OptionsState::with_preset(default_preset.clone()),
            result: None,
            default_preset,
        }
    }

    /// A controller using the configured default preset.
    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.default_selection())
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> UiPhase {
        self.phase
    }

    /// The selected file, if any.
    #[must_use]
    pub const fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    /// Current options form state.
    #[must_use]
    pub const fn options(&self) -> &OptionsState {
        &self.options
    }

    /// The completed job, if any.
    #[must_use]
    pub const fn result(&self) -> Option<&JobResult> {
        self.result.as_ref()
    }

    /// Status line describing the selection.
    #[must_use]
    pub fn status_text(&self) -> String {
        self.file
            .as_ref()
            .map_or_else(|| NO_FILE_STATUS.to_owned(), SelectedFile::status_text)
    }

    /// Select the first of `candidates`, replacing any prior selection.
    ///
    /// On error the prior selection and phase are unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InputsLocked`] outside `Idle` and
    /// `FileSelected`, otherwise the errors of [`intake::select`].
    pub fn select(
        &mut self,
        candidates: impl IntoIterator<Item = FileCandidate>,
    ) -> Result<&SelectedFile, ValidationError> {
        if !self.phase.inputs_enabled() {
            return Err(ValidationError::InputsLocked);
        }
        let file = intake::select(candidates)?;
        self.phase = UiPhase::FileSelected;
        let file: &SelectedFile = self.file.insert(file);
        Ok(file)
    }

    /// Check a preset radio. Ignored while inputs are disabled.
    pub fn choose_preset(&mut self, preset: PresetSelection) {
        if self.phase.inputs_enabled() {
            self.options.preset = Some(preset);
        }
    }

    /// Set one checklist entry. Ignored while inputs are disabled.
    pub fn set_option(&mut self, key: OptionKey, enabled: bool) {
        if self.phase.inputs_enabled() {
            self.options.checklist.set(key, enabled);
        }
    }

    /// Validate and enter [`UiPhase::Submitting`].
    ///
    /// Returns the request the caller must send, then pass the outcome to
    /// [`settle`](Self::settle). Returns `Ok(None)` without any change
    /// when a submission is already in flight or a result is showing.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NoFileSelected`],
    /// [`ValidationError::UnsupportedFormat`], or
    /// [`ValidationError::NoPresetSelected`]; the phase is unchanged.
    pub fn begin_submit(&mut self) -> Result<Option<SubmissionRequest>, ValidationError> {
        if matches!(self.phase, UiPhase::Submitting | UiPhase::ResultReady) {
            return Ok(None);
        }
        let file = self.file.as_ref().ok_or(ValidationError::NoFileSelected)?;
        intake::check_name(file.name())?;
        let config = assemble(&self.options)?;
        let request = SubmissionRequest::new(file.clone(), config);
        self.phase = UiPhase::Submitting;
        Ok(Some(request))
    }

    /// Leave [`UiPhase::Submitting`] with the transport's outcome.
    ///
    /// Success stores the [`JobResult`] and enters `ResultReady`; any
    /// failure returns to `FileSelected` with the file preserved. Returns
    /// `None` and changes nothing when no submission is in flight.
    pub fn settle(
        &mut self,
        outcome: Result<RawResponse, SubmissionError>,
    ) -> Option<Result<&JobResult, SubmissionError>> {
        if self.phase != UiPhase::Submitting {
            return None;
        }
        match outcome.and_then(|response| interpret(&response)) {
            Ok(result) => {
                self.phase = UiPhase::ResultReady;
                let result: &JobResult = self.result.insert(result);
                Some(Ok(result))
            }
            Err(e) => {
                self.phase = UiPhase::FileSelected;
                Some(Err(e))
            }
        }
    }

    /// The completed job for download or copy.
    ///
    /// # Errors
    ///
    /// Returns [`PostActionError::NoResult`] unless in `ResultReady`.
    pub fn completed(&self) -> Result<&JobResult, PostActionError> {
        match (&self.phase, &self.result) {
            (UiPhase::ResultReady, Some(result)) => Ok(result),
            _ => Err(PostActionError::NoResult),
        }
    }

    /// Start over: clear the job and file, restore the options form, and
    /// return to [`UiPhase::Idle`]. Ignored while submitting.
    pub fn reset(&mut self) {
        if self.phase == UiPhase::Submitting {
            return;
        }
        self.result = None;
        self.file = None;
        self.options = OptionsState::with_preset(self.default_preset.clone());
        self.phase = UiPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str) -> FileCandidate {
        FileCandidate {
            name: name.into(),
            content: b"local x = 1".to_vec(),
        }
    }

    fn controller() -> JobController {
        JobController::new(Some(PresetSelection::Named("medium".into())))
    }

    fn ok_response(body: &str) -> Result<RawResponse, SubmissionError> {
        Ok(RawResponse {
            status: 200,
            status_text: "OK".into(),
            body: body.into(),
        })
    }

    #[test]
    fn starts_idle_with_submit_disabled() {
        let c = controller();
        assert_eq!(c.phase(), UiPhase::Idle);
        assert!(!c.phase().submit_enabled());
        assert_eq!(c.status_text(), "No file selected");
    }

    #[test]
    fn phase_surfaces() {
        assert!(UiPhase::Idle.upload_visible());
        assert!(UiPhase::Submitting.upload_visible());
        assert!(UiPhase::Submitting.loading_visible());
        assert!(!UiPhase::Submitting.inputs_enabled());
        assert!(!UiPhase::Submitting.submit_enabled());
        assert!(UiPhase::ResultReady.result_visible());
        assert!(!UiPhase::ResultReady.upload_visible());
    }

    #[test]
    fn phase_display_names() {
        assert_eq!(UiPhase::Idle.to_string(), "idle");
        assert_eq!(UiPhase::FileSelected.to_string(), "file selected");
        assert_eq!(UiPhase::Submitting.to_string(), "submitting");
        assert_eq!(UiPhase::ResultReady.to_string(), "result ready");
    }

    #[test]
    fn valid_selection_enters_file_selected() {
        let mut c = controller();
        c.select([candidate("a.lua")]).unwrap();
        assert_eq!(c.phase(), UiPhase::FileSelected);
        assert!(c.phase().submit_enabled());
    }

    #[test]
    fn new_selection_replaces_prior() {
        let mut c = controller();
        c.select([candidate("a.lua")]).unwrap();
        c.select([candidate("b.txt")]).unwrap();
        assert_eq!(c.file().unwrap().name(), "b.txt");
        assert_eq!(c.phase(), UiPhase::FileSelected);
    }

    #[test]
    fn invalid_selection_keeps_prior() {
        let mut c = controller();
        c.select([candidate("a.lua")]).unwrap();
        let err = c.select([candidate("b.py")]).unwrap_err();
        assert!(matches!(err, ValidationError::UnsupportedFormat { .. }));
        assert_eq!(c.file().unwrap().name(), "a.lua");
        assert_eq!(c.phase(), UiPhase::FileSelected);
    }

    #[test]
    fn invalid_selection_from_idle_stays_idle() {
        let mut c = controller();
        assert!(c.select([candidate("b.py")]).is_err());
        assert_eq!(c.phase(), UiPhase::Idle);
        assert!(c.file().is_none());
    }

    #[test]
    fn submit_without_file() {
        let mut c = controller();
        assert_eq!(c.begin_submit(), Err(ValidationError::NoFileSelected));
        assert_eq!(c.phase(), UiPhase::Idle);
    }

    #[test]
    fn submit_without_preset() {
        let mut c = JobController::new(None);
        c.select([candidate("a.lua")]).unwrap();
        assert_eq!(c.begin_submit(), Err(ValidationError::NoPresetSelected));
        assert_eq!(c.phase(), UiPhase::FileSelected);
    }

    #[test]
    fn double_submit_is_a_no_op() {
        let mut c = controller();
        c.select([candidate("a.lua")]).unwrap();
        assert!(c.begin_submit().unwrap().is_some());
        assert_eq!(c.begin_submit(), Ok(None));
        assert_eq!(c.phase(), UiPhase::Submitting);
    }

    #[test]
    fn inputs_locked_while_submitting() {
        let mut c = controller();
        c.select([candidate("a.lua")]).unwrap();
        c.begin_submit().unwrap();
        assert_eq!(
            c.select([candidate("b.lua")]).unwrap_err(),
            ValidationError::InputsLocked
        );
        c.choose_preset(PresetSelection::Custom);
        c.set_option(OptionKey::Compressor, true);
        assert_eq!(c.options().preset, Some(PresetSelection::Named("medium".into())));
        assert!(!c.options().checklist.get(OptionKey::Compressor));
        assert_eq!(c.file().unwrap().name(), "a.lua");
    }

    #[test]
    fn success_enters_result_ready() {
        let mut c = controller();
        c.select([candidate("a.lua")]).unwrap();
        c.begin_submit().unwrap();
        let result = c
            .settle(ok_response(
                r#"{"success":true,"file_id":"abc","obfuscated_code":"return 1"}"#,
            ))
            .unwrap()
            .unwrap();
        assert_eq!(result.job_id, "abc");
        assert_eq!(c.phase(), UiPhase::ResultReady);
        assert_eq!(c.completed().unwrap().transformed_source, "return 1");
    }

    #[test]
    fn failure_returns_to_file_selected() {
        let mut c = controller();
        c.select([candidate("a.lua")]).unwrap();
        c.begin_submit().unwrap();
        let err = c
            .settle(Err(SubmissionError::Network("offline".into())))
            .unwrap()
            .unwrap_err();
        assert_eq!(err, SubmissionError::Network("offline".into()));
        assert_eq!(c.phase(), UiPhase::FileSelected);
        assert_eq!(c.file().unwrap().name(), "a.lua");
        assert!(c.result().is_none());
        assert!(c.begin_submit().unwrap().is_some(), "retry should be possible");
    }

    #[test]
    fn settle_outside_submitting_is_ignored() {
        let mut c = controller();
        c.select([candidate("a.lua")]).unwrap();
        assert!(c.settle(ok_response("{}")).is_none());
        assert_eq!(c.phase(), UiPhase::FileSelected);
    }

    #[test]
    fn completed_requires_result() {
        let c = controller();
        assert_eq!(c.completed(), Err(PostActionError::NoResult));
    }

    #[test]
    fn reset_restores_default_options() {
        let mut c = controller();
        c.choose_preset(PresetSelection::Custom);
        c.set_option(OptionKey::VmGenerator, true);
        c.select([candidate("a.lua")]).unwrap();
        c.reset();
        assert_eq!(c, controller());
    }

    #[test]
    fn reset_ignored_while_submitting() {
        let mut c = controller();
        c.select([candidate("a.lua")]).unwrap();
        c.begin_submit().unwrap();
        c.reset();
        assert_eq!(c.phase(), UiPhase::Submitting);
        assert!(c.file().is_some());
    }
}
