use std::rc::Rc;

use dioxus::prelude::*;
use luashade_core::{
    ClientConfig, FileCandidate, JobController, OptionKey, PostActionError, PresetSelection,
    ValidationError,
};
use luashade_io::{
    FileUpload, LoadingOverlay, OptionsPanel, ResultPanel, api, diagnostics, download, notice,
};

fn main() {
    console_error_panic_hook::set_once();
    dioxus::launch(app);
}

/// Report a rejected intent. An empty file list is only logged.
fn report_validation(err: &ValidationError) {
    diagnostics::error("Validation failed", err);
    if !matches!(err, ValidationError::NoFileProvided) {
        notice::alert(&err.to_string());
    }
}

/// Report a failed download or copy. The phase is unchanged.
fn report_post_action(err: &PostActionError) {
    match err.detail() {
        Some(detail) => diagnostics::error(&err.to_string(), &detail),
        None => diagnostics::error("Post-completion action failed", err),
    }
    notice::alert(&err.to_string());
}

/// Root application component.
///
/// Owns the [`JobController`] in a single signal and binds each UI event
/// to one controller transition. Network work is spawned after the
/// controller has entered `Submitting`, so the overlay is up before the
/// request starts and is cleared only by `settle`.
#[allow(clippy::too_many_lines)]
fn app() -> Element {
    // --- Application state ---
    let config = use_hook(|| Rc::new(ClientConfig::default()));
    let mut controller = use_signal({
        let config = Rc::clone(&config);
        move || JobController::from_config(&config)
    });

    // --- File intake ---
    let on_select = move |candidate: FileCandidate| {
        let selected = controller
            .write()
            .select([candidate])
            .map(|file| file.status_text());
        match selected {
            Ok(status) => diagnostics::info(&status),
            Err(e) => report_validation(&e),
        }
    };

    let on_reject = move |err: ValidationError| report_validation(&err);

    // --- Submission ---
    let on_submit = {
        let config = Rc::clone(&config);
        move |_| {
            let begun = controller.write().begin_submit();
            let request = match begun {
                Ok(Some(request)) => request,
                // Already in flight.
                Ok(None) => return,
                Err(e) => {
                    report_validation(&e);
                    return;
                }
            };

            let config = Rc::clone(&config);
            spawn(async move {
                let outcome = api::submit(&config, &request).await;
                let (settled, phase) = {
                    let mut c = controller.write();
                    let settled = c.settle(outcome).map(|r| r.map(|job| job.job_id.clone()));
                    (settled, c.phase())
                };
                diagnostics::info(&format!("Submission settled, now {phase}"));
                match settled {
                    Some(Ok(job_id)) => {
                        diagnostics::info(&format!("Obfuscation finished: job {job_id}"));
                    }
                    Some(Err(e)) => {
                        diagnostics::error("Obfuscation error", &e);
                        notice::alert(&format!("Error: {e}"));
                    }
                    None => diagnostics::warn("response arrived with no submission in flight"),
                }
            });
        }
    };

    // --- Post-completion actions ---
    let on_download = {
        let config = Rc::clone(&config);
        move |()| {
            let job = match controller.read().completed() {
                Ok(job) => job.clone(),
                Err(e) => {
                    report_post_action(&e);
                    return;
                }
            };
            let config = Rc::clone(&config);
            spawn(async move {
                if let Err(e) = download::download_result(&config, &job).await {
                    report_post_action(&e);
                }
            });
        }
    };

    let on_new_file = move |()| controller.write().reset();

    // --- Layout ---
    let (phase, status, options, source) = {
        let c = controller.read();
        (
            c.phase(),
            c.status_text(),
            c.options().clone(),
            c.result().map(|r| r.transformed_source.clone()),
        )
    };

    rsx! {
        style { dangerous_inner_html: include_str!("../assets/main.css") }

        div { class: "app",
            header { class: "app-header",
                h1 { "luashade" }
                p { class: "subtitle", "Lua source obfuscation" }
            }

            main { class: "app-main",
                if phase.upload_visible() {
                    div { class: "upload-container",
                        FileUpload {
                            status: status,
                            disabled: !phase.inputs_enabled(),
                            on_select: on_select,
                            on_reject: on_reject,
                        }

                        OptionsPanel {
                            presets: config.presets.clone(),
                            options: options,
                            disabled: !phase.inputs_enabled(),
                            on_preset: move |preset: PresetSelection| controller.write().choose_preset(preset),
                            on_option: move |(key, enabled): (OptionKey, bool)| controller.write().set_option(key, enabled),
                        }

                        button {
                            class: if phase.submit_enabled() { "button button-primary" } else { "button button-disabled" },
                            disabled: !phase.submit_enabled(),
                            onclick: on_submit,
                            "Obfuscate"
                        }
                    }
                }

                if let Some(source) = source.filter(|_| phase.result_visible()) {
                    ResultPanel {
                        source: source,
                        copy_feedback: config.copy_feedback(),
                        on_download: on_download,
                        on_new_file: on_new_file,
                    }
                }
            }

            LoadingOverlay { visible: phase.loading_visible() }
        }
    }
}
