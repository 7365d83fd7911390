//! Integration test: drive a controller through complete job lifecycles
//! the way the browser front end does.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use luashade_core::{
    ClientConfig, FieldValue, FileCandidate, JobController, OptionKey, PresetSelection,
    RawResponse, SubmissionError, UiPhase, download_filename, response::parse_file_record,
};

fn candidate(name: &str, content: &str) -> FileCandidate {
    FileCandidate {
        name: name.into(),
        content: content.as_bytes().to_vec(),
    }
}

fn response(status: u16, status_text: &str, body: &str) -> Result<RawResponse, SubmissionError> {
    Ok(RawResponse {
        status,
        status_text: status_text.into(),
        body: body.into(),
    })
}

#[test]
fn txt_upload_to_download_and_reset() {
    let config = ClientConfig::default();
    let mut controller = JobController::from_config(&config);

    controller
        .select([candidate("script.txt", "print('hi')")])
        .unwrap();
    assert_eq!(controller.status_text(), "Selected: script.txt (11 bytes)");

    let request = controller.begin_submit().unwrap().expect("should start");
    assert_eq!(controller.phase(), UiPhase::Submitting);
    assert!(controller.phase().loading_visible());
    let fields = request.form_fields();
    assert_eq!(fields.len(), 2, "named preset sends no flags");
    assert_eq!(fields[1].value, FieldValue::Text("medium"));

    // A second click while in flight never produces a second request.
    assert!(controller.begin_submit().unwrap().is_none());

    let result = controller
        .settle(response(
            200,
            "OK",
            r#"{"success":true,"file_id":"abc","obfuscated_code":"return 1"}"#,
        ))
        .unwrap()
        .unwrap();
    assert_eq!(result.job_id, "abc");
    assert_eq!(result.transformed_source, "return 1");
    assert!(controller.phase().result_visible());
    assert!(!controller.phase().loading_visible());

    let job = controller.completed().unwrap();
    let url = config.file_url(&job.job_id);
    assert_eq!(url, "/api/files/abc");
    let record = parse_file_record(
        r#"{"obfuscated_content":"return 1","file":{"original_filename":"script.txt"}}"#,
    )
    .unwrap();
    assert_eq!(
        download_filename(&record.file.original_filename),
        "script_obfuscated.lua"
    );

    controller.reset();
    assert_eq!(controller.phase(), UiPhase::Idle);
    assert!(controller.file().is_none());
    assert!(controller.result().is_none());
    controller.reset();
    assert_eq!(controller.phase(), UiPhase::Idle);
    assert!(!controller.phase().submit_enabled());
}

#[test]
fn custom_submission_with_nothing_checked_sends_twelve_false_flags() {
    let mut controller = JobController::default();
    controller.choose_preset(PresetSelection::Custom);
    controller.select([candidate("main.lua", "x")]).unwrap();

    let request = controller.begin_submit().unwrap().unwrap();
    let flags: Vec<_> = request.form_fields()[2..]
        .iter()
        .map(|f| (f.name, f.value))
        .collect();
    assert_eq!(flags.len(), OptionKey::ALL.len());
    assert!(flags.iter().all(|(_, v)| *v == FieldValue::Text("false")));
    assert_eq!(request.preset_id, "none");
}

#[test]
fn server_failure_keeps_file_for_retry() {
    let mut controller = JobController::from_config(&ClientConfig::default());
    controller.select([candidate("main.lua", "x")]).unwrap();

    controller.begin_submit().unwrap().unwrap();
    let err = controller
        .settle(response(500, "Internal Server Error", "<html>"))
        .unwrap()
        .unwrap_err();
    assert!(err.to_string().contains("500"));
    assert_eq!(controller.phase(), UiPhase::FileSelected);

    controller.begin_submit().unwrap().unwrap();
    let err = controller
        .settle(response(200, "OK", r#"{"success":false,"error":"X"}"#))
        .unwrap()
        .unwrap_err();
    assert_eq!(err.to_string(), "X");
    assert_eq!(controller.phase(), UiPhase::FileSelected);
    assert_eq!(controller.file().unwrap().name(), "main.lua");

    controller.begin_submit().unwrap().unwrap();
    let err = controller
        .settle(Err(SubmissionError::TimedOut { secs: 120 }))
        .unwrap()
        .unwrap_err();
    assert_eq!(err, SubmissionError::TimedOut { secs: 120 });
    assert!(controller.phase().submit_enabled());
}
