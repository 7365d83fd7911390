//! HTTP transport to the obfuscation service via `fetch`.
//!
//! [`submit`] sends one multipart `POST` and hands back the raw status
//! and body; interpreting them is the controller's job. [`fetch_record`]
//! retrieves the stored result for a completed job.

use std::time::Duration;

use futures::future::{Either, select};
use gloo_timers::future::TimeoutFuture;
use luashade_core::response::parse_file_record;
use luashade_core::{
    ClientConfig, FieldValue, FileRecord, RawResponse, SubmissionError, SubmissionRequest,
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, FormData, Request, RequestInit, Response};

use crate::diagnostics::{self, js_error_message};

/// Errors raised by the transport itself, before any interpretation.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// A browser API call returned an error (network failure, CORS, ...).
    #[error("{0}")]
    JsError(String),

    /// The service answered with a non-2xx status.
    #[error("HTTP {status} {status_text}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// HTTP reason phrase.
        status_text: String,
    },

    /// The body was not the expected JSON.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<JsValue> for TransportError {
    fn from(value: JsValue) -> Self {
        Self::JsError(js_error_message(&value))
    }
}

impl From<TransportError> for SubmissionError {
    fn from(err: TransportError) -> Self {
        Self::Network(err.to_string())
    }
}

/// Send `request` to the submission endpoint.
///
/// When `config` sets a timeout, the request is raced against it; on
/// expiry the fetch is aborted and [`SubmissionError::TimedOut`] returned.
///
/// # Errors
///
/// Returns [`SubmissionError::Network`] when no response was received and
/// [`SubmissionError::TimedOut`] on timeout. Non-2xx statuses are *not*
/// errors here; they are returned as a [`RawResponse`].
#[allow(clippy::future_not_send)] // WASM is single-threaded; fetch futures are !Send
pub async fn submit(
    config: &ClientConfig,
    request: &SubmissionRequest,
) -> Result<RawResponse, SubmissionError> {
    let abort = AbortController::new().map_err(TransportError::from)?;
    let form = build_form(request)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&form);
    init.set_signal(Some(&abort.signal()));

    diagnostics::info(&format!(
        "Submitting file for obfuscation: {} (preset {})",
        request.file.name(),
        request.preset_id
    ));

    let url = config.submit_url();
    let fetch = Box::pin(send(&url, &init));
    let Some(timeout) = config.submit_timeout() else {
        return Ok(fetch.await?);
    };

    match select(fetch, Box::pin(TimeoutFuture::new(millis(timeout)))).await {
        Either::Left((outcome, _)) => Ok(outcome?),
        Either::Right(((), _)) => {
            abort.abort();
            Err(SubmissionError::TimedOut {
                secs: timeout.as_secs(),
            })
        }
    }
}

/// Fetch the stored record for `file_id`.
///
/// # Errors
///
/// Returns [`TransportError`] for network failures, non-2xx statuses,
/// and bodies that are not a valid record.
#[allow(clippy::future_not_send)] // WASM is single-threaded; fetch futures are !Send
pub async fn fetch_record(config: &ClientConfig, file_id: &str) -> Result<FileRecord, TransportError> {
    let init = RequestInit::new();
    init.set_method("GET");
    let raw = send(&config.file_url(file_id), &init).await?;
    if !raw.is_success() {
        return Err(TransportError::Status {
            status: raw.status,
            status_text: raw.status_text,
        });
    }
    Ok(parse_file_record(&raw.body)?)
}

/// Issue one fetch and read the whole body as text.
#[allow(clippy::future_not_send)]
async fn send(url: &str, init: &RequestInit) -> Result<RawResponse, TransportError> {
    let window =
        web_sys::window().ok_or_else(|| TransportError::JsError("no global window".into()))?;
    let request = Request::new_with_str_and_init(url, init)?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    // An unreadable body is treated like an empty one; the status decides.
    let body = match response.text() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default(),
        Err(_) => String::new(),
    };
    Ok(RawResponse {
        status: response.status(),
        status_text: response.status_text(),
        body,
    })
}

/// Build the multipart body from the request's fields.
fn build_form(request: &SubmissionRequest) -> Result<FormData, TransportError> {
    let form = FormData::new()?;
    for field in request.form_fields() {
        match field.value {
            FieldValue::File { filename, content } => {
                let parts = js_sys::Array::new();
                parts.push(&js_sys::Uint8Array::from(content));
                let blob = web_sys::Blob::new_with_u8_array_sequence(&parts)?;
                form.append_with_blob_and_filename(field.name, &blob, filename)?;
            }
            FieldValue::Text(value) => form.append_with_str(field.name, value)?,
        }
    }
    Ok(form)
}

/// Clamp a duration to the `u32` milliseconds `setTimeout` accepts.
fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}
