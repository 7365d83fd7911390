//! Saving results as files via Blob URLs.
//!
//! The browser has no direct "save file" API.  This module triggers
//! downloads by creating a `Blob`, generating an object URL, and
//! programmatically clicking a temporary `<a>` element.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use luashade_core::presenter::DOWNLOAD_MIME_TYPE;
use luashade_core::{ClientConfig, JobResult, PostActionError, download_filename};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

use crate::api;
use crate::diagnostics::js_error_message;

/// Errors that can occur when triggering a file download.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for DownloadError {
    fn from(value: JsValue) -> Self {
        Self::JsError(js_error_message(&value))
    }
}

/// Fetch the canonical artifact for `job` and save it.
///
/// The record is fetched again from the service by job id rather than
/// saving the on-screen text. The destination name comes from
/// [`download_filename`] applied to the original upload name.
///
/// # Errors
///
/// Returns [`PostActionError::Download`] carrying the cause when the
/// fetch, decode, or save fails.
#[allow(clippy::future_not_send)] // WASM is single-threaded; fetch futures are !Send
pub async fn download_result(config: &ClientConfig, job: &JobResult) -> Result<(), PostActionError> {
    let record = api::fetch_record(config, &job.job_id)
        .await
        .map_err(|e| PostActionError::Download(e.to_string()))?;
    let filename = download_filename(&record.file.original_filename);
    trigger_download(&record.obfuscated_content, &filename, DOWNLOAD_MIME_TYPE)
        .map_err(|e| PostActionError::Download(e.to_string()))
}

/// Trigger a file download in the browser.
///
/// Creates a `Blob` from `data`, generates an object URL, and
/// programmatically clicks a temporary `<a download="filename">` element.
/// The object URL is revoked after the click.
///
/// # Errors
///
/// Returns [`DownloadError::JsError`] if any browser API call fails
/// (e.g., `Blob` creation, `URL.createObjectURL`, element creation).
pub fn trigger_download(data: &str, filename: &str, mime_type: &str) -> Result<(), DownloadError> {
    let window =
        web_sys::window().ok_or_else(|| DownloadError::JsError("no global window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| DownloadError::JsError("no document".into()))?;

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(data));

    let opts = BlobPropertyBag::new();
    opts.set_type(mime_type);

    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &opts)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|e| DownloadError::JsError(format!("failed to cast element: {e:?}")))?;

    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = document
        .body()
        .ok_or_else(|| DownloadError::JsError("no document body".into()))?;
    body.append_child(&anchor)?;
    anchor.click();

    // The download has started; cleanup failures are not download failures.
    let _ = body.remove_child(&anchor);
    let _ = web_sys::Url::revoke_object_url(&url);

    Ok(())
}
