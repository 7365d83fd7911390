//! Interpretation of service responses.
//!
//! A submission response is judged on two independent axes: whether the
//! HTTP status is 2xx and whether the body parses as the expected JSON.
//! [`interpret`] resolves all four combinations in a fixed order.

use serde::Deserialize;

use crate::error::SubmissionError;

/// A settled HTTP response, as seen by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// HTTP reason phrase (may be empty, e.g. over HTTP/2).
    pub status_text: String,
    /// Response body as text.
    pub body: String,
}

impl RawResponse {
    /// Whether the status is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    fn generic_server_error(&self) -> String {
        let text = self.status_text.trim();
        if text.is_empty() {
            format!("Server error: {}", self.status)
        } else {
            format!("Server error: {} {text}", self.status)
        }
    }
}

/// Body of `POST /api/obfuscate`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SubmitResponse {
    /// Payload-level success flag. Missing counts as false.
    #[serde(default)]
    pub success: bool,
    /// Identifier of the stored result.
    #[serde(default)]
    pub file_id: Option<String>,
    /// Transformed source for on-screen display.
    #[serde(default)]
    pub obfuscated_code: Option<String>,
    /// Error message on failure.
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `GET /api/files/{file_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileRecord {
    /// Canonical transformed source.
    pub obfuscated_content: String,
    /// Metadata about the original upload.
    pub file: FileMetadata,
}

/// Metadata part of a [`FileRecord`]. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileMetadata {
    /// Name of the file as originally uploaded.
    pub original_filename: String,
}

/// The terminal value of a successful job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobResult {
    /// Server identifier, used to fetch the canonical artifact.
    pub job_id: String,
    /// Transformed source shown on screen and copied to the clipboard.
    pub transformed_source: String,
}

/// Non-empty error message from a parsed body.
fn message(body: &SubmitResponse) -> Option<&str> {
    body.error.as_deref().filter(|e| !e.is_empty())
}

/// Resolve a submission response into a job result or an error.
///
/// | status | body parses | outcome |
/// |---|---|---|
/// | fail | yes | server `error`, else `Server error: <status>` |
/// | fail | no | `Server error: <status>` |
/// | ok | no | [`SubmissionError::InvalidResponseFormat`] |
/// | ok | yes, `success: false` | server `error`, else `Unknown error` |
/// | ok | yes, `success: true` | [`JobResult`] |
///
/// # Errors
///
/// Returns the [`SubmissionError`] selected by the table above. A
/// successful payload without `file_id` is also
/// [`InvalidResponseFormat`](SubmissionError::InvalidResponseFormat).
pub fn interpret(response: &RawResponse) -> Result<JobResult, SubmissionError> {
    let parsed = serde_json::from_str::<SubmitResponse>(&response.body);

    let body = match (response.is_success(), parsed) {
        (false, Ok(body)) => {
            return Err(SubmissionError::Server {
                status: response.status,
                message: message(&body)
                    .map_or_else(|| response.generic_server_error(), str::to_owned),
            });
        }
        (false, Err(_)) => {
            return Err(SubmissionError::Server {
                status: response.status,
                message: response.generic_server_error(),
            });
        }
        (true, Err(_)) => return Err(SubmissionError::InvalidResponseFormat),
        (true, Ok(body)) => body,
    };

    if !body.success {
        return Err(SubmissionError::Rejected(
            message(&body).unwrap_or("Unknown error").to_owned(),
        ));
    }

    let job_id = body
        .file_id
        .filter(|id| !id.is_empty())
        .ok_or(SubmissionError::InvalidResponseFormat)?;
    Ok(JobResult {
        job_id,
        transformed_source: body.obfuscated_code.unwrap_or_default(),
    })
}

/// Parse the body of `GET /api/files/{file_id}`.
///
/// # Errors
///
/// Returns the `serde_json` error when the body is not a valid record.
pub fn parse_file_record(body: &str) -> Result<FileRecord, serde_json::Error> {
    serde_json::from_str(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(status: u16, status_text: &str, body: &str) -> RawResponse {
        RawResponse {
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }

    #[test]
    fn failure_status_with_server_message() {
        let err = interpret(&raw(400, "Bad Request", r#"{"success":false,"error":"bad lua"}"#))
            .unwrap_err();
        assert_eq!(
            err,
            SubmissionError::Server {
                status: 400,
                message: "bad lua".into(),
            }
        );
    }

    #[test]
    fn failure_status_parsed_without_message() {
        let err = interpret(&raw(502, "Bad Gateway", r#"{"success":false}"#)).unwrap_err();
        assert_eq!(err.to_string(), "Server error: 502 Bad Gateway");
    }

    #[test]
    fn failure_status_empty_error_falls_back_to_generic() {
        let err = interpret(&raw(500, "", r#"{"error":""}"#)).unwrap_err();
        assert_eq!(err.to_string(), "Server error: 500");
    }

    #[test]
    fn failure_status_unparseable_body() {
        let err = interpret(&raw(500, "Internal Server Error", "<html>oops</html>")).unwrap_err();
        assert!(err.to_string().contains("500"), "{err}");
        assert!(matches!(err, SubmissionError::Server { status: 500, .. }));
    }

    #[test]
    fn failure_status_empty_body() {
        let err = interpret(&raw(503, "Service Unavailable", "")).unwrap_err();
        assert_eq!(err.to_string(), "Server error: 503 Service Unavailable");
    }

    #[test]
    fn success_status_unparseable_body() {
        assert_eq!(
            interpret(&raw(200, "OK", "not json")),
            Err(SubmissionError::InvalidResponseFormat)
        );
    }

    #[test]
    fn success_status_non_object_json() {
        assert_eq!(
            interpret(&raw(200, "OK", "[1, 2]")),
            Err(SubmissionError::InvalidResponseFormat)
        );
    }

    #[test]
    fn payload_failure_surfaces_message_verbatim() {
        assert_eq!(
            interpret(&raw(200, "OK", r#"{"success":false,"error":"X"}"#)),
            Err(SubmissionError::Rejected("X".into()))
        );
    }

    #[test]
    fn payload_failure_without_message() {
        assert_eq!(
            interpret(&raw(200, "OK", "{}")),
            Err(SubmissionError::Rejected("Unknown error".into()))
        );
    }

    #[test]
    fn payload_success() {
        let result = interpret(&raw(
            200,
            "OK",
            r#"{"success":true,"file_id":"abc","obfuscated_code":"return 1"}"#,
        ))
        .unwrap();
        assert_eq!(result.job_id, "abc");
        assert_eq!(result.transformed_source, "return 1");
    }

    #[test]
    fn payload_success_without_file_id() {
        assert_eq!(
            interpret(&raw(200, "OK", r#"{"success":true,"obfuscated_code":"x"}"#)),
            Err(SubmissionError::InvalidResponseFormat)
        );
    }

    #[test]
    fn file_record_ignores_extra_metadata() {
        let record = parse_file_record(
            r#"{"obfuscated_content":"return 2","file":{"original_filename":"a.txt","size":9}}"#,
        )
        .unwrap();
        assert_eq!(record.obfuscated_content, "return 2");
        assert_eq!(record.file.original_filename, "a.txt");
    }
}
