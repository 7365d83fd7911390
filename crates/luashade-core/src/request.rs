//! The multipart submission built fresh for every attempt.

use crate::config::Configuration;
use crate::intake::SelectedFile;
use crate::options::OptionSet;

/// Name of the binary file field.
pub const FILE_FIELD: &str = "file";

/// Name of the preset identifier field.
pub const PRESET_FIELD: &str = "preset";

/// One submission attempt. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    /// The file being submitted.
    pub file: SelectedFile,
    /// Value of the `preset` field.
    pub preset_id: String,
    /// Explicit flags, present only for the custom sentinel.
    pub options: Option<OptionSet>,
}

/// Value of one multipart field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// A file part with its original filename.
    File {
        /// Filename reported in the part's `Content-Disposition`.
        filename: &'a str,
        /// Raw bytes.
        content: &'a [u8],
    },
    /// A plain text part.
    Text(&'a str),
}

/// A named multipart field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField<'a> {
    /// Field name.
    pub name: &'a str,
    /// Field value.
    pub value: FieldValue<'a>,
}

const fn bool_text(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

impl SubmissionRequest {
    /// Combine a validated file with an assembled configuration.
    #[must_use]
    pub fn new(file: SelectedFile, config: Configuration) -> Self {
        Self {
            file,
            preset_id: config.preset_id,
            options: config.options,
        }
    }

    /// The multipart fields in send order.
    ///
    /// `file` then `preset`, followed by one `"true"`/`"false"` field per
    /// option key when explicit flags are present.
    #[must_use]
    pub fn form_fields(&self) -> Vec<FormField<'_>> {
        let mut fields = vec![
            FormField {
                name: FILE_FIELD,
                value: FieldValue::File {
                    filename: self.file.name(),
                    content: self.file.content(),
                },
            },
            FormField {
                name: PRESET_FIELD,
                value: FieldValue::Text(&self.preset_id),
            },
        ];
        if let Some(options) = &self.options {
            fields.extend(options.iter().map(|(key, enabled)| FormField {
                name: key.field_name(),
                value: FieldValue::Text(bool_text(enabled)),
            }));
        }
        fields
    }
}
