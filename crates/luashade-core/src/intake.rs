//! File acquisition: validation and size formatting.
//!
//! Both input surfaces (the file picker and the drop zone) hand their
//! file list to [`select`], which considers only the first entry.

use std::fmt;
use std::rc::Rc;

use crate::error::ValidationError;

/// Accepted file name suffixes, without the leading dot.
///
/// `lua` is the source-code suffix, `txt` the plain-text suffix.
pub const ACCEPTED_EXTENSIONS: &[&str] = &[SOURCE_EXTENSION, TEXT_EXTENSION];

/// Suffix for Lua source files.
pub const SOURCE_EXTENSION: &str = "lua";

/// Suffix for plain-text files containing Lua code.
pub const TEXT_EXTENSION: &str = "txt";

/// Value for the picker's `accept` attribute.
pub const ACCEPT_ATTRIBUTE: &str = ".lua,.txt";

/// Check whether a filename has an accepted extension (case-insensitive).
#[must_use]
pub fn has_accepted_extension(name: &str) -> bool {
    name.rsplit_once('.').is_some_and(|(_, ext)| {
        ACCEPTED_EXTENSIONS
            .iter()
            .any(|a| a.eq_ignore_ascii_case(ext))
    })
}

/// Validate a file name against [`ACCEPTED_EXTENSIONS`].
///
/// # Errors
///
/// Returns [`ValidationError::UnsupportedFormat`] for any other suffix.
pub fn check_name(name: &str) -> Result<(), ValidationError> {
    if has_accepted_extension(name) {
        Ok(())
    } else {
        Err(ValidationError::UnsupportedFormat {
            name: name.to_owned(),
        })
    }
}

/// An unvalidated file taken from a picker-change or drop event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    /// File name as reported by the browser.
    pub name: String,
    /// File bytes.
    pub content: Vec<u8>,
}

/// The single live file selection.
///
/// Content is shared so a [`SubmissionRequest`](crate::SubmissionRequest)
/// can hold the file without copying the bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    content: Rc<[u8]>,
}

impl SelectedFile {
    /// File name as reported by the browser.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size of the file in bytes.
    #[must_use]
    pub fn byte_size(&self) -> u64 {
        self.content.len() as u64
    }

    /// File bytes.
    #[must_use]
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Human-readable size, see [`format_size`].
    #[must_use]
    pub fn size_label(&self) -> FileSize {
        FileSize(self.byte_size())
    }

    /// Status line shown under the drop zone.
    #[must_use]
    pub fn status_text(&self) -> String {
        format!("Selected: {} ({})", self.name, self.size_label())
    }
}

/// Status line when nothing is selected.
pub const NO_FILE_STATUS: &str = "No file selected";

/// Validate the first of `candidates` and turn it into a [`SelectedFile`].
///
/// Additional entries are ignored.
///
/// # Errors
///
/// Returns [`ValidationError::NoFileProvided`] for an empty list and
/// [`ValidationError::UnsupportedFormat`] when the first entry's name does
/// not end in an accepted suffix.
pub fn select(
    candidates: impl IntoIterator<Item = FileCandidate>,
) -> Result<SelectedFile, ValidationError> {
    let candidate = candidates
        .into_iter()
        .next()
        .ok_or(ValidationError::NoFileProvided)?;
    check_name(&candidate.name)?;
    Ok(SelectedFile {
        name: candidate.name,
        content: candidate.content.into(),
    })
}

/// A byte count that displays as bytes, KB, or MB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSize(pub u64);

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// `bytes / unit` in tenths, with exact halves rounded up.
const fn tenths(bytes: u64, unit: u64) -> u64 {
    bytes.saturating_mul(10).saturating_add(unit / 2) / unit
}

impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.0;
        let (scaled, unit) = if bytes < KIB {
            return write!(f, "{bytes} bytes");
        } else if bytes < MIB {
            (tenths(bytes, KIB), "KB")
        } else {
            (tenths(bytes, MIB), "MB")
        };
        write!(f, "{}.{} {unit}", scaled / 10, scaled % 10)
    }
}

/// Format a byte count for display.
///
/// Below 1024 the integer byte count is shown, below 1,048,576 a
/// one-decimal kilobyte value, otherwise a one-decimal megabyte value.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    FileSize(bytes).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, len: usize) -> FileCandidate {
        FileCandidate {
            name: name.into(),
            content: vec![b'x'; len],
        }
    }

    #[test]
    fn accepts_lua_and_txt_any_case() {
        for name in ["a.lua", "a.LUA", "b.Txt", "dir.v2.lua", "x.TXT"] {
            assert!(has_accepted_extension(name), "{name} should be accepted");
        }
    }

    #[test]
    fn rejects_other_suffixes() {
        for name in ["a.luac", "a.js", "lua", "txt", "a.lua.bak", "a.", ""] {
            assert!(!has_accepted_extension(name), "{name} should be rejected");
            assert_eq!(
                check_name(name),
                Err(ValidationError::UnsupportedFormat { name: name.into() })
            );
        }
    }

    #[test]
    fn select_takes_first_entry_only() {
        let file = select([candidate("first.lua", 3), candidate("second.exe", 9)]).unwrap();
        assert_eq!(file.name(), "first.lua");
        assert_eq!(file.byte_size(), 3);
    }

    #[test]
    fn select_rejects_when_first_entry_invalid() {
        let err = select([candidate("first.exe", 3), candidate("second.lua", 9)]).unwrap_err();
        assert!(matches!(err, ValidationError::UnsupportedFormat { .. }));
    }

    #[test]
    fn select_empty_list() {
        assert_eq!(select([]), Err(ValidationError::NoFileProvided));
    }

    #[test]
    fn size_boundaries() {
        assert_eq!(format_size(0), "0 bytes");
        assert_eq!(format_size(1023), "1023 bytes");
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1_048_575), "1024.0 KB");
        assert_eq!(format_size(1_048_576), "1.0 MB");
        assert_eq!(format_size(5 * 1_048_576 + 104_858), "5.1 MB");
    }

    #[test]
    fn size_halves_round_up() {
        assert_eq!(format_size(1280), "1.3 KB");
        assert_eq!(format_size(3328), "3.3 KB");
        assert_eq!(format_size(1792), "1.8 KB");
        assert_eq!(format_size(1_048_576 + 52_429), "1.1 MB");
    }

    #[test]
    fn status_text_includes_name_and_size() {
        let file = select([candidate("script.lua", 2048)]).unwrap();
        assert_eq!(file.status_text(), "Selected: script.lua (2.0 KB)");
    }
}
