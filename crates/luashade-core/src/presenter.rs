//! Rules for the post-completion actions.
//!
//! The actions themselves (fetch, save, clipboard) live in `luashade-io`.

use crate::intake::{SOURCE_EXTENSION, TEXT_EXTENSION};

/// Marker inserted before the source suffix of downloaded files.
pub const OBFUSCATED_MARKER: &str = "_obfuscated";

/// MIME type of downloaded files.
pub const DOWNLOAD_MIME_TYPE: &str = "text/plain";

/// Copy button label while the confirmation is showing.
pub const COPIED_LABEL: &str = "Copied!";

/// State of the copy confirmation.
///
/// Each successful copy [`start`](Self::start)s a new confirmation and
/// gets a ticket; only the ticket of the latest copy can
/// [`expire`](Self::expire) it, so an older timer never cuts a newer
/// confirmation short.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    generation: u64,
    showing: bool,
}

impl CopyFeedback {
    /// Whether the button should show [`COPIED_LABEL`].
    #[must_use]
    pub const fn is_showing(self) -> bool {
        self.showing
    }

    /// Show the confirmation and return the ticket that may clear it.
    pub const fn start(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.showing = true;
        self.generation
    }

    /// Clear the confirmation if `ticket` belongs to the latest copy.
    pub const fn expire(&mut self, ticket: u64) {
        if ticket == self.generation {
            self.showing = false;
        }
    }
}

/// Strip a trailing `.<ext>` (ASCII case-insensitive) from `name`.
fn strip_extension<'a>(name: &'a str, ext: &str) -> Option<&'a str> {
    let (stem, found) = name.rsplit_once('.')?;
    found.eq_ignore_ascii_case(ext).then_some(stem)
}

/// Destination filename for a downloaded result.
///
/// A trailing `.txt` is first swapped for `.lua`, then `.lua` becomes
/// `_obfuscated.lua`. Names with neither suffix get `_obfuscated.lua`
/// appended.
///
/// ```
/// use luashade_core::presenter::download_filename;
///
/// assert_eq!(download_filename("script.txt"), "script_obfuscated.lua");
/// assert_eq!(download_filename("main.lua"), "main_obfuscated.lua");
/// ```
#[must_use]
pub fn download_filename(original: &str) -> String {
    let stem = strip_extension(original, TEXT_EXTENSION)
        .or_else(|| strip_extension(original, SOURCE_EXTENSION))
        .unwrap_or(original);
    format!("{stem}{OBFUSCATED_MARKER}.{SOURCE_EXTENSION}")
}
