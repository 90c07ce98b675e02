//! Helpers for shaping note content in the editor.

use crate::metrics::{extract_title, strip_first_h1};

/// Title given to freshly created notes.
pub const DEFAULT_NOTE_TITLE: &str = "New Note";

/// Content for a new note titled `title`: a heading and an empty body.
pub fn create_empty_note_content(title: &str) -> String {
    format!("# {}\n\n", title)
}

/// Content for a new note with the default title.
pub fn empty_note_content() -> String {
    create_empty_note_content(DEFAULT_NOTE_TITLE)
}

/// Trim content; a note that is only its heading gets a blank body appended
/// so the editor has somewhere to type.
pub fn format_note_content(content: &str) -> String {
    let trimmed = content.trim();
    let title = extract_title(trimmed);

    if trimmed == format!("# {}", title) {
        create_empty_note_content(&title)
    } else {
        trimmed.to_string()
    }
}

/// The note body without its level-one title line, for views that show the
/// title separately.
pub fn remove_h1_from_content(content: &str) -> String {
    strip_first_h1(content).trim().to_string()
}
