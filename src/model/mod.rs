//! Note model types.
//!
//! A note is raw Markdown plus a title derived from its first heading.
//! Persistence and lifecycle belong to the caller; these types only keep
//! derived values consistent with content.

mod content;
mod note;

pub use content::{
    create_empty_note_content, empty_note_content, format_note_content, remove_h1_from_content,
    DEFAULT_NOTE_TITLE,
};
pub use note::{Note, NoteSummary};
