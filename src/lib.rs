//! # notemark
//!
//! Plain-text reduction and display metrics for Markdown notes.
//!
//! This library strips Markdown syntax down to readable text and derives the
//! values a note list or editor header shows: a title, a preview snippet, a
//! word count, and an estimated reading time.
//!
//! ## Quick Start
//!
//! ```
//! use notemark::{metrics, strip_markdown};
//!
//! let note = "# Weekly review\n\nShipped the **parser** and fixed [two bugs](https://example.com).";
//!
//! assert_eq!(
//!     strip_markdown(note),
//!     "Weekly review\nShipped the parser and fixed two bugs."
//! );
//!
//! let m = metrics(note);
//! assert_eq!(m.title, "Weekly review");
//! assert_eq!(m.preview, "Shipped the parser and fixed two bugs.");
//! assert_eq!(m.word_count, 9);
//! assert_eq!(m.reading_time_minutes, 1);
//! ```
//!
//! ## Features
//!
//! - **Ordered reducer**: HTML tags, fenced code, rules, headings, emphasis,
//!   code spans, images, links, quotes, task lists and table pipes
//! - **Metrics**: title, preview, word count, reading time
//! - **Note helpers**: empty-note templates, title-aware formatting
//! - **Parallel summaries**: Uses Rayon for large note lists
//!
//! Every text operation is total: malformed Markdown is left as literal text
//! and nothing panics or returns an error.

pub mod error;
pub mod metrics;
pub mod model;
pub mod reduce;
pub mod summary;

// Re-export commonly used types
pub use error::{Error, Result};
pub use metrics::{
    content_preview, extract_title, reading_time, reading_time_at, word_count, ContentMetrics,
    JsonFormat, MetricsOptions, PreviewOptions, DEFAULT_PREVIEW_LENGTH, UNTITLED_NOTE,
    WORDS_PER_MINUTE,
};
pub use model::{
    create_empty_note_content, empty_note_content, format_note_content, remove_h1_from_content,
    Note, NoteSummary, DEFAULT_NOTE_TITLE,
};
pub use reduce::{strip_markdown, PlainTextReducer};
pub use summary::{sort_by_recent, summarize_notes};

use std::path::Path;

/// Compute title, preview, word count and reading time with default
/// options.
pub fn metrics(content: &str) -> ContentMetrics {
    ContentMetrics::compute(content, &MetricsOptions::default())
}

/// Compute metrics with custom options.
///
/// # Example
///
/// ```
/// use notemark::{metrics_with_options, MetricsOptions};
///
/// let options = MetricsOptions::new().with_preview_max_length(5);
/// let m = metrics_with_options("# T\n\nabcdefgh", &options);
/// assert_eq!(m.preview, "abcde...");
/// ```
pub fn metrics_with_options(content: &str, options: &MetricsOptions) -> ContentMetrics {
    ContentMetrics::compute(content, options)
}

/// Read a UTF-8 Markdown note from disk.
///
/// # Example
///
/// ```no_run
/// use notemark::read_note;
///
/// let content = read_note("notes/today.md").unwrap();
/// println!("{}", notemark::extract_title(&content));
/// ```
pub fn read_note<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    String::from_utf8(bytes)
        .map_err(|e| Error::Encoding(format!("{}: {}", path.display(), e.utf8_error())))
}

/// Read a note file and compute its metrics.
pub fn metrics_from_file<P: AsRef<Path>>(
    path: P,
    options: &MetricsOptions,
) -> Result<ContentMetrics> {
    let content = read_note(path)?;
    Ok(ContentMetrics::compute(&content, options))
}

/// Read a note file into a [`Note`], using the file stem as its id.
pub fn load_note<P: AsRef<Path>>(path: P) -> Result<Note> {
    let path = path.as_ref();
    let id = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .ok_or_else(|| Error::Other(format!("No file name: {}", path.display())))?;
    let content = read_note(path)?;
    Ok(Note::new(id, &content))
}
