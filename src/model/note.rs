//! Note records and list summaries.

use super::content::{empty_note_content, format_note_content, remove_h1_from_content};
use crate::metrics::{extract_title, ContentMetrics, MetricsOptions};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A Markdown note whose title is derived from its content.
///
/// Storage is the caller's concern; this type only keeps the title in step
/// with the content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Caller-assigned identifier
    pub id: String,

    /// Title derived from the first heading
    title: String,

    /// Raw Markdown content
    content: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last content change
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Create a note from content, stamped with the current time.
    pub fn new(id: impl Into<String>, content: &str) -> Self {
        Self::new_at(id, content, Utc::now())
    }

    /// Create a note from content with an explicit creation time.
    pub fn new_at(id: impl Into<String>, content: &str, at: DateTime<Utc>) -> Self {
        let content = format_note_content(content);
        Self {
            id: id.into(),
            title: extract_title(&content),
            content,
            created_at: at,
            updated_at: at,
        }
    }

    /// Create a note with the default "New Note" heading and empty body.
    pub fn untitled(id: impl Into<String>) -> Self {
        Self::new(id, &empty_note_content())
    }

    /// The derived title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The raw Markdown content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the content, re-deriving the title.
    pub fn set_content(&mut self, content: &str) {
        self.set_content_at(content, Utc::now());
    }

    /// Replace the content with an explicit update time.
    pub fn set_content_at(&mut self, content: &str, at: DateTime<Utc>) {
        self.content = content.to_string();
        self.title = extract_title(&self.content);
        self.updated_at = at;
        log::debug!("note {} retitled to {:?}", self.id, self.title);
    }

    /// Content without the title line.
    pub fn body(&self) -> String {
        remove_h1_from_content(&self.content)
    }

    /// Compute display metrics for this note.
    pub fn metrics(&self, options: &MetricsOptions) -> ContentMetrics {
        ContentMetrics::compute(&self.content, options)
    }

    /// Build the list-view summary for this note.
    pub fn summary(&self, options: &MetricsOptions) -> NoteSummary {
        let metrics = self.metrics(options);
        NoteSummary {
            id: self.id.clone(),
            title: metrics.title,
            preview: metrics.preview,
            word_count: metrics.word_count,
            reading_time_minutes: metrics.reading_time_minutes,
            updated_at: self.updated_at,
        }
    }
}

/// What a note list shows for one note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteSummary {
    /// Note identifier
    pub id: String,

    /// Derived title
    pub title: String,

    /// Body excerpt
    pub preview: String,

    /// Word count of the plain text
    pub word_count: usize,

    /// Estimated reading time in minutes
    pub reading_time_minutes: u32,

    /// Last content change
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_new_formats_and_titles() {
        let note = Note::new_at("n1", "  # Plans  ", at(10));
        assert_eq!(note.title(), "Plans");
        assert_eq!(note.content(), "# Plans\n\n");
        assert_eq!(note.created_at, note.updated_at);
    }

    #[test]
    fn test_untitled() {
        let note = Note::untitled("n2");
        assert_eq!(note.title(), "New Note");
        assert_eq!(note.body(), "");
    }

    #[test]
    fn test_set_content_retitles() {
        let mut note = Note::new_at("n3", "# Old", at(10));
        note.set_content_at("intro\n## New title\nbody", at(20));

        assert_eq!(note.title(), "New title");
        assert_eq!(note.created_at, at(10));
        assert_eq!(note.updated_at, at(20));

        note.set_content_at("no heading", at(30));
        assert_eq!(note.title(), "Untitled Note");
    }

    #[test]
    fn test_summary() {
        let note = Note::new_at("n4", "# Trip\n\nPack *light*.", at(5));
        let summary = note.summary(&MetricsOptions::default());

        assert_eq!(summary.id, "n4");
        assert_eq!(summary.title, "Trip");
        assert_eq!(summary.preview, "Pack light.");
        assert_eq!(summary.word_count, 3);
        assert_eq!(summary.reading_time_minutes, 1);
        assert_eq!(summary.updated_at, at(5));
    }

    #[test]
    fn test_serde_round_trip() {
        let note = Note::new_at("n5", "# A\n\nb", at(0));
        let json = serde_json::to_string(&note).unwrap();
        assert!(json.contains("\"createdAt\""));
        let back: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(back, note);
    }
}
