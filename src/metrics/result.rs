//! Derived metrics bundle for a single note.

use super::count::{reading_time_at, word_count};
use super::options::MetricsOptions;
use super::preview::content_preview;
use super::title::extract_title;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize any value in the requested format.
pub fn to_json<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value)?,
        JsonFormat::Compact => serde_json::to_string(value)?,
    };
    Ok(json)
}

/// Display values derived from a note's Markdown content.
///
/// Recomputed on demand; callers may cache it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentMetrics {
    /// Text of the first heading, or "Untitled Note"
    pub title: String,

    /// Single-line excerpt of the body
    pub preview: String,

    /// Whitespace-separated words in the plain text
    pub word_count: usize,

    /// Estimated reading time, at least one minute
    pub reading_time_minutes: u32,
}

impl ContentMetrics {
    /// Compute all metrics for `content`.
    pub fn compute(content: &str, options: &MetricsOptions) -> Self {
        let word_count = word_count(content);
        Self {
            title: extract_title(content),
            preview: content_preview(content, &options.preview),
            word_count,
            reading_time_minutes: reading_time_at(
                word_count,
                options.effective_words_per_minute(),
            ),
        }
    }

    /// Render these metrics as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        to_json(self, format)
    }
}
