//! Content metrics derived from Markdown notes: title, preview, word count
//! and reading time.

mod count;
mod options;
mod preview;
mod result;
mod title;

pub use count::{reading_time, reading_time_at, word_count};
pub use options::{
    MetricsOptions, PreviewOptions, DEFAULT_PREVIEW_LENGTH, PREVIEW_ELLIPSIS, WORDS_PER_MINUTE,
};
pub use preview::content_preview;
pub use result::{to_json, ContentMetrics, JsonFormat};
pub use title::{extract_title, UNTITLED_NOTE};

pub(crate) use title::strip_first_h1;
