//! Batch summaries for note lists.

use crate::metrics::MetricsOptions;
use crate::model::{Note, NoteSummary};
use rayon::prelude::*;

/// Summarize many notes in parallel, keeping input order.
pub fn summarize_notes(notes: &[Note], options: &MetricsOptions) -> Vec<NoteSummary> {
    log::debug!("summarizing {} notes", notes.len());
    notes.par_iter().map(|note| note.summary(options)).collect()
}

/// Order summaries most recently updated first.
pub fn sort_by_recent(summaries: &mut [NoteSummary]) {
    summaries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
}
