//! Word counts and reading time estimates.

use super::options::WORDS_PER_MINUTE;
use crate::reduce::strip_markdown;

/// Count whitespace-separated words in the plain text of `content`.
pub fn word_count(content: &str) -> usize {
    // split_whitespace yields nothing for empty or blank text.
    strip_markdown(content).split_whitespace().count()
}

/// Estimated minutes to read `word_count` words at 200 words per minute.
/// Never less than one minute.
pub fn reading_time(word_count: usize) -> u32 {
    reading_time_at(word_count, WORDS_PER_MINUTE)
}

/// Estimated minutes to read `word_count` words at `words_per_minute`,
/// rounded up, never less than one. A speed of zero uses the default.
pub fn reading_time_at(word_count: usize, words_per_minute: u32) -> u32 {
    let wpm = if words_per_minute == 0 {
        WORDS_PER_MINUTE
    } else {
        words_per_minute
    } as usize;

    let minutes = word_count.div_ceil(wpm).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}
