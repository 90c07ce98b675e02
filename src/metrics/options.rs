//! Metric options and fixed constants.

/// Default preview length in characters.
pub const DEFAULT_PREVIEW_LENGTH: usize = 120;

/// Reading speed used for reading time estimates.
pub const WORDS_PER_MINUTE: u32 = 200;

/// Suffix appended to truncated previews.
pub const PREVIEW_ELLIPSIS: &str = "...";

/// Options for preview extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewOptions {
    /// Maximum preview length in characters before the ellipsis is added.
    pub max_length: usize,
}

impl PreviewOptions {
    /// Create preview options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum preview length.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_PREVIEW_LENGTH,
        }
    }
}

/// Options for computing a full metrics bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsOptions {
    /// Preview settings
    pub preview: PreviewOptions,

    /// Reading speed; zero falls back to [`WORDS_PER_MINUTE`]
    pub words_per_minute: u32,
}

impl MetricsOptions {
    /// Create metrics options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum preview length.
    pub fn with_preview_max_length(mut self, max_length: usize) -> Self {
        self.preview.max_length = max_length;
        self
    }

    /// Set the reading speed.
    pub fn with_words_per_minute(mut self, wpm: u32) -> Self {
        self.words_per_minute = wpm;
        self
    }

    /// Reading speed actually used for estimates.
    pub fn effective_words_per_minute(&self) -> u32 {
        if self.words_per_minute == 0 {
            WORDS_PER_MINUTE
        } else {
            self.words_per_minute
        }
    }
}

impl Default for MetricsOptions {
    fn default() -> Self {
        Self {
            preview: PreviewOptions::default(),
            words_per_minute: WORDS_PER_MINUTE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = MetricsOptions::default();
        assert_eq!(options.preview.max_length, 120);
        assert_eq!(options.words_per_minute, 200);
    }

    #[test]
    fn test_builder() {
        let options = MetricsOptions::new()
            .with_preview_max_length(40)
            .with_words_per_minute(250);
        assert_eq!(options.preview.max_length, 40);
        assert_eq!(options.effective_words_per_minute(), 250);
    }

    #[test]
    fn test_zero_wpm_falls_back() {
        let options = MetricsOptions::new().with_words_per_minute(0);
        assert_eq!(options.effective_words_per_minute(), WORDS_PER_MINUTE);
    }
}
