//! Markdown to plain text reduction.
//!
//! The reducer strips recognized Markdown syntax while keeping the text it
//! wraps. It never fails: unbalanced or unknown markup is left in place.
//!
//! # Example
//!
//! ```
//! use notemark::reduce::strip_markdown;
//!
//! let text = strip_markdown("# Hello\n\nSome **bold** and a [link](https://example.com).");
//! assert_eq!(text, "Hello\nSome bold and a link.");
//! ```

mod rules;

pub use rules::{default_rules, Replacement, Rule};

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Ordered find-and-replace pipeline from Markdown to plain text.
#[derive(Debug, Clone)]
pub struct PlainTextReducer {
    rules: Vec<Rule>,
    line_edges: Regex,
    blank_lines: Regex,
    horizontal_space: Regex,
}

impl PlainTextReducer {
    /// Create a reducer with the full rule table.
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
            line_edges: Regex::new(r"[ \t]*\n[ \t]*").expect("line edge pattern is valid"),
            blank_lines: Regex::new(r"\n{2,}").expect("blank line pattern is valid"),
            horizontal_space: Regex::new(r"[ \t]+").expect("space pattern is valid"),
        }
    }

    /// The rules this reducer applies, in order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Reduce Markdown to plain text.
    pub fn process(&self, markdown: &str) -> String {
        if markdown.is_empty() {
            return String::new();
        }

        let mut text = markdown.replace("\r\n", "\n");

        for rule in &self.rules {
            if let Cow::Owned(rewritten) = rule
                .pattern()
                .replace_all(&text, rule.replacement().template())
            {
                log::trace!("reducer rule '{}' rewrote input", rule.name());
                text = rewritten;
            }
        }

        self.normalize_whitespace(&text)
    }

    /// Collapse paragraph breaks to one newline and runs of spaces/tabs to
    /// one space, then trim.
    ///
    /// Spaces around line breaks are dropped first, so a line emptied by an
    /// earlier rule still counts as a paragraph break.
    pub fn normalize_whitespace(&self, text: &str) -> String {
        let text = self.line_edges.replace_all(text, "\n");
        let text = self.blank_lines.replace_all(&text, "\n");
        let text = self.horizontal_space.replace_all(&text, " ");
        text.trim().to_string()
    }
}

impl Default for PlainTextReducer {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide reducer, compiled on first use.
pub fn default_reducer() -> &'static PlainTextReducer {
    static REDUCER: OnceLock<PlainTextReducer> = OnceLock::new();
    REDUCER.get_or_init(PlainTextReducer::new)
}

/// Strip Markdown syntax from `markdown`, returning readable plain text.
pub fn strip_markdown(markdown: &str) -> String {
    default_reducer().process(markdown)
}

/// Collapse every whitespace run (newlines included) to a single space and
/// trim. Used for single-line displays such as previews.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
