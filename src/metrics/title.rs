//! Title extraction shared by note saving and metrics.

use regex::Regex;
use std::sync::OnceLock;

/// Title used when a note has no heading.
pub const UNTITLED_NOTE: &str = "Untitled Note";

fn heading_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^#+[ \t]+(.+)$").expect("heading pattern is valid"))
}

fn h1_line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^#[ \t]+[^\n]*\n?").expect("h1 pattern is valid"))
}

/// Extract a note title from the first heading line, at any level.
///
/// Lines are scanned top to bottom and the first heading with text wins.
/// Returns [`UNTITLED_NOTE`] when there is none.
///
/// ```
/// use notemark::metrics::extract_title;
///
/// assert_eq!(extract_title("intro\n## First\n# Second"), "First");
/// assert_eq!(extract_title("no heading here"), "Untitled Note");
/// ```
pub fn extract_title(content: &str) -> String {
    heading_regex()
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .find(|title| !title.is_empty())
        .unwrap_or(UNTITLED_NOTE)
        .to_string()
}

/// Remove the first level-one heading line and its line break, leaving the
/// rest of the content untouched.
pub(crate) fn strip_first_h1(content: &str) -> String {
    h1_line_regex().replacen(content, 1, "").into_owned()
}
