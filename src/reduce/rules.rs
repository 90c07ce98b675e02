//! Ordered rule table for the plain-text reducer.
//!
//! Each rule pairs a pattern with a replacement policy. Rules run top to
//! bottom and each one sees the output of the previous rule, so the order
//! here is part of the contract: structurally larger constructs (HTML tags,
//! fenced code) go first, bold runs before italic, images before links.

use regex::Regex;

/// What to put in place of a rule match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replacement {
    /// Drop the whole match.
    Remove,
    /// Keep only the first capture group (the wrapped text).
    Inner,
}

impl Replacement {
    pub(crate) fn template(self) -> &'static str {
        match self {
            Replacement::Remove => "",
            Replacement::Inner => "$1",
        }
    }
}

/// A compiled find-and-replace step.
#[derive(Debug, Clone)]
pub struct Rule {
    name: &'static str,
    pattern: Regex,
    replacement: Replacement,
}

impl Rule {
    fn compile(name: &'static str, pattern: &str, replacement: Replacement) -> Self {
        Self {
            name,
            // Patterns are constants exercised by the test suite.
            pattern: Regex::new(pattern).expect("reducer rule pattern is valid"),
            replacement,
        }
    }

    /// Short identifier, used in diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The compiled pattern.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// The replacement policy.
    pub fn replacement(&self) -> Replacement {
        self.replacement
    }
}

/// Syntax rules in application order: (name, pattern, policy).
const RULE_TABLE: &[(&str, &str, Replacement)] = &[
    // Tag boundaries only; text between an opening and closing tag survives.
    ("html_tag", r"</?[A-Za-z!][^<>\n]*>", Replacement::Remove),
    ("fenced_code_backtick", r"(?s)```.*?```", Replacement::Remove),
    ("fenced_code_tilde", r"(?s)~~~.*?~~~", Replacement::Remove),
    (
        "horizontal_rule",
        r"(?m)^[ \t]*(?:-{3,}|\*{3,}|_{3,}|={3,})[ \t]*$",
        Replacement::Remove,
    ),
    ("heading", r"(?m)^#+[ \t]+", Replacement::Remove),
    ("bold_asterisk", r"\*\*(.+?)\*\*", Replacement::Inner),
    ("bold_underscore", r"__(.+?)__", Replacement::Inner),
    ("italic_asterisk", r"\*(.+?)\*", Replacement::Inner),
    ("italic_underscore", r"_(.+?)_", Replacement::Inner),
    ("strikethrough", r"~~(.+?)~~", Replacement::Inner),
    ("inline_code", r"`([^`\n]+)`", Replacement::Inner),
    ("image", r"!\[([^\]]*)\]\([^)]*\)", Replacement::Inner),
    ("link", r"\[([^\]]+)\]\([^)]*\)", Replacement::Inner),
    ("blockquote", r"(?m)^[ \t]*(?:>[ \t]*)+", Replacement::Remove),
    ("task_list", r"(?m)^[ \t]*-[ \t]+\[[ xX]\][ \t]*", Replacement::Remove),
    // No separator is inserted, so `a|b` collapses to `ab`.
    ("table_pipe", r"\|", Replacement::Remove),
];

/// Compile the full rule table in order.
pub fn default_rules() -> Vec<Rule> {
    RULE_TABLE
        .iter()
        .map(|&(name, pattern, replacement)| Rule::compile(name, pattern, replacement))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(rule_name: &str, text: &str) -> String {
        let rule = default_rules()
            .into_iter()
            .find(|r| r.name() == rule_name)
            .unwrap();
        rule.pattern()
            .replace_all(text, rule.replacement().template())
            .into_owned()
    }

    #[test]
    fn test_all_rules_compile_in_order() {
        let rules = default_rules();
        let names: Vec<&str> = rules.iter().map(|r| r.name()).collect();

        assert_eq!(names.len(), RULE_TABLE.len());
        assert_eq!(names.first(), Some(&"html_tag"));
        assert_eq!(names.last(), Some(&"table_pipe"));

        let bold = names.iter().position(|n| *n == "bold_asterisk").unwrap();
        let italic = names.iter().position(|n| *n == "italic_asterisk").unwrap();
        assert!(bold < italic);

        let image = names.iter().position(|n| *n == "image").unwrap();
        let link = names.iter().position(|n| *n == "link").unwrap();
        assert!(image < link);
    }

    #[test]
    fn test_html_tag_keeps_inner_text() {
        assert_eq!(apply("html_tag", "<b>bold</b> and<br/>more"), "bold andmore");
    }

    #[test]
    fn test_html_tag_needs_tag_name() {
        assert_eq!(apply("html_tag", "a < b and c > d"), "a < b and c > d");
        assert_eq!(apply("html_tag", "x <= 3"), "x <= 3");
        assert_eq!(apply("html_tag", "<!-- note -->kept"), "kept");
        assert_eq!(apply("html_tag", "<a\nhref>"), "<a\nhref>");
    }

    #[test]
    fn test_horizontal_rule_variants() {
        assert_eq!(apply("horizontal_rule", "a\n---\nb"), "a\n\nb");
        assert_eq!(apply("horizontal_rule", "a\n*****\nb"), "a\n\nb");
        assert_eq!(apply("horizontal_rule", "a\n___\nb"), "a\n\nb");
        assert_eq!(apply("horizontal_rule", "a\n===\nb"), "a\n\nb");
        // Mixed characters are not a rule.
        assert_eq!(apply("horizontal_rule", "-*-"), "-*-");
        // Too short.
        assert_eq!(apply("horizontal_rule", "--"), "--");
    }

    #[test]
    fn test_heading_requires_whitespace() {
        assert_eq!(apply("heading", "### Title"), "Title");
        assert_eq!(apply("heading", "#hashtag"), "#hashtag");
    }

    #[test]
    fn test_bold_is_non_greedy() {
        assert_eq!(apply("bold_asterisk", "**a** and **b**"), "a and b");
    }

    #[test]
    fn test_inline_code_keeps_content() {
        assert_eq!(apply("inline_code", "run `cargo doc` now"), "run cargo doc now");
    }

    #[test]
    fn test_image_with_empty_alt() {
        assert_eq!(apply("image", "![](img.png)"), "");
        assert_eq!(apply("image", "![a cat](cat.png)"), "a cat");
    }

    #[test]
    fn test_task_list_markers() {
        assert_eq!(apply("task_list", "- [ ] todo"), "todo");
        assert_eq!(apply("task_list", "- [x] done"), "done");
        assert_eq!(apply("task_list", "- [X] done"), "done");
        assert_eq!(apply("task_list", "- plain item"), "- plain item");
    }

    #[test]
    fn test_nested_blockquote_markers() {
        assert_eq!(apply("blockquote", "> > deep\n> shallow"), "deep\nshallow");
    }
}
