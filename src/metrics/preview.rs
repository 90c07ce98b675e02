//! Content previews for note lists.

use super::options::{PreviewOptions, PREVIEW_ELLIPSIS};
use super::title::strip_first_h1;
use crate::reduce::{collapse_whitespace, strip_markdown};

/// Build a single-line, syntax-free preview of a note body.
///
/// The title heading is dropped first so the preview does not repeat it.
/// Text longer than `options.max_length` characters is cut at exactly that
/// many characters and suffixed with `...`; there is no word-boundary
/// back-off.
pub fn content_preview(content: &str, options: &PreviewOptions) -> String {
    let body = strip_first_h1(content);
    let plain = collapse_whitespace(&strip_markdown(&body));

    match plain.char_indices().nth(options.max_length) {
        Some((cut, _)) => {
            let mut preview = String::with_capacity(cut + PREVIEW_ELLIPSIS.len());
            preview.push_str(&plain[..cut]);
            preview.push_str(PREVIEW_ELLIPSIS);
            preview
        }
        None => plain,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_body_has_no_suffix() {
        let preview = content_preview("# Title\n\nShort content", &PreviewOptions::default());
        assert_eq!(preview, "Short content");
    }

    #[test]
    fn test_truncation_is_exact() {
        let content = format!("# Title\n\n{}", "a".repeat(150));
        let preview = content_preview(&content, &PreviewOptions::default());
        assert_eq!(preview.chars().count(), 123);
        assert!(preview.ends_with("..."));
        assert_eq!(&preview[..120], "a".repeat(120));
    }

    #[test]
    fn test_boundary_length_is_not_truncated() {
        let content = "b".repeat(120);
        let preview = content_preview(&content, &PreviewOptions::default());
        assert_eq!(preview, content);
    }

    #[test]
    fn test_truncation_counts_chars_not_bytes() {
        let content = "é".repeat(10);
        let preview = content_preview(&content, &PreviewOptions::new().with_max_length(4));
        assert_eq!(preview, "éééé...");
    }

    #[test]
    fn test_newlines_become_spaces() {
        let preview = content_preview(
            "# Title\n\nFirst line\n\n- [ ] task\n> quote",
            &PreviewOptions::default(),
        );
        assert_eq!(preview, "First line task quote");
    }

    #[test]
    fn test_zero_max_length() {
        let preview = content_preview("abc", &PreviewOptions::new().with_max_length(0));
        assert_eq!(preview, "...");
        assert_eq!(content_preview("", &PreviewOptions::new().with_max_length(0)), "");
    }
}
