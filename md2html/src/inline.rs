//! Inline span rewriting
//!
//! Bold (`**text**` → `<b>text</b>`) and italic (`__text__` → `<em>text</em>`)
//! are plain non-greedy substitutions applied to every match on a line. Every
//! block branch goes through [`rewrite_inline`], so headings, list items and
//! paragraph lines render spans identically.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid regex for bold spans"));

static ITALIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"__(.+?)__").expect("valid regex for italic spans"));

/// Rewrite every `**text**` span into `<b>text</b>`.
pub fn rewrite_bold(text: &str) -> Cow<'_, str> {
    BOLD.replace_all(text, "<b>${1}</b>")
}

/// Rewrite every `__text__` span into `<em>text</em>`.
pub fn rewrite_italic(text: &str) -> Cow<'_, str> {
    ITALIC.replace_all(text, "<em>${1}</em>")
}

/// Apply bold then italic rewriting.
pub fn rewrite_inline(text: &str) -> String {
    let bold = rewrite_bold(text);
    rewrite_italic(&bold).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_and_italic_together() {
        assert_eq!(
            rewrite_inline("**bold** and __em__"),
            "<b>bold</b> and <em>em</em>"
        );
    }

    #[test]
    fn test_bold_is_global_and_non_greedy() {
        assert_eq!(rewrite_bold("**a** x **b**"), "<b>a</b> x <b>b</b>");
    }

    #[test]
    fn test_unbalanced_markers_are_left_alone() {
        assert_eq!(rewrite_inline("**open"), "**open");
        assert_eq!(rewrite_inline("____"), "____");
    }

    #[test]
    fn test_bold_nested_in_italic() {
        assert_eq!(rewrite_inline("__**x**__"), "<em><b>x</b></em>");
    }

    #[test]
    fn test_rewrite_is_idempotent_once_markers_are_gone() {
        let once = rewrite_inline("**a** __b__");
        assert_eq!(rewrite_inline(&once), once);
    }

    #[test]
    fn test_plain_text_is_borrowed() {
        assert!(matches!(rewrite_bold("plain"), Cow::Borrowed("plain")));
    }
}
