//! Plain-text sanitization for release notes.
//!
//! GitHub release bodies are markdown-flavored and occasionally contain raw
//! HTML. Installer clients render the `versionDescription` field as plain
//! text, so the markup has to be stripped before it is embedded.

use once_cell::sync::Lazy;
use regex::Regex;

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^<]+?>").unwrap());
static MD_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"#{1,6}\s?").unwrap());
static MD_BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*{2}").unwrap());

/// Strips markup from free-form release notes.
///
/// Applied in order: HTML/XML tags (shortest match, non-nested), markdown
/// header markers (`#` runs of 1-6 plus at most one trailing whitespace
/// character), bold markers (`**`), and backticks (each replaced with a
/// double quote). No whitespace collapsing or JSON escaping is performed.
pub fn sanitize_notes(text: &str) -> String {
    let text = HTML_TAG.replace_all(text, "");
    let text = MD_HEADER.replace_all(&text, "");
    let text = MD_BOLD.replace_all(&text, "");
    text.replace('`', "\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_html_tags() {
        assert_eq!(sanitize_notes("<b>text</b>"), "text");
        assert_eq!(sanitize_notes("a <br/> b"), "a  b");
    }

    #[test]
    fn test_strips_markdown_headers() {
        assert_eq!(sanitize_notes("## Changes"), "Changes");
        assert_eq!(sanitize_notes("###### deep"), "deep");
        // Header markers are removed wherever they occur, not only at line start.
        assert_eq!(sanitize_notes("a # b"), "a b");
    }

    #[test]
    fn test_strips_bold_markers() {
        assert_eq!(sanitize_notes("**bold** text"), "bold text");
    }

    #[test]
    fn test_replaces_backticks_with_quotes() {
        assert_eq!(sanitize_notes("`code`"), "\"code\"");
    }

    #[test]
    fn test_combined_example() {
        // Header marker plus its trailing space removed, bold markers
        // removed, backticks turned into quotes.
        assert_eq!(sanitize_notes("## **Fix** `bug`"), "Fix \"bug\"");
    }

    #[test]
    fn test_multiline_notes() {
        assert_eq!(
            sanitize_notes("### Notes\n**Fixed** bugs"),
            "Notes\nFixed bugs"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize_notes(""), "");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(sanitize_notes("just plain text"), "just plain text");
    }

    #[test]
    fn test_single_asterisks_kept() {
        // Only exact pairs of asterisks are markers; italics pass through.
        assert_eq!(sanitize_notes("*italic*"), "*italic*");
    }
}
