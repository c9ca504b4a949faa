//! Bold and italic span rewriting.

use regex::Regex;
use std::sync::LazyLock;

static BOLD_ASTERISK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static BOLD_UNDERSCORE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__(.*?)__").unwrap());
static ITALIC_ASTERISK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static ITALIC_UNDERSCORE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_(.*?)_").unwrap());

/// Rewrite `**bold**` and `__bold__` spans to `<strong>`.
pub(super) fn rewrite_bold(text: &str) -> String {
    let text = BOLD_ASTERISK.replace_all(text, "<strong>$1</strong>");
    BOLD_UNDERSCORE
        .replace_all(&text, "<strong>$1</strong>")
        .into_owned()
}

/// Rewrite `*italic*` and `_italic_` spans to `<em>`.
///
/// Must run after the bold pass: the single-delimiter pattern would
/// otherwise consume `**x**` as two spans.
pub(super) fn rewrite_italic(text: &str) -> String {
    let text = ITALIC_ASTERISK.replace_all(text, "<em>$1</em>");
    ITALIC_UNDERSCORE.replace_all(&text, "<em>$1</em>").into_owned()
}
