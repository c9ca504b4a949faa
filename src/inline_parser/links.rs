//! Image and link rewriting.

use regex::Regex;
use std::sync::LazyLock;

static IMAGE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());
static LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Rewrite `![alt](url)` to `<img>`. The alt text may be empty.
///
/// Must run before the link pass: the link pattern matches the bracketed
/// tail of an image, and running it first would leave a stray `!` in
/// front of an anchor.
pub(super) fn rewrite_images(text: &str) -> String {
    IMAGE
        .replace_all(text, r#"<img src="$2" alt="$1">"#)
        .into_owned()
}

/// Rewrite `[label](url)` to `<a>`. The label must be non-empty.
pub(super) fn rewrite_links(text: &str) -> String {
    LINK.replace_all(text, r#"<a href="$2">$1</a>"#)
        .into_owned()
}
