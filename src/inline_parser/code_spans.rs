//! Inline code span rewriting.

use regex::Regex;
use std::sync::LazyLock;

static CODE_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`(.*?)`").unwrap());

/// Rewrite `` `code` `` spans to `<code>`.
///
/// Content is substituted as-is; the bold/italic passes have already run
/// by the time this one sees the text, so emphasis markers inside a code
/// span are not protected.
pub(super) fn rewrite_code_spans(text: &str) -> String {
    CODE_SPAN.replace_all(text, "<code>$1</code>").into_owned()
}
