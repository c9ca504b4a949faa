//! Inline span rewriting.
//!
//! The rewriter turns the text content of a block element into an HTML
//! fragment by running a fixed sequence of substitution passes. The order
//! is load-bearing: bold runs before italic so `**x**` is not consumed as
//! two italic spans, and images run before links because the link pattern
//! matches the bracketed tail of an image.
//!
//! Each pass is a best-effort, non-greedy, non-overlapping substitution,
//! not a balanced parser. Odd delimiter counts are left as literal text,
//! and literal `*`, `_`, backtick and bracket characters in prose are
//! indistinguishable from span syntax; there is no escape mechanism.

mod code_spans;
mod emphasis;
mod links;

use code_spans::rewrite_code_spans;
use emphasis::{rewrite_bold, rewrite_italic};
use links::{rewrite_images, rewrite_links};

/// Rewrite every recognized inline span in `text` to its HTML form.
///
/// Pure and stateless; applied by the renderer to all block text except
/// code block content. Never fails: unmatched markers pass through
/// untouched.
pub fn rewrite(text: &str) -> String {
    let text = rewrite_bold(text);
    let text = rewrite_italic(&text);
    let text = rewrite_code_spans(&text);
    let text = rewrite_images(&text);
    rewrite_links(&text)
}
