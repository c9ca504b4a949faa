//! Block-level rendering behavior, end to end.

use similar_asserts::assert_eq;
use vignette::{scan, to_html};

#[test]
fn empty_document_renders_empty() {
    assert!(scan("").is_empty());
    assert_eq!(to_html(""), "");
}

#[test]
fn repeated_conversion_is_byte_identical() {
    let doc = "# Title\n\n- a\n- b\n\n> quote\n\n```rust\nfn main() {}\n```\n\n---\ndone";
    assert_eq!(to_html(doc), to_html(doc));
}

#[test]
fn six_hashes_is_a_heading_seven_is_not() {
    assert_eq!(to_html("###### six"), "<h6>six</h6>");
    assert_eq!(to_html("####### seven"), "<p>####### seven</p>");
}

#[test]
fn blank_line_closes_a_list() {
    assert_eq!(
        to_html("- a\n- b\n\ntext"),
        "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n<br>\n<p>text</p>"
    );
}

#[test]
fn interior_paragraph_closes_a_list() {
    assert_eq!(
        to_html("- a\nplain\n- b"),
        "<ul>\n<li>a</li>\n</ul>\n<p>plain</p>\n<ul>\n<li>b</li>\n</ul>"
    );
}

#[test]
fn ordered_items_group_into_one_ol() {
    assert_eq!(
        to_html("1. one\n2. two"),
        "<ol>\n<li>one</li>\n<li>two</li>\n</ol>"
    );
}

#[test]
fn adjacent_lists_of_different_kind_get_separate_wrappers() {
    assert_eq!(
        to_html("- a\n1. b"),
        "<ul>\n<li>a</li>\n</ul>\n<ol>\n<li>b</li>\n</ol>"
    );
}

#[test]
fn fenced_content_is_verbatim_with_language_class() {
    assert_eq!(
        to_html("```rust\nlet a = b * c;\n`raw` and _under_\n```"),
        "<pre><code class=\"language-rust\">\nlet a = b * c;\n`raw` and _under_\n</code></pre>"
    );
}

#[test]
fn unterminated_fence_absorbs_rest_of_document() {
    let blocks = scan("```python\nprint(1)\n# still code");
    assert_eq!(blocks.len(), 1);
    assert_eq!(
        to_html("```python\nprint(1)\n# still code"),
        "<pre><code class=\"language-python\">\nprint(1)\n# still code\n</code></pre>"
    );
}

#[test]
fn fence_without_language_gets_empty_class_suffix() {
    assert_eq!(
        to_html("```\nx\n```"),
        "<pre><code class=\"language-\">\nx\n</code></pre>"
    );
}

#[test]
fn blockquote_renders_wrapped_paragraph() {
    assert_eq!(to_html("> note"), "<blockquote><p>note</p></blockquote>");
}

#[test]
fn all_three_rule_forms_render_hr() {
    for rule in ["---", "***", "___"] {
        assert_eq!(to_html(rule), "<hr>");
    }
}

#[test]
fn crlf_input_scans_like_lf() {
    assert_eq!(to_html("# a\r\n\r\nb"), to_html("# a\n\nb"));
    assert_eq!(to_html("# a\r\n\r\nb"), "<h1>a</h1>\n<br>\n<p>b</p>");
}
