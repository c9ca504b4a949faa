//! Standalone-document wrapping.

use similar_asserts::assert_eq;
use vignette::{ConfigBuilder, to_document, to_html};

#[test]
fn default_title_is_markdown_preview() {
    let doc = to_document("# Hi", None);
    assert!(doc.contains("<title>Markdown Preview</title>"));
}

#[test]
fn configured_title_is_used() {
    let config = ConfigBuilder::default().title("Release Notes").build();
    let doc = to_document("# Hi", Some(config));
    assert!(doc.contains("<title>Release Notes</title>"));
}

#[test]
fn wrapped_document_embeds_the_fragment() {
    let fragment = to_html("# Hi\n\ntext");
    let doc = to_document("# Hi\n\ntext", None);
    assert!(doc.starts_with("<!DOCTYPE html>"));
    assert!(doc.ends_with("</html>"));
    assert!(doc.contains(&fragment));
}

#[test]
fn wrapping_is_deterministic() {
    let doc = "- a\n- b\n\n`code`";
    assert_eq!(to_document(doc, None), to_document(doc, None));
}
