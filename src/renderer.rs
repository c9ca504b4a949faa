use crate::inline_parser::rewrite;
use crate::syntax::BlockElement;

mod template;

pub use template::wrap_document;

/// Render a block sequence to an HTML fragment.
///
/// Output lines are joined with `\n` in element order. `<ul>`/`<ol>`
/// wrappers are derived from adjacency: a wrapper opens before a list item
/// whose predecessor is not a list item of the same kind, and closes after
/// one whose successor is not. Inline rewriting is applied to every text
/// field except code block content, which is emitted verbatim.
pub fn render(blocks: &[BlockElement]) -> String {
    let mut html: Vec<String> = Vec::new();

    for (pos, block) in blocks.iter().enumerate() {
        match block {
            BlockElement::Heading { level, text } => {
                html.push(format!("<h{level}>{}</h{level}>", rewrite(text)));
            }
            BlockElement::ListItem { ordered, text } => {
                if !neighbor_is_same_list(blocks, pos, -1, *ordered) {
                    html.push(list_open_tag(*ordered).to_string());
                }
                html.push(format!("<li>{}</li>", rewrite(text)));
                if !neighbor_is_same_list(blocks, pos, 1, *ordered) {
                    html.push(list_close_tag(*ordered).to_string());
                }
            }
            BlockElement::CodeBlock { language, lines } => {
                html.push(format!("<pre><code class=\"language-{language}\">"));
                html.extend(lines.iter().cloned());
                html.push("</code></pre>".to_string());
            }
            BlockElement::Blockquote { text } => {
                html.push(format!("<blockquote><p>{}</p></blockquote>", rewrite(text)));
            }
            BlockElement::HorizontalRule => html.push("<hr>".to_string()),
            BlockElement::Paragraph { text } => {
                html.push(format!("<p>{}</p>", rewrite(text)));
            }
            BlockElement::Blank => html.push("<br>".to_string()),
        }
    }

    html.join("\n")
}

fn list_open_tag(ordered: bool) -> &'static str {
    if ordered { "<ol>" } else { "<ul>" }
}

fn list_close_tag(ordered: bool) -> &'static str {
    if ordered { "</ol>" } else { "</ul>" }
}

/// True if the element `offset` positions away from `pos` is a list item
/// of the given kind.
fn neighbor_is_same_list(blocks: &[BlockElement], pos: usize, offset: isize, ordered: bool) -> bool {
    pos.checked_add_signed(offset)
        .and_then(|i| blocks.get(i))
        .is_some_and(|b| b.is_list_item(ordered))
}
