use crate::syntax::BlockElement;

mod blockquotes;
mod code_blocks;
mod headings;
mod horizontal_rules;
mod lists;

use blockquotes::try_parse_blockquote;
use code_blocks::try_parse_fence;
use headings::try_parse_atx_heading;
use horizontal_rules::is_horizontal_rule;
use lists::{try_parse_bullet_item, try_parse_ordered_item};

/// Line-by-line scanner turning a document into an ordered block sequence.
///
/// A single forward pass with no backtracking. The only carried state is
/// the currently open fenced code block (if any) and its language tag;
/// list grouping is left to the renderer, which works from element
/// adjacency rather than a tracked list depth.
pub struct BlockParser<'a> {
    lines: Vec<&'a str>,
    pos: usize,
    blocks: Vec<BlockElement>,
    open_fence: Option<OpenFence>,
}

/// A fenced code block whose closing fence has not been seen yet.
struct OpenFence {
    language: String,
    lines: Vec<String>,
}

impl<'a> BlockParser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().collect(),
            pos: 0,
            blocks: Vec::new(),
            open_fence: None,
        }
    }

    /// Consume the scanner, classifying every line into a block element.
    ///
    /// Never fails: there is no invalid input. Malformed markup degrades to
    /// paragraphs or is absorbed by the nearest enclosing construct, and an
    /// unterminated fence swallows the rest of the document as code,
    /// closed implicitly at end of input.
    pub fn scan(mut self) -> Vec<BlockElement> {
        while self.pos < self.lines.len() {
            let line = self.lines[self.pos];
            log::debug!("scanning line {}: {:?}", self.pos + 1, line);
            self.scan_line(line);
            self.pos += 1;
        }

        if let Some(fence) = self.open_fence.take() {
            log::debug!("unterminated fence closed at end of document");
            self.blocks.push(BlockElement::CodeBlock {
                language: fence.language,
                lines: fence.lines,
            });
        }

        self.blocks
    }

    /// Classify one line, first match wins.
    ///
    /// Fence markers are checked before the in-code-block test so that a
    /// fence line inside an open block always closes it, whatever trails
    /// the backticks.
    fn scan_line(&mut self, line: &str) {
        if let Some(info) = try_parse_fence(line) {
            match self.open_fence.take() {
                Some(fence) => {
                    log::debug!("closing fence at line {}", self.pos + 1);
                    self.blocks.push(BlockElement::CodeBlock {
                        language: fence.language,
                        lines: fence.lines,
                    });
                }
                None => {
                    self.open_fence = Some(OpenFence {
                        language: info.to_string(),
                        lines: Vec::new(),
                    });
                }
            }
            return;
        }

        if let Some(fence) = self.open_fence.as_mut() {
            fence.lines.push(line.to_string());
            return;
        }

        if let Some((level, text)) = try_parse_atx_heading(line) {
            self.blocks.push(BlockElement::Heading {
                level,
                text: text.to_string(),
            });
            return;
        }

        if let Some(text) = try_parse_bullet_item(line) {
            self.blocks.push(BlockElement::ListItem {
                ordered: false,
                text: text.to_string(),
            });
            return;
        }

        if let Some(text) = try_parse_ordered_item(line) {
            self.blocks.push(BlockElement::ListItem {
                ordered: true,
                text: text.to_string(),
            });
            return;
        }

        if let Some(text) = try_parse_blockquote(line) {
            self.blocks.push(BlockElement::Blockquote {
                text: text.to_string(),
            });
            return;
        }

        if is_horizontal_rule(line) {
            self.blocks.push(BlockElement::HorizontalRule);
            return;
        }

        if line.trim().is_empty() {
            self.blocks.push(BlockElement::Blank);
        } else {
            self.blocks.push(BlockElement::Paragraph {
                text: line.to_string(),
            });
        }
    }
}
