//! A lightweight Markdown-to-HTML preview engine.
//!
//! Two-phase pipeline: a line-oriented block scanner classifies every
//! source line into a block element, then an inline rewriter turns
//! emphasis, code spans, links and images inside each block's text into
//! HTML. The renderer composes the result, optionally wrapping it in a
//! fixed styled document template.
//!
//! Only a small construct set is handled: ATX headings, flat ordered and
//! unordered lists, blockquotes, fenced code blocks, horizontal rules and
//! paragraphs, with bold/italic/code/link/image inline forms. Nested
//! lists and link-reference definitions are out of scope, and no markup
//! specification is targeted; malformed input degrades to literal text
//! rather than erroring.

pub mod block_parser;
pub mod config;
pub mod inline_parser;
pub mod renderer;
pub mod syntax;

pub use config::{Config, ConfigBuilder};
pub use inline_parser::rewrite;
pub use renderer::{render, wrap_document};
pub use syntax::BlockElement;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Scans a Markdown document into its ordered block element sequence.
///
/// Line endings are normalized first, so CRLF input scans identically to
/// LF input. Scanning never fails: every line is classified into some
/// element.
///
/// # Examples
///
/// ```rust
/// use vignette::{BlockElement, scan};
///
/// let blocks = scan("# Title\n\ntext");
/// assert_eq!(blocks.len(), 3);
/// assert!(matches!(blocks[0], BlockElement::Heading { level: 1, .. }));
/// ```
pub fn scan(input: &str) -> Vec<BlockElement> {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    let normalized = input.replace("\r\n", "\n");
    block_parser::BlockParser::new(&normalized).scan()
}

/// Converts a Markdown document to an HTML fragment.
///
/// A pure, deterministic function of its input: repeated calls yield
/// byte-identical output, and no I/O happens inside the pipeline.
///
/// # Examples
///
/// ```rust
/// use vignette::to_html;
///
/// assert_eq!(to_html("# Hi"), "<h1>Hi</h1>");
/// ```
pub fn to_html(input: &str) -> String {
    renderer::render(&scan(input))
}

/// Converts a Markdown document to a complete standalone HTML document,
/// embedding the fragment in the fixed style template.
///
/// # Arguments
///
/// * `input` - the Markdown document content
/// * `config` - optional configuration (defaults to the default config)
pub fn to_document(input: &str, config: Option<Config>) -> String {
    let config = config.unwrap_or_default();
    renderer::wrap_document(&to_html(input), config.title())
}
