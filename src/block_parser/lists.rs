//! List item classification.

use regex::Regex;
use std::sync::LazyLock;

static ORDERED_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s").unwrap());

/// Try to parse an unordered list item, returning the item text.
///
/// The trimmed line must start with a two-character marker: `- `, `* `,
/// or `+ `.
pub(crate) fn try_parse_bullet_item(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    ["- ", "* ", "+ "]
        .iter()
        .find_map(|&marker| trimmed.strip_prefix(marker))
}

/// Try to parse an ordered list item (`<digits>. <text>` on the trimmed
/// line), returning the text after the numeral, period, and space.
pub(crate) fn try_parse_ordered_item(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    let marker = ORDERED_MARKER.find(trimmed)?;
    Some(&trimmed[marker.end()..])
}
