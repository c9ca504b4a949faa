//! Fenced code block handling.

/// Try to parse a fence marker line (three backticks at line start),
/// returning the info string: the language tag, possibly empty.
///
/// Fence lines toggle the scanner's code state and are consumed, never
/// emitted as content.
pub(crate) fn try_parse_fence(line: &str) -> Option<&str> {
    line.strip_prefix("```").map(str::trim)
}
