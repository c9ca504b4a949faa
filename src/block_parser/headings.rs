//! ATX heading classification.

/// Try to parse an ATX heading, returning (level, trimmed text) if the line
/// starts with 1-6 `#` characters.
///
/// No space is required after the hash run. A run of seven or more `#` is
/// not reduced to a level-6 heading; the line falls through to paragraph
/// classification.
pub(crate) fn try_parse_atx_heading(line: &str) -> Option<(usize, &str)> {
    if !line.starts_with('#') {
        return None;
    }

    let level = line.chars().take_while(|&c| c == '#').count();
    if level > 6 {
        return None;
    }

    Some((level, line[level..].trim()))
}
