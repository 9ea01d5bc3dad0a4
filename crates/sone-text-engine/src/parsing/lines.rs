//! Line normalization ahead of the per-line scan.

use std::borrow::Cow;

/// The token a surviving blank line is replaced with.
pub const BLANK_LINE: &str = "\n";

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Splits `source` into lines ready for scanning.
///
/// Leading and trailing blank lines are dropped and every run of blank
/// lines becomes a single [`BLANK_LINE`]. Every other line except the first
/// gets its separating `\n` back as a prefix, so concatenating the result
/// reproduces the normalized text.
pub fn normalize_lines(source: &str) -> Vec<Cow<'_, str>> {
    let mut lines: Vec<&str> = source.split('\n').skip_while(|line| is_blank(line)).collect();
    while lines.last().is_some_and(|line| is_blank(line)) {
        lines.pop();
    }

    let mut normalized: Vec<Cow<'_, str>> = Vec::with_capacity(lines.len());
    for line in lines {
        if normalized.is_empty() {
            normalized.push(Cow::Borrowed(line));
        } else if is_blank(line) {
            if normalized.last().is_none_or(|last| last != BLANK_LINE) {
                normalized.push(Cow::Borrowed(BLANK_LINE));
            }
        } else {
            normalized.push(Cow::Owned(format!("\n{line}")));
        }
    }
    normalized
}
