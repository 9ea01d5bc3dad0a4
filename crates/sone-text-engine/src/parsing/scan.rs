//! Helpers that decide where a link candidate ends.

/// Characters that never trail a link; stripped from its end one at a time.
pub const TRAILING_PUNCTUATION: [char; 4] = ['.', ',', '?', '!'];

/// Whitespace that terminates a link.
///
/// Wider than ASCII whitespace: includes the Unicode spaces, zero-width and
/// bidi/format characters that show up when text is pasted from elsewhere.
/// Carriage return does not end a link.
pub fn is_link_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | ' '
            | '\u{00a0}'
            | '\u{1680}'
            | '\u{180e}'
            | '\u{2000}'..='\u{200f}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{2060}'..='\u{206f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// Returns the byte length of the link starting at the beginning of
/// `candidate`.
///
/// The link runs up to the first whitespace, loses any trailing
/// punctuation, and is then cut at the first `)` that closes a parenthesis
/// opened before the link.
pub fn end_of_link(candidate: &str) -> usize {
    let until_whitespace = candidate
        .find(is_link_whitespace)
        .map_or(candidate, |end| &candidate[..end]);
    let trimmed = until_whitespace.trim_end_matches(TRAILING_PUNCTUATION);
    first_unmatched_paren(trimmed).unwrap_or(trimmed.len())
}

fn first_unmatched_paren(s: &str) -> Option<usize> {
    let mut open = 0usize;
    for (index, c) in s.char_indices() {
        match c {
            '(' => open += 1,
            ')' if open == 0 => return Some(index),
            ')' => open -= 1,
            _ => {}
        }
    }
    None
}
