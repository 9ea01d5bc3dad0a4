use crate::parsing::{Part, lines::normalize_lines};

/// Checks the structural guarantees every parse result must meet.
pub fn check(parts: &[Part]) {
    for part in parts {
        if let Part::PlainText { text } = part {
            assert!(!text.is_empty(), "empty plain text in {parts:?}");
        }
    }
    for pair in parts.windows(2) {
        assert!(
            !(pair[0].is_plain_text() && pair[1].is_plain_text()),
            "adjacent plain text in {parts:?}"
        );
    }
}

/// Concatenated display text of all parts.
pub fn joined_text(parts: &[Part]) -> String {
    parts.iter().map(|part| part.text()).collect()
}

pub fn normalized(source: &str) -> String {
    normalize_lines(source).concat()
}
