//! Clean-up passes over the parts of all lines.

use super::types::Part;

pub fn remove_empty_plain_text(parts: Vec<Part>) -> Vec<Part> {
    parts
        .into_iter()
        .filter(|part| !matches!(part, Part::PlainText { text } if text.is_empty()))
        .collect()
}

pub fn merge_adjacent_plain_text(parts: Vec<Part>) -> Vec<Part> {
    let mut merged: Vec<Part> = Vec::with_capacity(parts.len());
    for part in parts {
        if let (Some(Part::PlainText { text: previous }), Part::PlainText { text }) =
            (merged.last_mut(), &part)
        {
            previous.push_str(text);
            continue;
        }
        merged.push(part);
    }
    merged
}
