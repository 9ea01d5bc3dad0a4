use std::sync::OnceLock;

use regex::Regex;

use crate::encoding;
use crate::parsing::Part;

use super::{LinkKind, NextLink};

/// `local@<base32 id>.freemail` addresses.
pub struct MailLink;

impl MailLink {
    pub const SUFFIX: &'static str = ".freemail";
    /// Length of the Base32 identity id between `@` and the suffix.
    pub const ID_LENGTH: usize = 52;
}

fn is_mail_id(s: &str) -> bool {
    static MAIL_ID_REGEX: OnceLock<Regex> = OnceLock::new();
    MAIL_ID_REGEX
        .get_or_init(|| Regex::new(r"^[a-z2-7]{52}$").expect("Invalid mail id regex"))
        .is_match(s)
}

fn is_local_part_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')
}

/// Finds the first address whose domain is a valid id and whose local
/// part is not empty.
///
/// Scanning works backwards from the suffix: the `@` must sit exactly
/// [`MailLink::ID_LENGTH`] characters before it, and the local part extends
/// left from the `@` as far as the allowed characters go.
pub fn find_next(line: &str) -> Option<NextLink<'_>> {
    let mut search_from = 0;
    while let Some(found) = line[search_from..].find(MailLink::SUFFIX) {
        let suffix = search_from + found;
        search_from = suffix + MailLink::SUFFIX.len();

        let Some(start) = local_part_start(line, suffix) else {
            continue;
        };
        let end = suffix + MailLink::SUFFIX.len();
        return Some(NextLink {
            position: start,
            kind: LinkKind::Mail,
            matched: &line[start..end],
            link: &line[start..end],
            remainder: &line[end..],
        });
    }
    None
}

fn local_part_start(line: &str, suffix: usize) -> Option<usize> {
    let at = suffix.checked_sub(MailLink::ID_LENGTH + 1)?;
    if line.as_bytes()[at] != b'@' || !is_mail_id(&line[at + 1..suffix]) {
        return None;
    }
    line[..at]
        .char_indices()
        .rev()
        .take_while(|(_, c)| is_local_part_char(*c))
        .last()
        .map(|(index, _)| index)
}

pub fn build(next: &NextLink<'_>) -> Part {
    let Some((local_part, domain)) = next.link.split_once('@') else {
        return Part::plain(next.matched);
    };
    let mail_domain_id = domain.strip_suffix(MailLink::SUFFIX).unwrap_or(domain);
    match encoding::decode_mail_id(mail_domain_id) {
        Ok(decoded_id) => Part::MailReference {
            local_part: local_part.to_string(),
            mail_domain_id: mail_domain_id.to_string(),
            decoded_id,
        },
        Err(err) => {
            log::debug!("Cannot decode mail id {mail_domain_id:?}: {err}");
            Part::plain(next.matched)
        }
    }
}
