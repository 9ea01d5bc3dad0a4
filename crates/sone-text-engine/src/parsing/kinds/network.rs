use crate::keys::{KeyType, NetworkKey};
use crate::parsing::{Part, PostingContext};

use super::NextLink;

/// `KSK@`, `CHK@`, `SSK@` and `USK@` links.
pub struct NetworkKeyLink;

impl NetworkKeyLink {
    pub const KSK: &'static str = "KSK@";
    pub const CHK: &'static str = "CHK@";
    pub const SSK: &'static str = "SSK@";
    pub const USK: &'static str = "USK@";
    /// Everything from here on is cut from a link before it is parsed.
    pub const BACKLINK: &'static str = "/../";
    /// How much of the link is shown when a content key has no name.
    pub const FALLBACK_NAME_LENGTH: usize = 9;
}

/// Cuts the link at a `/../` that comes before any query string.
pub fn without_backlink(link: &str) -> &str {
    match (link.find(NetworkKeyLink::BACKLINK), link.find('?')) {
        (Some(backlink), None) => &link[..backlink],
        (Some(backlink), Some(query)) if backlink < query => &link[..backlink],
        _ => link,
    }
}

fn without_query(s: &str) -> &str {
    s.split('?').next().unwrap_or(s)
}

pub fn build(next: &NextLink<'_>, context: Option<&PostingContext>) -> Part {
    let link = without_backlink(next.link);
    match NetworkKey::parse(link) {
        Ok(key) => match key.key_type() {
            KeyType::Chk | KeyType::Ksk => content_link(link, &key),
            KeyType::Ssk | KeyType::Usk => subspace_link(link, &key, context),
        },
        Err(err) => {
            log::debug!("Not a valid key, keeping {:?} as text: {err}", next.matched);
            Part::plain(next.matched)
        }
    }
}

fn last_named_meta_string(key: &NetworkKey) -> Option<&str> {
    key.meta_strings()
        .iter()
        .rev()
        .find(|meta| !meta.is_empty())
        .map(String::as_str)
}

/// Content and keyword keys never point into anybody's subspace, so they
/// are never trusted.
fn content_link(link: &str, key: &NetworkKey) -> Part {
    let name = last_named_meta_string(key)
        .or(key.doc_name())
        .map(str::to_string)
        .unwrap_or_else(|| {
            link.chars()
                .take(NetworkKeyLink::FALLBACK_NAME_LENGTH)
                .collect()
        });
    Part::NetworkLink {
        link: link.to_string(),
        text: without_query(&name).to_string(),
        title: without_query(link).to_string(),
        trusted: false,
    }
}

fn subspace_link(link: &str, key: &NetworkKey, context: Option<&PostingContext>) -> Part {
    let name = last_named_meta_string(key)
        .or(key.doc_name())
        .map(str::to_string)
        .unwrap_or_else(|| key.short_form());
    let text = without_query(&name).to_string();
    let trusted = match (context, key.routing_key()) {
        (Some(context), Some(routing_key)) => context.owns(routing_key),
        _ => false,
    };
    Part::NetworkLink {
        link: link.strip_suffix('/').unwrap_or(link).to_string(),
        title: text.clone(),
        text,
        trusted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding;
    use crate::parsing::kinds::LinkKind;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const ROUTING: &str = "nwa8lHa271k2QvJ8aa0Ov7IHAV-DFOCFgmDt3X6BpCI";
    const KEYS: &str = "nwa8lHa271k2QvJ8aa0Ov7IHAV-DFOCFgmDt3X6BpCI,DuQSUZiI~agF8c-6tjsFFGuZ8eICrzWCILB60nT8KKo,AQACAAE";

    fn build_from(line: &str, context: Option<&PostingContext>) -> Part {
        let next = LinkKind::ALL
            .iter()
            .filter(|kind| kind.is_network_key())
            .find_map(|kind| kind.find_next(line))
            .unwrap();
        build(&next, context)
    }

    fn owner() -> PostingContext {
        PostingContext::for_identity(ROUTING).unwrap()
    }

    #[rstest]
    #[case::no_backlink("KSK@a/b", "KSK@a/b")]
    #[case::backlink("KSK@a/b/../c", "KSK@a/b")]
    #[case::backlink_before_query("KSK@a/../c?d", "KSK@a")]
    #[case::backlink_inside_query("KSK@a?b=/../c", "KSK@a?b=/../c")]
    fn strips_backlinks(#[case] link: &str, #[case] expected: &str) {
        assert_eq!(without_backlink(link), expected);
    }

    #[test]
    fn keyword_key_is_named_after_document() {
        assert_eq!(
            build_from("KSK@gpl.txt", None),
            Part::NetworkLink {
                link: "KSK@gpl.txt".into(),
                text: "gpl.txt".into(),
                title: "KSK@gpl.txt".into(),
                trusted: false,
            }
        );
    }

    #[test]
    fn content_key_is_named_after_last_file_name() {
        let link = format!("CHK@{KEYS}/dir/file.txt/");
        match build_from(&link, Some(&owner())) {
            Part::NetworkLink {
                text, trusted, link: built, ..
            } => {
                assert_eq!(text, "file.txt");
                assert!(!trusted);
                assert_eq!(built, link);
            }
            other => panic!("expected NetworkLink, got {other:?}"),
        }
    }

    #[test]
    fn unnamed_content_key_shows_link_start() {
        match build_from(&format!("CHK@{KEYS}"), None) {
            Part::NetworkLink { text, .. } => assert_eq!(text, "CHK@nwa8l"),
            other => panic!("expected NetworkLink, got {other:?}"),
        }
    }

    #[test]
    fn query_is_cut_from_text_and_title() {
        match build_from("KSK@site?type=text", None) {
            Part::NetworkLink {
                link, text, title, ..
            } => {
                assert_eq!(link, "KSK@site?type=text");
                assert_eq!(text, "site");
                assert_eq!(title, "KSK@site");
            }
            other => panic!("expected NetworkLink, got {other:?}"),
        }
    }

    #[test]
    fn own_subspace_key_is_trusted() {
        assert_eq!(
            build_from(&format!("SSK@{KEYS}/site-1/"), Some(&owner())),
            Part::NetworkLink {
                link: format!("SSK@{KEYS}/site-1"),
                text: "site-1".into(),
                title: "site-1".into(),
                trusted: true,
            }
        );
    }

    #[test]
    fn foreign_subspace_key_is_not_trusted() {
        let stranger = PostingContext::new(vec![0u8; 32]);
        match build_from(&format!("USK@{KEYS}/site/3/"), Some(&stranger)) {
            Part::NetworkLink { text, trusted, .. } => {
                assert_eq!(text, "site");
                assert!(!trusted);
            }
            other => panic!("expected NetworkLink, got {other:?}"),
        }
    }

    #[test]
    fn unnamed_subspace_key_shows_routing_key() {
        match build_from(&format!("SSK@{KEYS}"), None) {
            Part::NetworkLink { text, .. } => {
                assert_eq!(text, format!("SSK@{ROUTING}"));
                assert_eq!(
                    encoding::decode_base64(&text[4..]).unwrap(),
                    encoding::decode_base64(ROUTING).unwrap()
                );
            }
            other => panic!("expected NetworkLink, got {other:?}"),
        }
    }

    #[test]
    fn invalid_key_degrades_to_matched_text() {
        assert_eq!(
            build_from("freenet:CHK@inv@lid", None),
            Part::plain("freenet:CHK@inv@lid")
        );
    }
}
