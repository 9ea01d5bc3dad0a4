//! Behavioral tests for the whole parsing pipeline.

mod invariants;

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{Identity, Part, Post, PostingContext, TextParser, parse};

const ROUTING: &str = "nwa8lHa271k2QvJ8aa0Ov7IHAV-DFOCFgmDt3X6BpCI";
const KEYS: &str = "nwa8lHa271k2QvJ8aa0Ov7IHAV-DFOCFgmDt3X6BpCI,DuQSUZiI~agF8c-6tjsFFGuZ8eICrzWCILB60nT8KKo,AQACAAE";
const MAIL_ID: &str = "t4dlzfdww3xvsnsc6j6gtliox6zaoak7ymkobbmcmdw527ubuqra";

#[rstest]
#[case::empty("")]
#[case::plain("Hello, world!")]
#[case::blank_lines("\n\nfoo\n\n\nbar\n\n")]
#[case::bare_triggers("KSK@ CHK@ http:// sone:// post://")]
#[case::web("see http://example.com/page now")]
#[case::network("a KSK@gpl.txt b CHK@inv@lid c")]
#[case::parens("see (http://example.com/a(b)c) now")]
#[case::mail("mail me@t4dlzfdww3xvsnsc6j6gtliox6zaoak7ymkobbmcmdw527ubuqra.freemail.")]
#[case::unicode("grüße http://bücher.de/straße\u{a0}ok")]
#[case::many_lines("a\nhttp://b.c\n\n\n\nKSK@d\n")]
fn results_keep_structural_invariants(#[case] source: &str) {
    invariants::check(&parse(source, None));
}

#[rstest]
#[case::empty("")]
#[case::single_line("nothing to see here")]
#[case::blank_lines("\n\nfoo\n\n\nbar\n\n")]
#[case::whitespace_lines("  \nfoo\n \t \nbar\n   ")]
#[case::bare_trigger("KSK@")]
#[case::unknown_schemes("ftp://example.com and gopher://x")]
#[case::short_identity("sone://tooshort")]
fn unrecognized_text_round_trips(#[case] source: &str) {
    let parts = parse(source, None);
    assert!(parts.len() <= 1, "{parts:?}");
    assert_eq!(invariants::joined_text(&parts), invariants::normalized(source));
}

#[test]
fn blank_line_normalization_is_idempotent() {
    assert_eq!(parse("\n\nfoo\n\n\nbar\n\n", None), parse("foo\n\nbar", None));
    assert_eq!(parse("foo\n\nbar", None), vec![Part::plain("foo\n\nbar")]);
}

#[test]
fn bare_trigger_stays_text() {
    assert_eq!(parse("KSK@", None), vec![Part::plain("KSK@")]);
}

#[test]
fn unbalanced_paren_ends_the_link() {
    assert_eq!(
        parse("see (http://example.com/a(b)c) now", None),
        vec![
            Part::plain("see ("),
            Part::external("http://example.com/a(b)c", "example.com/a(b)c"),
            Part::plain(") now"),
        ]
    );
}

#[test]
fn trailing_punctuation_is_text() {
    assert_eq!(
        parse("Look at http://example.com/!?", None),
        vec![
            Part::plain("Look at "),
            Part::external("http://example.com/", "example.com"),
            Part::plain("!?"),
        ]
    );
}

#[test]
fn own_key_is_trusted_only_with_matching_context() {
    let source = format!("SSK@{KEYS}/site-1/");
    let trusted = |context: Option<&PostingContext>| match parse(&source, context).as_slice() {
        [Part::NetworkLink { trusted, .. }] => *trusted,
        other => panic!("expected a single NetworkLink, got {other:?}"),
    };

    let owner = PostingContext::for_identity(ROUTING).unwrap();
    let stranger = PostingContext::new(vec![7u8; 32]);
    assert!(trusted(Some(&owner)));
    assert!(!trusted(Some(&stranger)));
    assert!(!trusted(Some(&PostingContext::default())));
    assert!(!trusted(None));
}

#[test]
fn invalid_key_is_text_and_scanning_continues() {
    assert_eq!(
        parse("CHK@inv@lid then http://x.y", None),
        vec![
            Part::plain("CHK@inv@lid then "),
            Part::external("http://x.y", "x.y"),
        ]
    );
}

#[test]
fn whitespace_variants_end_links() {
    let parts = parse("http://a.b/c\u{2003}and\u{feff}KSK@x\u{3000}z", None);
    assert_eq!(
        parts,
        vec![
            Part::external("http://a.b/c", "a.b/c"),
            Part::plain("\u{2003}and\u{feff}"),
            Part::NetworkLink {
                link: "KSK@x".into(),
                text: "x".into(),
                title: "KSK@x".into(),
                trusted: false,
            },
            Part::plain("\u{3000}z"),
        ]
    );
}

#[test]
fn every_kind_in_one_post() {
    let identities = |id: &str| (id == ROUTING).then(|| Identity::new(ROUTING, "Alice"));
    let posts = |id: &str| (id == "p-1").then(|| Post::new("p-1", "the original"));
    let parser = TextParser::new()
        .with_identities(&identities)
        .with_posts(&posts);
    let source = format!(
        "Hi sone://{ROUTING}!\nRe: post://p-1, see https://www.example.org/x/y/z.html?q=1\n\n\n\
         Files: CHK@{KEYS}/song.ogg and USK@{KEYS}/blog/12/\n\
         Mail: alice@{MAIL_ID}.freemail"
    );

    let parts = parser.parse(&source, None);
    invariants::check(&parts);
    assert_eq!(
        invariants::joined_text(&parts),
        "Hi Alice!\nRe: the original, see example.org/…/z.html\n\n\
         Files: song.ogg and blog\n\
         Mail: alice@t4dlzfdww3xvsnsc6j6gtliox6zaoak7ymkobbmcmdw527ubuqra.freemail"
    );
    assert_eq!(
        parts.iter().filter(|part| !part.is_plain_text()).count(),
        6
    );
}
