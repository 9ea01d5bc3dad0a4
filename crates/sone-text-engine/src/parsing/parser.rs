use super::{
    context::{IdentityProvider, PostProvider, PostingContext},
    kinds::{self, LinkKind, NextLink, find_next_link},
    lines::normalize_lines,
    merge::{merge_adjacent_plain_text, remove_empty_plain_text},
    types::Part,
};

/// Splits post text into [`Part`]s.
///
/// The parser itself is stateless; references to identities and posts are
/// resolved through the optional providers. Without providers, identity
/// mentions become id-only placeholders and post references stay text.
#[derive(Clone, Copy, Default)]
pub struct TextParser<'a> {
    identities: Option<&'a dyn IdentityProvider>,
    posts: Option<&'a dyn PostProvider>,
}

impl<'a> TextParser<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identities(mut self, identities: &'a dyn IdentityProvider) -> Self {
        self.identities = Some(identities);
        self
    }

    pub fn with_posts(mut self, posts: &'a dyn PostProvider) -> Self {
        self.posts = Some(posts);
        self
    }

    /// Parses `source` on behalf of the poster described by `context`.
    ///
    /// Never fails: anything that isn't a valid link ends up as plain text.
    /// The result never holds empty or adjacent plain text parts.
    pub fn parse(&self, source: &str, context: Option<&PostingContext>) -> Vec<Part> {
        let parts = normalize_lines(source)
            .iter()
            .flat_map(|line| self.split_line_into_parts(line, context))
            .collect();
        merge_adjacent_plain_text(remove_empty_plain_text(parts))
    }

    fn split_line_into_parts(&self, line: &str, context: Option<&PostingContext>) -> Vec<Part> {
        let mut parts = Vec::new();
        let mut remainder = line;
        while !remainder.is_empty() {
            let Some(next) = find_next_link(remainder) else {
                parts.push(Part::plain(remainder));
                break;
            };
            log::trace!(
                "{:?} link {:?} at offset {}",
                next.kind,
                next.matched,
                next.position
            );
            parts.push(Part::plain(&remainder[..next.position]));
            parts.push(self.build_part(&next, context));
            remainder = next.remainder;
        }
        parts
    }

    fn build_part(&self, next: &NextLink<'_>, context: Option<&PostingContext>) -> Part {
        match next.kind {
            LinkKind::Ksk | LinkKind::Chk | LinkKind::Ssk | LinkKind::Usk => {
                kinds::network::build(next, context)
            }
            LinkKind::Http | LinkKind::Https => kinds::web::build(next.link),
            LinkKind::Identity => kinds::identity::build(next.link, self.identities),
            LinkKind::Post => kinds::post::build(next.link, self.posts),
            LinkKind::Mail => kinds::mail::build(next),
        }
    }
}

/// Parses `source` without identity or post lookups.
pub fn parse(source: &str, context: Option<&PostingContext>) -> Vec<Part> {
    TextParser::new().parse(source, context)
}
