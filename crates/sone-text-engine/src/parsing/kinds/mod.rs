//! # Link Kinds
//!
//! One module per recognizable link grammar. Each owns its trigger
//! constants and the rule that turns a match into a [`Part`](super::Part);
//! this module owns the shared "find next occurrence" rule and the fixed
//! order used to break ties between grammars.
//!
//! ## Kinds
//!
//! - **`network`**: `KSK@`, `CHK@`, `SSK@`, `USK@`, optionally behind `freenet:`
//! - **`web`**: `http://`, `https://`
//! - **`identity`**: `sone://<43 character id>`
//! - **`post`**: `post://<post id>`
//! - **`mail`**: `local@<52 character base32 id>.freemail`
//!
//! ## Tie-break
//!
//! When two grammars match at the same offset the one listed first in
//! [`LinkKind::ALL`] wins. The order carries no meaning beyond being fixed.

pub mod identity;
pub mod mail;
pub mod network;
pub mod post;
pub mod web;

pub use identity::IdentityLink;
pub use mail::MailLink;
pub use network::NetworkKeyLink;
pub use post::PostLink;
pub use web::WebLink;

use crate::keys::NETWORK_PREFIX;

use super::scan::end_of_link;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    Ksk,
    Chk,
    Ssk,
    Usk,
    Http,
    Https,
    Identity,
    Post,
    Mail,
}

impl LinkKind {
    /// All kinds in tie-break order.
    pub const ALL: [LinkKind; 9] = [
        LinkKind::Ksk,
        LinkKind::Chk,
        LinkKind::Ssk,
        LinkKind::Usk,
        LinkKind::Http,
        LinkKind::Https,
        LinkKind::Identity,
        LinkKind::Post,
        LinkKind::Mail,
    ];

    /// The literal that starts a link of this kind. Mail addresses have none.
    pub fn scheme(self) -> &'static str {
        match self {
            LinkKind::Ksk => NetworkKeyLink::KSK,
            LinkKind::Chk => NetworkKeyLink::CHK,
            LinkKind::Ssk => NetworkKeyLink::SSK,
            LinkKind::Usk => NetworkKeyLink::USK,
            LinkKind::Http => WebLink::HTTP,
            LinkKind::Https => WebLink::HTTPS,
            LinkKind::Identity => IdentityLink::SCHEME,
            LinkKind::Post => PostLink::SCHEME,
            LinkKind::Mail => "",
        }
    }

    pub fn is_network_key(self) -> bool {
        matches!(
            self,
            LinkKind::Ksk | LinkKind::Chk | LinkKind::Ssk | LinkKind::Usk
        )
    }

    fn accepts_length(self, length: usize) -> bool {
        match self {
            LinkKind::Identity => length == IdentityLink::LENGTH,
            _ => length > self.scheme().chars().count(),
        }
    }

    /// Finds the first valid link of this kind in `line`.
    pub fn find_next(self, line: &str) -> Option<NextLink<'_>> {
        match self {
            LinkKind::Mail => mail::find_next(line),
            _ => self.find_next_by_scheme(line),
        }
    }

    fn find_next_by_scheme(self, line: &str) -> Option<NextLink<'_>> {
        let scheme = self.scheme();
        let mut search_from = 0;
        while let Some(found) = line[search_from..].find(scheme) {
            let start = search_from + found;
            let end = start + end_of_link(&line[start..]);
            if self.accepts_length(line[start..end].chars().count()) {
                let position = if self.is_network_key() && line[..start].ends_with(NETWORK_PREFIX) {
                    start - NETWORK_PREFIX.len()
                } else {
                    start
                };
                return Some(NextLink {
                    position,
                    kind: self,
                    matched: &line[position..end],
                    link: &line[start..end],
                    remainder: &line[end..],
                });
            }
            search_from = start + scheme.len();
        }
        None
    }
}

/// The next recognized link in a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextLink<'s> {
    /// Byte offset where the match starts, including a swallowed
    /// `freenet:` marker.
    pub position: usize,
    pub kind: LinkKind,
    /// The matched text, starting at `position`.
    pub matched: &'s str,
    /// The link itself, without a swallowed marker.
    pub link: &'s str,
    /// Everything in the line after `link`.
    pub remainder: &'s str,
}

/// Runs every grammar over `line` and keeps the earliest match.
pub fn find_next_link(line: &str) -> Option<NextLink<'_>> {
    LinkKind::ALL
        .iter()
        .filter_map(|kind| kind.find_next(line))
        .min_by_key(|next| next.position)
}
