use crate::parsing::{Identity, IdentityProvider, Part};

/// `sone://` mentions of an identity.
pub struct IdentityLink;

impl IdentityLink {
    pub const SCHEME: &'static str = "sone://";
    /// Scheme plus a 43 character Base64 identity id.
    pub const LENGTH: usize = 50;
}

/// Unknown identities still become references, carrying only their id.
pub fn build(link: &str, identities: Option<&dyn IdentityProvider>) -> Part {
    let id = &link[IdentityLink::SCHEME.len()..];
    let identity = identities
        .and_then(|provider| provider.identity(id))
        .unwrap_or_else(|| Identity::id_only(id));
    Part::IdentityReference { identity }
}
