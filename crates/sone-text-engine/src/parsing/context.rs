use crate::encoding::{self, EncodingError};

use super::types::{Identity, Post};

/// Information about the identity on whose behalf text is parsed.
///
/// Only used to mark network links that point into the poster's own
/// subspace as trusted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingContext {
    pub routing_key: Option<Vec<u8>>,
}

impl PostingContext {
    pub fn new(routing_key: impl Into<Vec<u8>>) -> Self {
        Self {
            routing_key: Some(routing_key.into()),
        }
    }

    /// Identity ids are the Base64 form of the identity's routing key.
    pub fn for_identity(id: &str) -> Result<Self, EncodingError> {
        encoding::decode_base64(id).map(Self::new)
    }

    pub fn owns(&self, routing_key: &[u8]) -> bool {
        self.routing_key.as_deref() == Some(routing_key)
    }
}

/// Resolves `sone://` ids to known identities.
pub trait IdentityProvider: Send + Sync {
    fn identity(&self, id: &str) -> Option<Identity>;
}

/// Resolves `post://` ids to known posts.
pub trait PostProvider: Send + Sync {
    fn post(&self, id: &str) -> Option<Post>;
}

impl<F> IdentityProvider for F
where
    F: Fn(&str) -> Option<Identity> + Send + Sync,
{
    fn identity(&self, id: &str) -> Option<Identity> {
        self(id)
    }
}

impl<F> PostProvider for F
where
    F: Fn(&str) -> Option<Post> + Send + Sync,
{
    fn post(&self, id: &str) -> Option<Post> {
        self(id)
    }
}
