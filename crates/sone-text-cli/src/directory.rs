use std::collections::HashMap;

use sone_text_engine::{Identity, IdentityProvider, Post, PostProvider};

/// In-memory index of the identities and posts known to the caller.
#[derive(Debug, Default)]
pub struct Directory {
    identities: HashMap<String, Identity>,
    posts: HashMap<String, Post>,
}

impl Directory {
    pub fn new(identities: Vec<Identity>, posts: Vec<Post>) -> Self {
        Self {
            identities: identities
                .into_iter()
                .map(|identity| (identity.id.clone(), identity))
                .collect(),
            posts: posts.into_iter().map(|post| (post.id.clone(), post)).collect(),
        }
    }

    pub fn identity_count(&self) -> usize {
        self.identities.len()
    }

    pub fn post_count(&self) -> usize {
        self.posts.len()
    }
}

impl IdentityProvider for Directory {
    fn identity(&self, id: &str) -> Option<Identity> {
        self.identities.get(id).cloned()
    }
}

impl PostProvider for Directory {
    fn post(&self, id: &str) -> Option<Post> {
        self.posts.get(id).cloned()
    }
}
