pub mod encoding;
pub mod keys;
pub mod parsing;

// Re-export key types for easier usage
pub use keys::{KeyError, KeyType, NetworkKey};
pub use parsing::{
    Identity, IdentityProvider, Part, Post, PostProvider, PostingContext, TextParser, parse,
};
