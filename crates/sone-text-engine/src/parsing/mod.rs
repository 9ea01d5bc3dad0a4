//! # Text Parsing
//!
//! Turns the free-form text of posts and replies into a sequence of typed
//! [`Part`]s: plain text, web links, network keys, identity mentions, post
//! references and mail addresses.
//!
//! ## Pipeline
//!
//! 1. **`lines`**: split on `\n`, drop leading/trailing blank lines and
//!    collapse runs of blank lines into one
//! 2. **`kinds`**: every grammar looks for its next occurrence in the rest
//!    of the line; the earliest match wins, ties go by declaration order
//! 3. **`parser`**: text before a match becomes plain text, the match is
//!    built into its part (or degraded to plain text if it doesn't hold up)
//! 4. **`merge`**: empty plain text is dropped, adjacent plain text merged
//!
//! ## Cost
//!
//! Every grammar rescans the remainder of the line after each match, so a
//! line with many links costs roughly quadratic time in its length. Post
//! sized inputs don't notice.

pub mod context;
pub mod kinds;
pub mod lines;
pub mod merge;
pub mod parser;
pub mod scan;
pub mod types;

pub use context::{IdentityProvider, PostProvider, PostingContext};
pub use parser::{TextParser, parse};
pub use types::{Identity, Part, Post};

#[cfg(test)]
mod tests;
