use crate::parsing::{Part, PostProvider};

/// `post://` references to another post.
pub struct PostLink;

impl PostLink {
    pub const SCHEME: &'static str = "post://";
}

/// Posts that can't be found are shown as the link text.
pub fn build(link: &str, posts: Option<&dyn PostProvider>) -> Part {
    let id = &link[PostLink::SCHEME.len()..];
    match posts.and_then(|provider| provider.post(id)) {
        Some(post) => Part::PostReference { post },
        None => {
            log::debug!("Unknown post {id:?}, keeping link as text");
            Part::plain(link)
        }
    }
}
