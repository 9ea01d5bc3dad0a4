use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// An identity that can be mentioned with a `sone://` link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Identity {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
        }
    }

    /// Placeholder for an identity that could not be looked up.
    pub fn id_only(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }

    /// The name if known, the raw id otherwise.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// A post that can be referenced with a `post://` link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub text: String,
}

impl Post {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// One segment of parsed post text.
///
/// Every variant has a display text (see [`Part::text`]); concatenating the
/// display texts of a parse result gives back the normalized input, with
/// recognized links replaced by their shortened forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Part {
    /// Text that isn't part of any link.
    PlainText { text: String },
    /// An `http://` or `https://` link.
    ExternalLink {
        link: String,
        text: String,
        title: String,
    },
    /// A `CHK@`, `SSK@`, `USK@` or `KSK@` key.
    NetworkLink {
        link: String,
        text: String,
        title: String,
        /// The key's routing key equals the poster's own routing key.
        trusted: bool,
    },
    /// A `post://` link to a known post.
    PostReference { post: Post },
    /// A `sone://` link; unknown identities carry only their id.
    IdentityReference { identity: Identity },
    /// A `local@<base32 id>.freemail` address.
    MailReference {
        local_part: String,
        mail_domain_id: String,
        decoded_id: String,
    },
}

impl Part {
    pub fn plain(text: impl Into<String>) -> Self {
        Part::PlainText { text: text.into() }
    }

    /// Builds a link whose title is its display text.
    pub fn external(link: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        Part::ExternalLink {
            link: link.into(),
            title: text.clone(),
            text,
        }
    }

    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Part::PlainText { text }
            | Part::ExternalLink { text, .. }
            | Part::NetworkLink { text, .. } => Cow::Borrowed(text),
            Part::PostReference { post } => Cow::Borrowed(&post.text),
            Part::IdentityReference { identity } => Cow::Borrowed(identity.display_name()),
            Part::MailReference {
                local_part,
                mail_domain_id,
                ..
            } => Cow::Owned(format!("{local_part}@{mail_domain_id}.freemail")),
        }
    }

    pub fn is_plain_text(&self) -> bool {
        matches!(self, Part::PlainText { .. })
    }
}
