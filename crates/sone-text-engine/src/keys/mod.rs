//! # Network Keys
//!
//! Structured view of the `CHK@`, `SSK@`, `USK@` and `KSK@` URIs that users
//! paste into posts. The parser only needs enough structure to pick a
//! display name and to compare routing keys, so key material is decoded but
//! not checked for length.
//!
//! ## Layout
//!
//! - `KSK@name[/meta...]`
//! - `CHK@routing,crypto,extra[/meta...]`
//! - `SSK@routing,crypto,extra[/docname[/meta...]]`
//! - `USK@routing,crypto,extra/docname/edition[/meta...]`

pub mod key_type;

pub use key_type::KeyType;

use thiserror::Error;

use crate::encoding::{self, EncodingError};

/// Optional marker in front of a key, e.g. `freenet:CHK@...`.
pub const NETWORK_PREFIX: &str = "freenet:";

#[derive(Debug, Error)]
pub enum KeyError {
    #[error("key {0:?} has no '@' separator")]
    MissingSeparator(String),

    #[error("unknown key type {0:?}")]
    UnknownKeyType(String),

    #[error("key has no routing key")]
    MissingRoutingKey,

    #[error("key has {0} comma-separated components, at most 3 are allowed")]
    TooManyKeyComponents(usize),

    #[error("invalid key material: {0}")]
    InvalidKeyMaterial(#[from] EncodingError),

    #[error("{0} key has no document name")]
    MissingDocName(KeyType),

    #[error("USK key has invalid edition {0:?}")]
    InvalidEdition(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkKey {
    key_type: KeyType,
    routing_key: Option<Vec<u8>>,
    crypto_key: Option<Vec<u8>>,
    extra: Option<Vec<u8>>,
    doc_name: Option<String>,
    edition: Option<i64>,
    meta_strings: Vec<String>,
}

impl NetworkKey {
    pub fn parse(uri: &str) -> Result<Self, KeyError> {
        let uri = strip_network_prefix(uri);
        let (type_name, rest) = uri
            .split_once('@')
            .ok_or_else(|| KeyError::MissingSeparator(uri.to_string()))?;
        let key_type: KeyType = type_name
            .parse()
            .map_err(|()| KeyError::UnknownKeyType(type_name.to_string()))?;

        let mut key = NetworkKey {
            key_type,
            routing_key: None,
            crypto_key: None,
            extra: None,
            doc_name: None,
            edition: None,
            meta_strings: Vec::new(),
        };

        let mut segments = rest.split('/');
        let first = segments.next().unwrap_or_default();

        if key_type.has_key_material() {
            key.decode_key_material(first)?;
        } else if first.is_empty() {
            return Err(KeyError::MissingDocName(key_type));
        } else {
            key.doc_name = Some(first.to_string());
        }

        match key_type {
            KeyType::Ssk => {
                key.doc_name = segments
                    .next()
                    .filter(|name| !name.is_empty())
                    .map(str::to_string);
            }
            KeyType::Usk => {
                let doc_name = segments
                    .next()
                    .filter(|name| !name.is_empty())
                    .ok_or(KeyError::MissingDocName(key_type))?;
                let edition = segments.next().unwrap_or_default();
                key.doc_name = Some(doc_name.to_string());
                key.edition = Some(
                    edition
                        .parse()
                        .map_err(|_| KeyError::InvalidEdition(edition.to_string()))?,
                );
            }
            KeyType::Chk | KeyType::Ksk => {}
        }

        key.meta_strings = segments.map(str::to_string).collect();
        Ok(key)
    }

    fn decode_key_material(&mut self, keys: &str) -> Result<(), KeyError> {
        let components: Vec<&str> = keys.split(',').collect();
        if components.len() > 3 {
            return Err(KeyError::TooManyKeyComponents(components.len()));
        }
        let decode = |index: usize| -> Result<Option<Vec<u8>>, KeyError> {
            match components.get(index) {
                Some(component) if !component.is_empty() => {
                    Ok(Some(encoding::decode_base64(component)?))
                }
                _ => Ok(None),
            }
        };

        self.routing_key = Some(decode(0)?.ok_or(KeyError::MissingRoutingKey)?);
        self.crypto_key = decode(1)?;
        self.extra = decode(2)?;
        Ok(())
    }

    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    pub fn routing_key(&self) -> Option<&[u8]> {
        self.routing_key.as_deref()
    }

    pub fn crypto_key(&self) -> Option<&[u8]> {
        self.crypto_key.as_deref()
    }

    pub fn extra(&self) -> Option<&[u8]> {
        self.extra.as_deref()
    }

    pub fn doc_name(&self) -> Option<&str> {
        self.doc_name.as_deref()
    }

    pub fn edition(&self) -> Option<i64> {
        self.edition
    }

    /// Path components after the document name. A trailing `/` shows up as
    /// a trailing empty string.
    pub fn meta_strings(&self) -> &[String] {
        &self.meta_strings
    }

    /// `TYPE@<routing key>`, or just `TYPE@` for keyword keys.
    pub fn short_form(&self) -> String {
        let routing_key = self
            .routing_key
            .as_deref()
            .map(encoding::encode_base64)
            .unwrap_or_default();
        format!("{}@{}", self.key_type, routing_key)
    }
}

fn strip_network_prefix(uri: &str) -> &str {
    match uri.get(..NETWORK_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(NETWORK_PREFIX) => &uri[NETWORK_PREFIX.len()..],
        _ => uri,
    }
}
