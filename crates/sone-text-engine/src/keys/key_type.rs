use std::{fmt, str::FromStr};

use serde::Serialize;

/// The four key families that can appear in post text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum KeyType {
    /// Content-hash key: immutable, addressed by the hash of its data.
    Chk,
    /// Signed subspace key: mutable site owned by a routing key.
    Ssk,
    /// Updatable subspace key: an SSK with an edition number.
    Usk,
    /// Keyword-signed key: addressed by a guessable name.
    Ksk,
}

impl KeyType {
    pub fn as_str(self) -> &'static str {
        match self {
            KeyType::Chk => "CHK",
            KeyType::Ssk => "SSK",
            KeyType::Usk => "USK",
            KeyType::Ksk => "KSK",
        }
    }

    /// Whether keys of this type carry routing key material after the `@`.
    pub fn has_key_material(self) -> bool {
        !matches!(self, KeyType::Ksk)
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CHK" => Ok(KeyType::Chk),
            "SSK" => Ok(KeyType::Ssk),
            "USK" => Ok(KeyType::Usk),
            "KSK" => Ok(KeyType::Ksk),
            _ => Err(()),
        }
    }
}
