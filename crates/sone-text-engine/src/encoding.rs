//! Base64 and Base32 flavours used by network keys and mail addresses.
//!
//! Keys and identity ids use a Base64 alphabet where `+` and `/` are
//! replaced by `~` and `-` so they survive inside URIs. Mail domains encode
//! the same identity ids in lowercase Base32.

use base64::{
    Engine,
    alphabet::Alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
use data_encoding::{Encoding, Specification};
use thiserror::Error;

const BASE64_SYMBOLS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789~-";
const BASE32_SYMBOLS: &str = "abcdefghijklmnopqrstuvwxyz234567";

const BASE64_ALPHABET: Alphabet = match Alphabet::new(BASE64_SYMBOLS) {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("invalid network base64 alphabet"),
};

/// Base64 engine for key material and identity ids.
pub const NETWORK_BASE64: GeneralPurpose = GeneralPurpose::new(
    &BASE64_ALPHABET,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("invalid base64 input: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("invalid base32 input: {0}")]
    Base32(#[from] data_encoding::DecodeError),

    #[error("invalid base32 alphabet: {0}")]
    Alphabet(#[from] data_encoding::SpecificationError),
}

pub fn decode_base64(input: &str) -> Result<Vec<u8>, EncodingError> {
    Ok(NETWORK_BASE64.decode(input)?)
}

pub fn encode_base64(bytes: &[u8]) -> String {
    NETWORK_BASE64.encode(bytes)
}

fn base32() -> Result<Encoding, EncodingError> {
    let mut spec = Specification::new();
    spec.symbols.push_str(BASE32_SYMBOLS);
    spec.check_trailing_bits = false;
    Ok(spec.encoding()?)
}

pub fn decode_base32(input: &str) -> Result<Vec<u8>, EncodingError> {
    Ok(base32()?.decode(input.as_bytes())?)
}

/// Turns the Base32 id of a mail domain into the Base64 id of its owner.
pub fn decode_mail_id(encoded: &str) -> Result<String, EncodingError> {
    decode_base32(encoded).map(|bytes| encode_base64(&bytes))
}
