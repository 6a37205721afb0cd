//! Digest engine: hashes `text + salt` with a selectable algorithm.
//!
//! The supported algorithms form a closed registry modeled as an enum,
//! validated once at the boundary. Output is the lowercase hex digest with
//! no separators, byte-identical to the reference implementation of each
//! algorithm.

use std::fmt;
use std::str::FromStr;

use blake2::{Blake2b512, Blake2s256};
use sha2::{Digest, Sha256, Sha384, Sha512};
use sha3::{Sha3_256, Sha3_384, Sha3_512};

use crate::error::{CodecError, CodecResult};

/// The closed registry of supported hash algorithms.
///
/// BLAKE2 variants use the 64-byte (blake2b) and 32-byte (blake2s) digest
/// sizes, matching the defaults of common reference implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Sha256,
    Sha384,
    Sha512,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    Blake2b,
    Blake2s,
}

impl HashAlgorithm {
    /// Every registry member, in canonical order.
    pub const ALL: [HashAlgorithm; 8] = [
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
        HashAlgorithm::Sha3_256,
        HashAlgorithm::Sha3_384,
        HashAlgorithm::Sha3_512,
        HashAlgorithm::Blake2b,
        HashAlgorithm::Blake2s,
    ];

    /// Canonical name, as accepted by [`HashAlgorithm::from_str`].
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
            HashAlgorithm::Sha3_256 => "sha3-256",
            HashAlgorithm::Sha3_384 => "sha3-384",
            HashAlgorithm::Sha3_512 => "sha3-512",
            HashAlgorithm::Blake2b => "blake2b",
            HashAlgorithm::Blake2s => "blake2s",
        }
    }

    /// Length of the hex digest this algorithm produces.
    pub fn hex_len(&self) -> usize {
        match self {
            HashAlgorithm::Sha256 | HashAlgorithm::Sha3_256 | HashAlgorithm::Blake2s => 64,
            HashAlgorithm::Sha384 | HashAlgorithm::Sha3_384 => 96,
            HashAlgorithm::Sha512 | HashAlgorithm::Sha3_512 | HashAlgorithm::Blake2b => 128,
        }
    }

    /// Comma-separated list of all supported names (for error messages).
    pub fn supported_names() -> String {
        Self::ALL
            .iter()
            .map(|a| a.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for HashAlgorithm {
    fn default() -> Self {
        HashAlgorithm::Sha512
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = CodecError;

    /// Accepts both hyphenated and underscored SHA-3 spellings
    /// ("sha3-256" and "sha3_256").
    fn from_str(s: &str) -> CodecResult<Self> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "sha256" => Ok(HashAlgorithm::Sha256),
            "sha384" => Ok(HashAlgorithm::Sha384),
            "sha512" => Ok(HashAlgorithm::Sha512),
            "sha3-256" => Ok(HashAlgorithm::Sha3_256),
            "sha3-384" => Ok(HashAlgorithm::Sha3_384),
            "sha3-512" => Ok(HashAlgorithm::Sha3_512),
            "blake2b" => Ok(HashAlgorithm::Blake2b),
            "blake2s" => Ok(HashAlgorithm::Blake2s),
            _ => Err(CodecError::UnsupportedAlgorithm {
                name: s.to_string(),
                supported: HashAlgorithm::supported_names(),
            }),
        }
    }
}

/// Hash `text + salt` and return the lowercase hex digest.
///
/// Pure and deterministic; the salt is concatenated onto the text before
/// hashing, never mixed in any other way.
pub fn digest_hex(text: &str, salt: &str, algorithm: HashAlgorithm) -> String {
    let mut input = Vec::with_capacity(text.len() + salt.len());
    input.extend_from_slice(text.as_bytes());
    input.extend_from_slice(salt.as_bytes());

    match algorithm {
        HashAlgorithm::Sha256 => hex_of::<Sha256>(&input),
        HashAlgorithm::Sha384 => hex_of::<Sha384>(&input),
        HashAlgorithm::Sha512 => hex_of::<Sha512>(&input),
        HashAlgorithm::Sha3_256 => hex_of::<Sha3_256>(&input),
        HashAlgorithm::Sha3_384 => hex_of::<Sha3_384>(&input),
        HashAlgorithm::Sha3_512 => hex_of::<Sha3_512>(&input),
        HashAlgorithm::Blake2b => hex_of::<Blake2b512>(&input),
        HashAlgorithm::Blake2s => hex_of::<Blake2s256>(&input),
    }
}

fn hex_of<D: Digest>(input: &[u8]) -> String {
    let mut hasher = D::new();
    hasher.update(input);
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}
