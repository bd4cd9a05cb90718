//! Hash generator

use serde::Serialize;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::error::ToolError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HashAlgorithm {
    Sha1,
    Sha256,
    Sha384,
    Sha512,
    /// 32-bit string hash for demonstration only, not secure
    Demo,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 5] = [
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
        HashAlgorithm::Demo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha1 => "SHA-1",
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha384 => "SHA-384",
            HashAlgorithm::Sha512 => "SHA-512",
            HashAlgorithm::Demo => "Demo (32-bit)",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "sha1" => Some(HashAlgorithm::Sha1),
            "sha256" => Some(HashAlgorithm::Sha256),
            "sha384" => Some(HashAlgorithm::Sha384),
            "sha512" => Some(HashAlgorithm::Sha512),
            "demo" | "simple" => Some(HashAlgorithm::Demo),
            _ => None,
        }
    }
}

/// Lower-case hex digest of the UTF-8 bytes of `text`
pub fn hash(text: &str, algorithm: HashAlgorithm) -> String {
    let bytes = text.as_bytes();
    match algorithm {
        HashAlgorithm::Sha1 => hex::encode(Sha1::digest(bytes)),
        HashAlgorithm::Sha256 => hex::encode(Sha256::digest(bytes)),
        HashAlgorithm::Sha384 => hex::encode(Sha384::digest(bytes)),
        HashAlgorithm::Sha512 => hex::encode(Sha512::digest(bytes)),
        HashAlgorithm::Demo => demo_hash(text),
    }
}

/// Hash with an algorithm given by name
pub fn hash_named(text: &str, algorithm: &str) -> Result<String, ToolError> {
    HashAlgorithm::from_str(algorithm)
        .map(|alg| hash(text, alg))
        .ok_or_else(|| ToolError::UnknownHashAlgorithm(algorithm.to_string()))
}

/// Every algorithm's digest, or nothing for blank input
pub fn all_hashes(text: &str) -> Vec<(HashAlgorithm, String)> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    HashAlgorithm::ALL
        .iter()
        .map(|&alg| (alg, hash(text, alg)))
        .collect()
}

/// `h = h * 31 + unit` over UTF-16 code units in wrapping 32-bit arithmetic,
/// printed as the zero-padded hex of its absolute value
pub fn demo_hash(text: &str) -> String {
    let hash = text
        .encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_shl(5).wrapping_sub(h).wrapping_add(unit as i32));
    format!("{:08x}", (hash as i64).abs())
}
