//! # Hash Algorithms
//!
//! The closed set of digests usable inside the HMAC construction.
//!
//! Adding a digest means adding a variant, its token, and its arm in
//! [`HashAlgorithm::compute_signature`].

use std::fmt;
use std::str::FromStr;

use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha512};

use super::errors::SignatureError;

type HmacSha256 = Hmac<Sha256>;
type HmacSha512 = Hmac<Sha512>;

/// Wire token for HMAC-SHA256.
pub const SHA256_TOKEN: &str = "sha256";

/// Wire token for HMAC-SHA512.
pub const SHA512_TOKEN: &str = "sha512";

/// Digest used to sign a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// HMAC-SHA256 (32-byte signature)
    Sha256,
    /// HMAC-SHA512 (64-byte signature)
    Sha512,
}

impl HashAlgorithm {
    /// Every supported algorithm.
    pub const ALL: [HashAlgorithm; 2] = [HashAlgorithm::Sha256, HashAlgorithm::Sha512];

    /// Token carried in the header (`sha256` / `sha512`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha256 => SHA256_TOKEN,
            Self::Sha512 => SHA512_TOKEN,
        }
    }

    /// Signature length in bytes.
    pub fn output_len(&self) -> usize {
        match self {
            Self::Sha256 => 32,
            Self::Sha512 => 64,
        }
    }

    /// Exact, case-sensitive token lookup.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            SHA256_TOKEN => Some(Self::Sha256),
            SHA512_TOKEN => Some(Self::Sha512),
            _ => None,
        }
    }

    /// HMAC over `decimal(timestamp) || payload` keyed with `secret`.
    pub fn compute_signature(&self, secret: &[u8], timestamp: i64, payload: &[u8]) -> Vec<u8> {
        let prefix = timestamp.to_string();
        match self {
            Self::Sha256 => keyed_digest::<HmacSha256>(secret, prefix.as_bytes(), payload),
            Self::Sha512 => keyed_digest::<HmacSha512>(secret, prefix.as_bytes(), payload),
        }
    }
}

fn keyed_digest<M>(secret: &[u8], prefix: &[u8], payload: &[u8]) -> Vec<u8>
where
    M: Mac + KeyInit,
{
    let mut mac = <M as KeyInit>::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(prefix);
    mac.update(payload);
    mac.finalize().into_bytes().to_vec()
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| SignatureError::UnsupportedAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_roundtrip() {
        for algorithm in HashAlgorithm::ALL {
            assert_eq!(HashAlgorithm::from_token(algorithm.as_str()), Some(algorithm));
            assert_eq!(algorithm.to_string(), algorithm.as_str());
        }
    }

    #[test]
    fn test_tokens_are_case_sensitive() {
        assert_eq!(HashAlgorithm::from_token("SHA256"), None);
        assert_eq!(HashAlgorithm::from_token("Sha512"), None);
        assert_eq!(HashAlgorithm::from_token(" sha256"), None);
        assert_eq!(HashAlgorithm::from_token(""), None);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert_eq!(
            "356".parse::<HashAlgorithm>(),
            Err(SignatureError::UnsupportedAlgorithm("356".to_string()))
        );
        assert_eq!("sha512".parse::<HashAlgorithm>(), Ok(HashAlgorithm::Sha512));
    }

    #[test]
    fn test_output_len_matches_digest() {
        for algorithm in HashAlgorithm::ALL {
            let sig = algorithm.compute_signature(b"key", 0, b"payload");
            assert_eq!(sig.len(), algorithm.output_len());
        }
    }

    #[test]
    fn test_timestamp_is_part_of_message() {
        let a = HashAlgorithm::Sha256.compute_signature(b"key", 1, b"payload");
        let b = HashAlgorithm::Sha256.compute_signature(b"key", 2, b"payload");
        assert_ne!(a, b);
    }

    #[test]
    fn test_no_separator_between_timestamp_and_payload() {
        // "12" || "3" and "1" || "23" produce the same message bytes.
        let a = HashAlgorithm::Sha256.compute_signature(b"key", 12, b"3");
        let b = HashAlgorithm::Sha256.compute_signature(b"key", 1, b"23");
        assert_eq!(a, b);
    }

    #[test]
    fn test_negative_timestamp_signs_with_sign_character() {
        let negative = HashAlgorithm::Sha256.compute_signature(b"key", -5, b"");
        assert_eq!(negative, keyed_digest::<HmacSha256>(b"key", b"-5", b""));
    }

    #[test]
    fn test_empty_secret_is_accepted() {
        let sig = HashAlgorithm::Sha512.compute_signature(b"", 1621386123, b"{}");
        assert_eq!(sig.len(), 64);
    }
}
