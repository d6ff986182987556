//! # Signature Header
//!
//! Wire codec for `"<unix-seconds>,<algorithm>=<lowercase-hex-signature>"`.
//!
//! Only the first `,` and the first `=` are significant. Anything after them
//! belongs to the following field.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use super::algorithm::HashAlgorithm;
use super::errors::SignatureError;

/// Separates the timestamp from the `algorithm=signature` field.
pub const FIELD_SEPARATOR: char = ',';

/// Separates the algorithm token from the hex signature.
pub const ALGORITHM_SEPARATOR: char = '=';

/// A parsed signature header.
///
/// Lives for the duration of one verification call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeader {
    timestamp: i64,
    signature: Vec<u8>,
    algorithm: HashAlgorithm,
}

impl SignedHeader {
    pub fn new(timestamp: i64, algorithm: HashAlgorithm, signature: Vec<u8>) -> Self {
        Self {
            timestamp,
            signature,
            algorithm,
        }
    }

    /// Unix seconds the sender signed with.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Raw signature bytes as sent.
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Signing instant, or `None` if the timestamp is outside chrono's range.
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }
}

/// Parse a header value into its three fields.
///
/// Every structural failure maps to [`SignatureError::InvalidHeader`].
pub fn parse_header(header: &str) -> Result<SignedHeader, SignatureError> {
    let (timestamp, rest) = header
        .split_once(FIELD_SEPARATOR)
        .ok_or(SignatureError::InvalidHeader)?;

    let timestamp: i64 = timestamp
        .parse()
        .map_err(|_| SignatureError::InvalidHeader)?;

    let (token, signature_hex) = rest
        .split_once(ALGORITHM_SEPARATOR)
        .ok_or(SignatureError::InvalidHeader)?;

    let algorithm = HashAlgorithm::from_token(token).ok_or(SignatureError::InvalidHeader)?;

    let signature = hex::decode(signature_hex).map_err(|_| SignatureError::InvalidHeader)?;

    Ok(SignedHeader {
        timestamp,
        signature,
        algorithm,
    })
}

/// Render the canonical header value.
pub fn format_header(timestamp: i64, algorithm: HashAlgorithm, signature: &[u8]) -> String {
    format!(
        "{}{}{}{}{}",
        timestamp,
        FIELD_SEPARATOR,
        algorithm.as_str(),
        ALGORITHM_SEPARATOR,
        hex::encode(signature)
    )
}

/// Whole Unix seconds of `at`, floored.
pub fn unix_seconds(at: DateTime<Utc>) -> i64 {
    at.timestamp()
}

impl fmt::Display for SignedHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_header(
            self.timestamp,
            self.algorithm,
            &self.signature,
        ))
    }
}

impl FromStr for SignedHeader {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_header(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const FIXTURE_SHA256: &str =
        "1621386123,sha256=00fcdf824483bca8114f1e75ee611ce2bc9c55adfee435f7c1d487e2a8f7ed55";

    #[test]
    fn test_parse_valid_header() {
        let header = parse_header(FIXTURE_SHA256).unwrap();
        assert_eq!(header.timestamp(), 1621386123);
        assert_eq!(header.algorithm(), HashAlgorithm::Sha256);
        assert_eq!(header.signature().len(), 32);
        assert_eq!(header.signature()[0], 0x00);
        assert_eq!(header.signature()[1], 0xfc);
    }

    #[test]
    fn test_display_reproduces_wire_form() {
        let header: SignedHeader = FIXTURE_SHA256.parse().unwrap();
        assert_eq!(header.to_string(), FIXTURE_SHA256);
    }

    #[test]
    fn test_uppercase_hex_is_decoded_and_rendered_lowercase() {
        let header = parse_header("7,sha256=ABCDEF").unwrap();
        assert_eq!(header.signature(), &[0xab, 0xcd, 0xef]);
        assert_eq!(header.to_string(), "7,sha256=abcdef");
    }

    #[test]
    fn test_missing_comma() {
        assert_eq!(
            parse_header("sha256=00fcdf82"),
            Err(SignatureError::InvalidHeader)
        );
    }

    #[test]
    fn test_missing_equals() {
        assert_eq!(
            parse_header("1621386125,00fcdf82"),
            Err(SignatureError::InvalidHeader)
        );
    }

    #[test]
    fn test_non_numeric_timestamp() {
        assert_eq!(
            parse_header("bernie,sha256=00fcdf82"),
            Err(SignatureError::InvalidHeader)
        );
        assert_eq!(
            parse_header(" 1,sha256=00"),
            Err(SignatureError::InvalidHeader)
        );
        assert_eq!(
            parse_header("99999999999999999999,sha256=00"),
            Err(SignatureError::InvalidHeader)
        );
    }

    #[test]
    fn test_unknown_or_miscased_algorithm() {
        assert_eq!(
            parse_header("1,md5=00"),
            Err(SignatureError::InvalidHeader)
        );
        assert_eq!(
            parse_header("1,SHA256=00"),
            Err(SignatureError::InvalidHeader)
        );
    }

    #[test]
    fn test_invalid_hex() {
        assert_eq!(
            parse_header("1,sha256=0g"),
            Err(SignatureError::InvalidHeader)
        );
        assert_eq!(
            parse_header("1,sha256=abc"),
            Err(SignatureError::InvalidHeader)
        );
    }

    #[test]
    fn test_zero_and_negative_timestamps_are_valid() {
        assert_eq!(parse_header("0,sha256=00").unwrap().timestamp(), 0);
        assert_eq!(parse_header("-42,sha512=00").unwrap().timestamp(), -42);
        assert_eq!(parse_header("+42,sha512=00").unwrap().timestamp(), 42);
    }

    #[test]
    fn test_only_first_delimiters_are_significant() {
        // The second comma stays in the algorithm field, which then fails lookup.
        assert_eq!(
            parse_header("1,2,sha256=00"),
            Err(SignatureError::InvalidHeader)
        );
        // The second '=' stays in the signature field, which then fails hex.
        assert_eq!(
            parse_header("1,sha256=00=11"),
            Err(SignatureError::InvalidHeader)
        );
    }

    #[test]
    fn test_empty_signature_parses() {
        let header = parse_header("1,sha256=").unwrap();
        assert!(header.signature().is_empty());
    }

    #[test]
    fn test_unix_seconds_truncates() {
        let at = Utc
            .with_ymd_and_hms(2021, 5, 19, 1, 2, 3)
            .unwrap()
            .checked_add_signed(chrono::Duration::nanoseconds(4))
            .unwrap();
        assert_eq!(unix_seconds(at), 1621386123);
    }

    #[test]
    fn test_unix_seconds_floors_before_epoch() {
        let at = DateTime::from_timestamp(-2, 500_000_000).unwrap();
        assert_eq!(unix_seconds(at), -2);
    }

    #[test]
    fn test_issued_at() {
        let header = parse_header(FIXTURE_SHA256).unwrap();
        assert_eq!(
            header.issued_at(),
            Some(Utc.with_ymd_and_hms(2021, 5, 19, 1, 2, 3).unwrap())
        );
        let far = SignedHeader::new(i64::MAX, HashAlgorithm::Sha256, vec![]);
        assert_eq!(far.issued_at(), None);
    }
}
