//! # Header Builder
//!
//! Produces signature headers on the sending side.

use chrono::{DateTime, Utc};

use super::algorithm::HashAlgorithm;
use super::errors::SignatureError;
use super::header::{format_header, unix_seconds};

/// Sign `payload` and return the header value.
///
/// `algorithm` is the wire token (`sha256` / `sha512`). Unknown tokens fail
/// with [`SignatureError::UnsupportedAlgorithm`].
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use webhook_signature::create_header_value_signature;
///
/// let at = Utc.with_ymd_and_hms(2021, 5, 19, 1, 2, 3).unwrap();
/// let header =
///     create_header_value_signature("sha256", at, br#"{"field":"lololo"}"#, "a4c52442911b1550")
///         .unwrap();
/// assert!(header.starts_with("1621386123,sha256="));
/// ```
pub fn create_header_value_signature(
    algorithm: &str,
    timestamp: DateTime<Utc>,
    payload: &[u8],
    secret: impl AsRef<[u8]>,
) -> Result<String, SignatureError> {
    let algorithm: HashAlgorithm = algorithm.parse()?;
    Ok(build_header(algorithm, timestamp, payload, secret))
}

/// Typed variant of [`create_header_value_signature`]; cannot fail.
pub fn build_header(
    algorithm: HashAlgorithm,
    timestamp: DateTime<Utc>,
    payload: &[u8],
    secret: impl AsRef<[u8]>,
) -> String {
    let seconds = unix_seconds(timestamp);
    let signature = algorithm.compute_signature(secret.as_ref(), seconds, payload);
    format_header(seconds, algorithm, &signature)
}
