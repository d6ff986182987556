//! # Payload Validation
//!
//! Receiver-side checks, in order:
//!
//! 1. **Parse**: header structure, timestamp, algorithm, hex
//! 2. **Freshness**: only when tolerance is enforced; runs before the
//!    signature comparison so a stale but correctly signed header is `TooOld`
//! 3. **Signature**: constant-time comparison of the recomputed HMAC
//!
//! A header exactly `tolerance` old is accepted. Headers timestamped in the
//! future are not rejected.

use std::time::Duration;

use chrono::{DateTime, Utc};
use subtle::ConstantTimeEq;

use super::errors::SignatureError;
use super::header::parse_header;

/// Validate `payload` against `header`, rejecting signatures older than
/// `tolerance`.
pub fn validate_payload_with_tolerance(
    payload: &[u8],
    header: &str,
    secret: impl AsRef<[u8]>,
    tolerance: Duration,
) -> Result<(), SignatureError> {
    validate_payload(payload, header, secret, tolerance, true)
}

/// Validate `payload` against `header` without any freshness check.
pub fn validate_payload_ignoring_tolerance(
    payload: &[u8],
    header: &str,
    secret: impl AsRef<[u8]>,
) -> Result<(), SignatureError> {
    validate_payload(payload, header, secret, Duration::ZERO, false)
}

/// Validate against the current wall clock.
pub fn validate_payload(
    payload: &[u8],
    header: &str,
    secret: impl AsRef<[u8]>,
    tolerance: Duration,
    enforce_tolerance: bool,
) -> Result<(), SignatureError> {
    validate_payload_at(
        Utc::now(),
        payload,
        header,
        secret,
        tolerance,
        enforce_tolerance,
    )
}

/// Validate as if the current time were `now`.
pub fn validate_payload_at(
    now: DateTime<Utc>,
    payload: &[u8],
    header: &str,
    secret: impl AsRef<[u8]>,
    tolerance: Duration,
    enforce_tolerance: bool,
) -> Result<(), SignatureError> {
    let parsed = parse_header(header).inspect_err(|_| {
        tracing::debug!("Rejected webhook signature header: malformed");
    })?;

    let expected =
        parsed
            .algorithm()
            .compute_signature(secret.as_ref(), parsed.timestamp(), payload);

    if enforce_tolerance && is_expired(now, parsed.timestamp(), tolerance) {
        tracing::debug!(
            timestamp = parsed.timestamp(),
            tolerance_secs = tolerance.as_secs(),
            "Rejected webhook signature: outside tolerance window"
        );
        return Err(SignatureError::TooOld);
    }

    if constant_time_eq(&expected, parsed.signature()) {
        Ok(())
    } else {
        tracing::debug!(
            algorithm = %parsed.algorithm(),
            timestamp = parsed.timestamp(),
            "Rejected webhook signature: mismatch"
        );
        Err(SignatureError::InvalidSignature)
    }
}

/// True when strictly more than `tolerance` has elapsed since `timestamp`.
///
/// Elapsed time is negative for future timestamps, which never expire.
pub fn is_expired(now: DateTime<Utc>, timestamp: i64, tolerance: Duration) -> bool {
    let elapsed_nanos = (i128::from(now.timestamp()) - i128::from(timestamp)) * 1_000_000_000
        + i128::from(now.timestamp_subsec_nanos());
    // Duration::as_nanos is u128 bounded by u64::MAX seconds, which fits in i128.
    let tolerance_nanos = tolerance.as_nanos() as i128;
    elapsed_nanos > tolerance_nanos
}

/// Constant-time byte comparison.
///
/// Runs in time independent of the position of the first differing byte.
/// Lengths are public (they follow from the algorithm) so a length mismatch
/// returns early.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
