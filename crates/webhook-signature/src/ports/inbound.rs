//! # Inbound Ports (Driving Ports / API)
//!
//! The interface an HTTP layer or outbound webhook dispatcher calls.

use chrono::{DateTime, Utc};

use crate::domain::SignatureError;

/// Webhook signing and verification API.
///
/// Implementations must be thread-safe (`Send + Sync`) and must not retain
/// the secrets passed to them.
pub trait WebhookSignatureApi: Send + Sync {
    /// Sign `payload` as of `timestamp` and return the header value.
    fn sign(&self, payload: &[u8], secret: &[u8], timestamp: DateTime<Utc>) -> String;

    /// Sign `payload` as of now.
    fn sign_now(&self, payload: &[u8], secret: &[u8]) -> String {
        self.sign(payload, secret, Utc::now())
    }

    /// Verify a received header using the configured freshness policy.
    fn verify(&self, payload: &[u8], header: &str, secret: &[u8]) -> Result<(), SignatureError>;

    /// Verify a received header, skipping the freshness check.
    fn verify_ignoring_tolerance(
        &self,
        payload: &[u8],
        header: &str,
        secret: &[u8],
    ) -> Result<(), SignatureError>;
}
