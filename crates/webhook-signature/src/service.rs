//! # Webhook Signature Service
//!
//! Application service that implements [`WebhookSignatureApi`] on top of the
//! domain functions, applying a [`SignatureConfig`].

use chrono::{DateTime, Utc};

use crate::config::SignatureConfig;
use crate::domain::{build_header, validate_payload, validate_payload_ignoring_tolerance};
use crate::domain::{ConfigError, SignatureError};
use crate::ports::inbound::WebhookSignatureApi;

/// Signs with the configured algorithm and verifies with the configured
/// freshness policy.
///
/// # Example
///
/// ```
/// use webhook_signature::{SignatureConfig, WebhookSignatureApi, WebhookSignatureService};
///
/// let service = WebhookSignatureService::new(SignatureConfig::default()).unwrap();
/// let header = service.sign_now(b"{}", b"secret");
/// assert!(service.verify(b"{}", &header, b"secret").is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct WebhookSignatureService {
    config: SignatureConfig,
}

impl WebhookSignatureService {
    /// Create a service, validating `config` first.
    pub fn new(config: SignatureConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a service from `WEBHOOK_SIGNATURE_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(SignatureConfig::from_env()?)
    }

    pub fn config(&self) -> &SignatureConfig {
        &self.config
    }
}

impl WebhookSignatureApi for WebhookSignatureService {
    fn sign(&self, payload: &[u8], secret: &[u8], timestamp: DateTime<Utc>) -> String {
        build_header(self.config.algorithm, timestamp, payload, secret)
    }

    fn verify(&self, payload: &[u8], header: &str, secret: &[u8]) -> Result<(), SignatureError> {
        validate_payload(
            payload,
            header,
            secret,
            self.config.tolerance,
            self.config.enforce_tolerance,
        )
    }

    fn verify_ignoring_tolerance(
        &self,
        payload: &[u8],
        header: &str,
        secret: &[u8],
    ) -> Result<(), SignatureError> {
        validate_payload_ignoring_tolerance(payload, header, secret)
    }
}
