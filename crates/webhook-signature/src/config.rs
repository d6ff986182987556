//! Signature policy configuration.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use webhook_signature::{HashAlgorithm, SignatureConfig};
//!
//! let config = SignatureConfig::default()
//!     .with_algorithm(HashAlgorithm::Sha512)
//!     .with_tolerance(Duration::from_secs(60));
//! assert!(config.validate().is_ok());
//! ```

use std::env;
use std::time::Duration;

use crate::domain::{ConfigError, HashAlgorithm};

/// Env var selecting the signing algorithm token.
pub const ENV_ALGORITHM: &str = "WEBHOOK_SIGNATURE_ALGORITHM";
/// Env var holding the tolerance window in whole seconds.
pub const ENV_TOLERANCE_SECS: &str = "WEBHOOK_SIGNATURE_TOLERANCE_SECS";
/// Env var toggling tolerance enforcement.
pub const ENV_ENFORCE_TOLERANCE: &str = "WEBHOOK_SIGNATURE_ENFORCE_TOLERANCE";

/// Default tolerance window (5 minutes).
pub const DEFAULT_TOLERANCE: Duration = Duration::from_secs(300);

/// How a [`WebhookSignatureService`] signs and verifies.
///
/// Holds no secret.
///
/// [`WebhookSignatureService`]: crate::WebhookSignatureService
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureConfig {
    /// Algorithm used when signing. Verification follows the header.
    pub algorithm: HashAlgorithm,
    /// Maximum accepted age of a signature
    pub tolerance: Duration,
    /// Whether `tolerance` is enforced on verification
    pub enforce_tolerance: bool,
}

impl Default for SignatureConfig {
    fn default() -> Self {
        Self {
            algorithm: HashAlgorithm::Sha256,
            tolerance: DEFAULT_TOLERANCE,
            enforce_tolerance: true,
        }
    }
}

impl SignatureConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `WEBHOOK_SIGNATURE_ALGORITHM`: `sha256` or `sha512` (default: sha256)
    /// - `WEBHOOK_SIGNATURE_TOLERANCE_SECS`: window in seconds (default: 300)
    /// - `WEBHOOK_SIGNATURE_ENFORCE_TOLERANCE`: `true`/`false`/`1`/`0` (default: true)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. `from_env` delegates here.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_ALGORITHM) {
            config.algorithm =
                HashAlgorithm::from_token(&value).ok_or(ConfigError::InvalidValue {
                    var: ENV_ALGORITHM,
                    value,
                })?;
        }

        if let Some(value) = lookup(ENV_TOLERANCE_SECS) {
            let secs: u64 = value.parse().map_err(|_| ConfigError::InvalidValue {
                var: ENV_TOLERANCE_SECS,
                value: value.clone(),
            })?;
            config.tolerance = Duration::from_secs(secs);
        }

        if let Some(value) = lookup(ENV_ENFORCE_TOLERANCE) {
            config.enforce_tolerance = match value.to_lowercase().as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: ENV_ENFORCE_TOLERANCE,
                        value,
                    })
                }
            };
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot accept any delivery.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.enforce_tolerance && self.tolerance.is_zero() {
            return Err(ConfigError::ZeroTolerance);
        }
        Ok(())
    }

    pub fn with_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the window and enable enforcement.
    pub fn with_tolerance(mut self, tolerance: Duration) -> Self {
        self.tolerance = tolerance;
        self.enforce_tolerance = true;
        self
    }

    /// Disable freshness checks.
    pub fn ignoring_tolerance(mut self) -> Self {
        self.enforce_tolerance = false;
        self
    }
}
