//! # Signature Errors
//!
//! Error types for header construction, parsing, and validation.

use thiserror::Error;

/// Errors that can occur while signing or validating a webhook payload.
///
/// Messages never include the secret, the signature bytes, or the payload.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// Header is malformed: missing delimiter, bad timestamp, unknown
    /// algorithm token, or non-hex signature
    #[error("invalid header")]
    InvalidHeader,

    /// Header is well-formed but its timestamp is outside the tolerance window
    #[error("signature too old")]
    TooOld,

    /// Recomputed signature does not match the one carried by the header
    #[error("invalid signature")]
    InvalidSignature,

    /// Requested algorithm token is not supported (raised when signing)
    #[error("invalid hash function")]
    UnsupportedAlgorithm(String),
}

/// Errors raised while loading or validating a [`SignatureConfig`].
///
/// [`SignatureConfig`]: crate::SignatureConfig
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Environment variable held a value that could not be parsed
    #[error("Invalid value for {var}: {value}")]
    InvalidValue { var: &'static str, value: String },

    /// Enforcing a zero-second window would reject every delivery
    #[error("Tolerance must be greater than zero when enforced")]
    ZeroTolerance,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(SignatureError::InvalidHeader.to_string(), "invalid header");
        assert_eq!(SignatureError::TooOld.to_string(), "signature too old");
        assert_eq!(
            SignatureError::InvalidSignature.to_string(),
            "invalid signature"
        );
        assert_eq!(
            SignatureError::UnsupportedAlgorithm("356".to_string()).to_string(),
            "invalid hash function"
        );
    }

    #[test]
    fn test_config_error_names_variable() {
        let err = ConfigError::InvalidValue {
            var: "WEBHOOK_SIGNATURE_TOLERANCE_SECS",
            value: "soon".to_string(),
        };
        assert!(err.to_string().contains("WEBHOOK_SIGNATURE_TOLERANCE_SECS"));
    }
}
