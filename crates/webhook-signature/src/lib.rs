//! # Webhook Signature
//!
//! HMAC authentication for webhook payloads with replay-window checks.
//!
//! ## Wire Format
//!
//! ```text
//! <unix-seconds>,<algorithm>=<lowercase-hex-signature>
//! ```
//!
//! The signature is `HMAC(algorithm, secret, decimal(unix-seconds) || payload)`.
//!
//! | Token | Digest | Signature bytes |
//! |-------|--------|-----------------|
//! | `sha256` | SHA-256 | 32 |
//! | `sha512` | SHA-512 | 64 |
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): algorithm enum, header codec, signer,
//!   validator. Pure functions, no I/O
//! - **Ports Layer** (`ports/`): `WebhookSignatureApi`
//! - **Service Layer** (`service.rs`): `WebhookSignatureService`, configured by
//!   `SignatureConfig`
//!
//! ## Security Notes
//!
//! - Signatures are compared in constant time (`subtle`)
//! - Secrets are borrowed per call and never stored or logged
//! - Freshness is checked before the signature, so stale deliveries report
//!   `TooOld` regardless of signature correctness
//! - Headers timestamped in the future are not rejected
//!
//! ## Usage
//!
//! ```
//! use std::time::Duration;
//! use chrono::Utc;
//! use webhook_signature::{
//!     create_header_value_signature, validate_payload_with_tolerance, SignatureError,
//! };
//!
//! let payload = br#"{"event":"payment.completed"}"#;
//! let header = create_header_value_signature("sha256", Utc::now(), payload, "whsec")?;
//!
//! validate_payload_with_tolerance(payload, &header, "whsec", Duration::from_secs(300))?;
//! # Ok::<(), SignatureError>(())
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use config::{SignatureConfig, DEFAULT_TOLERANCE};
pub use domain::{
    build_header, create_header_value_signature, parse_header, validate_payload,
    validate_payload_at, validate_payload_ignoring_tolerance, validate_payload_with_tolerance,
    ConfigError, HashAlgorithm, SignatureError, SignedHeader,
};
pub use ports::WebhookSignatureApi;
pub use service::WebhookSignatureService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
