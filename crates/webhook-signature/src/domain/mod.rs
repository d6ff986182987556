//! # Domain Layer
//!
//! Pure signing and validation logic. No I/O, no shared state.

pub mod algorithm;
pub mod errors;
pub mod header;
pub mod signing;
pub mod validation;

pub use algorithm::{HashAlgorithm, SHA256_TOKEN, SHA512_TOKEN};
pub use errors::{ConfigError, SignatureError};
pub use header::{format_header, parse_header, unix_seconds, SignedHeader};
pub use signing::{build_header, create_header_value_signature};
pub use validation::{
    constant_time_eq, is_expired, validate_payload, validate_payload_at,
    validate_payload_ignoring_tolerance, validate_payload_with_tolerance,
};
