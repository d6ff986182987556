//! Command definitions and execution for `webhook-sign`.
//!
//! The secret is read from an environment variable, never from argv, so it
//! does not show up in process listings or shell history.

use std::time::Duration;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use webhook_signature::{build_header, validate_payload_at, HashAlgorithm, SignatureError};

/// webhook-sign: timestamped HMAC signatures for webhook payloads
#[derive(Parser, Debug)]
#[command(name = "webhook-sign")]
#[command(about = "Sign and verify webhook payloads")]
pub struct Args {
    /// Environment variable holding the shared secret
    #[arg(long, default_value = "WEBHOOK_SECRET", global = true)]
    pub secret_env: String,

    /// Read the payload from this file instead of stdin
    #[arg(long, global = true)]
    pub payload_file: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print a signature header for the payload
    Sign {
        /// Digest token (sha256, sha512)
        #[arg(short, long, default_value = "sha256", value_parser = parse_algorithm)]
        algorithm: HashAlgorithm,

        /// Unix seconds to sign with (default: now)
        #[arg(short, long, allow_hyphen_values = true)]
        timestamp: Option<i64>,
    },

    /// Check a signature header against the payload
    Verify {
        /// Header value as received
        #[arg(long)]
        header: String,

        /// Maximum signature age in seconds
        #[arg(long, default_value = "300")]
        tolerance_secs: u64,

        /// Skip the freshness check
        #[arg(long)]
        ignore_tolerance: bool,
    },
}

fn parse_algorithm(token: &str) -> Result<HashAlgorithm, String> {
    token.parse().map_err(|e: SignatureError| e.to_string())
}

/// Run `command` over `payload` with `secret`; returns the line to print.
pub fn execute(
    command: &Command,
    payload: &[u8],
    secret: &[u8],
    now: DateTime<Utc>,
) -> anyhow::Result<String> {
    match command {
        Command::Sign {
            algorithm,
            timestamp,
        } => {
            let at = match timestamp {
                Some(secs) => DateTime::from_timestamp(*secs, 0)
                    .ok_or_else(|| anyhow::anyhow!("timestamp {} out of range", secs))?,
                None => now,
            };
            Ok(build_header(*algorithm, at, payload, secret))
        }
        Command::Verify {
            header,
            tolerance_secs,
            ignore_tolerance,
        } => {
            validate_payload_at(
                now,
                payload,
                header,
                secret,
                Duration::from_secs(*tolerance_secs),
                !ignore_tolerance,
            )?;
            Ok("valid".to_string())
        }
    }
}
