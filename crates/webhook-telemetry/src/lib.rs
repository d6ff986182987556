//! # Webhook Telemetry
//!
//! Structured logging for webhook signature binaries and services.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use webhook_telemetry::{init_tracing, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env().for_service("webhook-sign");
//! init_tracing(&config).expect("Failed to init telemetry");
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `webhook-signature` | Service name in events |
//! | `WEBHOOK_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `WEBHOOK_JSON_LOGS` | `false` (`true` in containers) | JSON output |
//! | `WEBHOOK_CONSOLE_OUTPUT` | `true` | Emit to stderr at all |

#![warn(missing_docs)]

mod config;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use tracing_setup::{build_env_filter, init_tracing};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// A global subscriber is already installed, or installation failed
    #[error("Failed to initialize tracing subscriber: {0}")]
    SubscriberInit(String),

    /// The log level or filter directive could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(String),
}
