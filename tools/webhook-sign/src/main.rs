//! webhook-sign: sign and verify webhook payloads from the command line.
//!
//! ```bash
//! export WEBHOOK_SECRET=whsec_example
//! echo -n '{"event":"ping"}' | webhook-sign sign -a sha256
//! echo -n '{"event":"ping"}' | webhook-sign verify --header "$HEADER"
//! ```

use std::io::Read;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use webhook_sign::{execute, Args};
use webhook_telemetry::{init_tracing, TelemetryConfig};

fn main() -> ExitCode {
    let args = Args::parse();

    let telemetry = TelemetryConfig::from_env().for_service("webhook-sign");
    if let Err(e) = init_tracing(&telemetry) {
        eprintln!("Warning: {}", e);
    }

    match run(&args) {
        Ok(line) => {
            println!("{}", line);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = %e, "Command failed");
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<String> {
    let secret = std::env::var(&args.secret_env)
        .with_context(|| format!("environment variable {} is not set", args.secret_env))?;

    let payload = match &args.payload_file {
        Some(path) => std::fs::read(path)
            .with_context(|| format!("failed to read payload from {}", path.display()))?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read payload from stdin")?;
            buf
        }
    };

    execute(&args.command, &payload, secret.as_bytes(), chrono::Utc::now())
}
