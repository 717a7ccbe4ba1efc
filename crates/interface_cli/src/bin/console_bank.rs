//! Console Bank - Interactive Binary
//!
//! Starts the menu-driven banking shell on stdin/stdout. Logs go to stderr
//! so they never interleave with the menus.
//!
//! # Usage
//!
//! ```bash
//! # Run with defaults
//! cargo run --bin console-bank
//!
//! # Verbose JSON logs and a 5% monthly savings rate
//! BANK_LOG_LEVEL=debug BANK_LOG_JSON=true BANK_INTEREST_RATE=0.05 cargo run --bin console-bank
//! ```
//!
//! # Environment Variables
//!
//! * `BANK_LOG_LEVEL` - Log filter when `RUST_LOG` is unset (default: warn)
//! * `BANK_LOG_JSON` - Emit logs as JSON lines (default: false)
//! * `BANK_INTEREST_RATE` - Monthly savings rate as a fraction, 0 to 1 (default: 0.04)

use std::io;

use anyhow::Context;
use domain_directory::Directory;
use interface_cli::{CliConfig, Shell};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = CliConfig::from_env().context("failed to load BANK_* configuration")?;
    init_tracing(&config);

    let policy = config.interest_policy()?;
    tracing::info!(interest_rate = %policy.rate(), "Starting console bank");

    let directory = Directory::new().with_interest_policy(policy);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(directory, stdin.lock(), stdout.lock());
    shell.run()?;

    Ok(())
}

/// Installs a stderr subscriber, preferring `RUST_LOG` over the configured level
fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let json_layer = config.log_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(io::stderr)
    });
    let text_layer = (!config.log_json).then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_writer(io::stderr)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}
