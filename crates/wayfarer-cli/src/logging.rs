//! Tracing setup for the CLI. Logs go to stderr so stdout stays parseable.

use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing_subscriber::{fmt, EnvFilter};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Compact human-readable lines.
    Text,
    /// One JSON object per event.
    Json,
}

/// Build the filter from an explicit directive, `RUST_LOG`, or `info`.
pub fn env_filter(log_level: Option<&str>) -> EnvFilter {
    if let Some(level) = log_level {
        EnvFilter::new(level)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Install the global subscriber.
pub fn init_tracing(format: LogFormat, log_level: Option<&str>) -> Result<()> {
    let builder = fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(log_level))
        .with_target(false);

    match format {
        LogFormat::Text => {
            tracing::subscriber::set_global_default(builder.compact().finish())
                .context("failed to set tracing subscriber")?;
        }
        LogFormat::Json => {
            tracing::subscriber::set_global_default(builder.json().finish())
                .context("failed to set tracing subscriber")?;
        }
    }
    Ok(())
}
