//! Output formatting for command results.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

/// Format of the data written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Render `value` as JSON, or with `text` otherwise.
pub fn render<T, F>(format: OutputFormat, value: &T, text: F) -> Result<String>
where
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Text => Ok(text(value)),
        OutputFormat::Json => {
            let mut rendered =
                serde_json::to_string_pretty(value).context("failed to serialize output")?;
            rendered.push('\n');
            Ok(rendered)
        }
    }
}
