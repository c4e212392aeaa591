//! Hints command handler: synthesize and compact spoken instructions.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use wayfarer_lib::{
    render_instructions, render_instructions_text, VoiceHint, VoiceHintConfig,
    VoiceHintSynthesizer,
};

use crate::output::{render, OutputFormat};

/// Arguments for the hints command.
#[derive(Debug, Clone, Args)]
pub struct HintsCommandArgs {
    /// JSON array of junction descriptors, destination first.
    #[arg(long)]
    pub input: PathBuf,
    /// JSON configuration file; flags below override its values.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Announce roundabouts by angle instead of exit number.
    #[arg(long)]
    pub implicit_roundabouts: bool,
    /// Hints closer than this are merged during compaction.
    #[arg(long)]
    pub catching_range: Option<f64>,
    /// Nearly straight hints closer than this are merged into their successor.
    #[arg(long)]
    pub min_range: Option<f64>,
    /// Skip the compaction pass.
    #[arg(long)]
    pub no_compact: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl HintsCommandArgs {
    /// Resolve the effective configuration from file and flags.
    pub fn resolve_config(&self) -> Result<VoiceHintConfig> {
        let mut config = match &self.config {
            Some(path) => VoiceHintConfig::from_path(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => VoiceHintConfig::default(),
        };
        if self.implicit_roundabouts {
            config.explicit_roundabouts = false;
        }
        if let Some(range) = self.catching_range {
            config.catching_range = range;
        }
        if let Some(range) = self.min_range {
            config.min_range = range;
        }
        config.validate().context("invalid voice hint configuration")?;
        Ok(config)
    }
}

/// Run the hints command and return the rendered output.
pub fn handle_hints(args: &HintsCommandArgs) -> Result<String> {
    let config = args.resolve_config()?;
    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let descriptors: Vec<VoiceHint> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse descriptors from {}", args.input.display()))?;
    let descriptor_count = descriptors.len();

    let synthesizer = VoiceHintSynthesizer::new(config);
    let hints = if args.no_compact {
        synthesizer.synthesize(descriptors)
    } else {
        synthesizer.instructions(descriptors)
    };
    let instructions = render_instructions(&hints);
    info!(
        descriptors = descriptor_count,
        instructions = instructions.len(),
        "voice hints ready"
    );

    render(args.format, &instructions, |list| {
        render_instructions_text(list)
    })
}
