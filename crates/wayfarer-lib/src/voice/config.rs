//! Voice hint configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Tunables for hint synthesis and compaction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceHintConfig {
    /// Announce roundabouts by exit number instead of by angle.
    pub explicit_roundabouts: bool,
    /// Hints closer than this are candidates for merging during compaction.
    pub catching_range: f64,
    /// Nearly straight hints closer than this are merged into their successor.
    pub min_range: f64,
}

impl Default for VoiceHintConfig {
    fn default() -> Self {
        Self {
            explicit_roundabouts: true,
            catching_range: 40.0,
            min_range: 0.0,
        }
    }
}

impl VoiceHintConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configured ranges.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("catching_range", self.catching_range),
            ("min_range", self.min_range),
        ] {
            if !value.is_finite() {
                return Err(Error::InvalidConfig {
                    message: format!("{name} must be finite"),
                });
            }
            if value < 0.0 {
                return Err(Error::InvalidConfig {
                    message: format!("{name} must not be negative, got {value}"),
                });
            }
        }
        Ok(())
    }
}
