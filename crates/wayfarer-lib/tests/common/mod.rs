//! Shared fixture helpers for integration tests.

use std::fs;
use std::path::PathBuf;

use wayfarer_lib::VoiceHint;

/// Path to the fixtures directory shared with the CLI tests.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Load a JSON array of junction descriptors from the fixtures directory.
#[allow(dead_code)]
pub fn load_descriptors(name: &str) -> Vec<VoiceHint> {
    let raw = fs::read_to_string(fixtures_dir().join(name)).expect("fixture readable");
    serde_json::from_str(&raw).expect("fixture parses")
}
