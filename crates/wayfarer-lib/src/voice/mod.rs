//! Spoken turn instructions derived from a computed path.

pub mod compact;
pub mod config;
pub mod constants;
pub mod hint;
pub mod synthesizer;

pub use compact::compact;
pub use config::VoiceHintConfig;
pub use constants::is_u_turn;
pub use hint::{Command, VoiceHint, WaySegment};
pub use synthesizer::VoiceHintSynthesizer;
