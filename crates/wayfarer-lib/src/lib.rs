//! Wayfarer library entry points.
//!
//! This crate exposes the bin-merging priority queue used as search frontier,
//! a least-cost path search over integer-cost graphs, and the voice hint
//! synthesizer that turns a computed path into spoken turn instructions.
//! Higher-level consumers (the CLI) should only depend on the items exported
//! here.

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod output;
pub mod queue;
pub mod search;
pub mod voice;

#[cfg(test)]
mod test_helpers;

pub use error::{Error, Result};
pub use graph::{Edge, Graph, Hop, NodeId};
pub use output::{render_instructions, render_instructions_text, Instruction, RouteSummary};
pub use queue::PriorityQueue;
pub use search::{find_least_cost_path, plan_route, SearchResult};
pub use voice::{
    compact, Command, VoiceHint, VoiceHintConfig, VoiceHintSynthesizer, WaySegment,
};
