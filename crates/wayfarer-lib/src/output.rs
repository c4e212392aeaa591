use std::fmt::Write;

use serde::Serialize;

use crate::graph::NodeId;
use crate::search::SearchResult;
use crate::voice::{Command, VoiceHint};

/// One spoken instruction ready for presentation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Instruction {
    pub index: usize,
    pub command: Command,
    /// Short export code such as `TL` or `RNLB`.
    pub code: &'static str,
    pub message: String,
    pub angle: f64,
    pub distance_to_next: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roundabout_exit: Option<i32>,
}

/// Convert resolved hints into presentation records. Hints without a command
/// are skipped.
pub fn render_instructions(hints: &[VoiceHint]) -> Vec<Instruction> {
    hints
        .iter()
        .filter_map(|hint| {
            let command = hint.command?;
            Some((hint, command))
        })
        .enumerate()
        .map(|(index, (hint, command))| Instruction {
            index,
            command,
            code: hint.command_code().unwrap_or(command.code()),
            message: hint.message().unwrap_or_default(),
            angle: hint.angle,
            distance_to_next: hint.distance_to_next,
            roundabout_exit: hint.is_roundabout().then_some(hint.roundabout_exit),
        })
        .collect()
}

/// Plain-text listing of instructions, one per line.
pub fn render_instructions_text(instructions: &[Instruction]) -> String {
    let mut buffer = String::new();
    if instructions.is_empty() {
        let _ = writeln!(buffer, "No instructions: follow the road to the destination.");
        return buffer;
    }
    for instruction in instructions {
        let _ = writeln!(
            buffer,
            "{:>3}: {:<5} {} (angle {:.0}, then {:.0})",
            instruction.index,
            instruction.code,
            instruction.message,
            instruction.angle,
            instruction.distance_to_next
        );
    }
    buffer
}

/// Serializable summary of a least-cost route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteSummary {
    pub start: NodeId,
    pub goal: NodeId,
    pub hops: usize,
    pub cost: i32,
    pub expanded: usize,
    pub peak_frontier: usize,
    pub path: Vec<NodeId>,
}

impl RouteSummary {
    pub fn from_result(result: &SearchResult) -> Self {
        Self {
            start: result.path.first().copied().unwrap_or_default(),
            goal: result.path.last().copied().unwrap_or_default(),
            hops: result.hop_count(),
            cost: result.cost,
            expanded: result.expanded,
            peak_frontier: result.peak_frontier,
            path: result.path.clone(),
        }
    }

    pub fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} hops, cost {})",
            self.start, self.goal, self.hops, self.cost
        );
        let joined = self
            .path
            .iter()
            .map(NodeId::to_string)
            .collect::<Vec<_>>()
            .join(" -> ");
        let _ = writeln!(buffer, "{joined}");
        let _ = writeln!(
            buffer,
            "expanded {} nodes, peak frontier {}",
            self.expanded, self.peak_frontier
        );
        buffer
    }
}
