//! Turns a backtracked path into a short list of spoken instructions.
//!
//! The path arrives as one [`VoiceHint`] per segment in reverse travel order
//! (destination first). A reverse scan picks the junctions worth announcing,
//! a forward replay drops unconfirmed ones and merges close neighbours, and
//! [`compact`](super::compact::compact) can then tidy the forward list.

use tracing::debug;

use super::compact::compact;
use super::config::VoiceHintConfig;
use super::constants::{
    is_u_turn, CANDIDATE_DIVERGENCE, INTERNAL_CATCHING_RANGE, KEEP_WINDOW, LOW_COST_FACTOR,
    MINOR_ANGLE, STRAIGHTER_ALTERNATIVE_DISCREPANCY,
};
use super::hint::{Command, VoiceHint};

/// Synthesizes instructions for a single routing query.
#[derive(Debug, Clone, Default)]
pub struct VoiceHintSynthesizer {
    config: VoiceHintConfig,
}

impl VoiceHintSynthesizer {
    pub fn new(config: VoiceHintConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VoiceHintConfig {
        &self.config
    }

    /// Filter `inputs` (reverse travel order) down to the hints that warrant an
    /// instruction, returned in travel order with resolved commands, merged
    /// angles and distances to the next hint.
    pub fn synthesize(&self, inputs: Vec<VoiceHint>) -> Vec<VoiceHint> {
        let mut inputs = inputs;
        for hint in inputs.iter_mut() {
            hint.angle_consumed = false;
        }

        let candidates = collect_candidates(&mut inputs);
        let kept = replay_forward(&mut inputs, &candidates, self.config.explicit_roundabouts);
        debug!(
            descriptors = inputs.len(),
            candidates = candidates.len(),
            kept = kept.len(),
            "synthesized voice hints"
        );

        let mut slots: Vec<Option<VoiceHint>> = inputs.into_iter().map(Some).collect();
        kept.into_iter()
            .filter_map(|index| slots[index].take())
            .collect()
    }

    /// Compact forward-ordered hints using the configured ranges.
    pub fn compact(&self, hints: Vec<VoiceHint>) -> Vec<VoiceHint> {
        compact(hints, self.config.catching_range, self.config.min_range)
    }

    /// Run [`synthesize`](Self::synthesize) followed by [`compact`](Self::compact).
    pub fn instructions(&self, inputs: Vec<VoiceHint>) -> Vec<VoiceHint> {
        let hints = self.synthesize(inputs);
        self.compact(hints)
    }
}

/// Sum the turn angles of `inputs[offset]` and the descriptors following it in
/// travel order (lower indices) until the internal catching range is covered,
/// marking each as consumed. Stops at consumed descriptors and barriers.
fn fold_nearby_angles(inputs: &mut [VoiceHint], offset: usize) -> f64 {
    let mut distance = 0.0;
    let mut angle = 0.0;
    let mut index = offset;
    while distance < INTERNAL_CATCHING_RANGE {
        let hint = &mut inputs[index];
        if hint.angle_consumed || hint.is_barrier() {
            break;
        }
        angle += hint.chosen.turn_angle;
        distance += hint.chosen.length;
        hint.angle_consumed = true;
        if index == 0 {
            break;
        }
        index -= 1;
    }
    angle
}

/// What the rejected ways at a junction say about the chosen turn.
struct AlternativeSurvey {
    /// Highest priority of all alternatives, ignoring highway-to-link exits.
    max_priority_all: i32,
    /// Highest priority among comparable alternatives.
    max_priority_candidates: i32,
    max_candidate_angle: f64,
    min_candidate_angle: f64,
    /// Smallest absolute angle among cheap alternatives.
    min_abs_cheap_angle: f64,
    has_link: bool,
}

impl AlternativeSurvey {
    fn of(hint: &VoiceHint, turn: f64, min_priority: i32) -> Self {
        let mut survey = Self {
            max_priority_all: -1,
            max_priority_candidates: -1,
            max_candidate_angle: -180.0,
            min_candidate_angle: 180.0,
            min_abs_cheap_angle: 180.0,
            has_link: false,
        };

        for way in &hint.alternatives {
            let angle = way.turn_angle;
            if way.is_link {
                survey.has_link = true;
            }
            let highway_to_link = !hint.previous.is_link && way.is_link;
            if way.priority > survey.max_priority_all && !highway_to_link {
                survey.max_priority_all = way.priority;
            }
            if way.cost_factor < LOW_COST_FACTOR && angle.abs() < survey.min_abs_cheap_angle {
                survey.min_abs_cheap_angle = angle.abs();
            }

            if way.priority < min_priority
                || way.is_wrong_way_oneway
                || angle.abs() - turn.abs() > CANDIDATE_DIVERGENCE
            {
                continue;
            }
            survey.max_priority_candidates = survey.max_priority_candidates.max(way.priority);
            survey.max_candidate_angle = survey.max_candidate_angle.max(angle);
            survey.min_candidate_angle = survey.min_candidate_angle.min(angle);
        }

        survey
    }
}

/// Reverse scan. Returns indices into `inputs` of the candidate hints, in
/// reverse travel order.
fn collect_candidates(inputs: &mut [VoiceHint]) -> Vec<usize> {
    let mut results: Vec<usize> = Vec::new();
    let mut distance = 0.0;
    let mut roundabout_angle = 0.0;
    let mut roundabout_exit: i32 = 0;

    for index in 0..inputs.len() {
        if inputs[index].is_barrier() {
            results.push(index);
            continue;
        }

        let hint = &inputs[index];
        let turn = hint.chosen.turn_angle;
        distance += hint.chosen.length;
        let current_priority = hint.chosen.priority;
        let min_priority = hint.previous.priority.min(current_priority);
        let link_to_highway = hint.previous.is_link && !hint.chosen.is_link;
        let highway_to_link = !hint.previous.is_link && hint.chosen.is_link;

        if hint.previous.is_roundabout {
            let is_exit =
                roundabout_exit == 0 || hint.alternatives.iter().any(|way| way.is_roundabout_exit());
            roundabout_angle += fold_nearby_angles(inputs, index);
            if is_exit {
                roundabout_exit += 1;
            }
            continue;
        }

        if roundabout_exit > 0 {
            roundabout_angle += fold_nearby_angles(inputs, index);
            let hint = &mut inputs[index];
            hint.angle = roundabout_angle;
            hint.distance_to_next = distance;
            hint.roundabout_exit = if turn < 0.0 {
                -roundabout_exit
            } else {
                roundabout_exit
            };
            results.push(index);
            distance = 0.0;
            roundabout_angle = 0.0;
            roundabout_exit = 0;
            continue;
        }

        let has_alternatives = !hint.alternatives.is_empty();
        let survey = AlternativeSurvey::of(hint, turn, min_priority);
        let has_straighter_alternative =
            turn.abs() - survey.min_abs_cheap_angle > STRAIGHTER_ALTERNATIVE_DISCREPANCY;

        let unconditional = is_u_turn(turn)
            || (has_alternatives
                && (has_straighter_alternative
                    || (survey.max_priority_all > min_priority && !link_to_highway)
                    || survey.max_priority_candidates > current_priority
                    || (!highway_to_link && survey.has_link && turn.abs() > MINOR_ANGLE)
                    || (highway_to_link && !survey.has_link && turn.abs() < MINOR_ANGLE)));
        let conditional = has_alternatives && survey.max_priority_candidates >= min_priority;

        if unconditional || conditional {
            let hint = &mut inputs[index];
            hint.angle = turn;
            hint.resolve_command();

            if turn.abs() > MINOR_ANGLE {
                let max = survey.max_candidate_angle;
                let min = survey.min_candidate_angle;
                if max < turn && max > turn - KEEP_WINDOW - turn.max(0.0) {
                    hint.command = Some(Command::KeepRight);
                }
                if min > turn && min < turn + KEEP_WINDOW - turn.min(0.0) {
                    hint.command = Some(Command::KeepLeft);
                }
            }
            hint.needs_confirmation = !unconditional && hint.command == Some(Command::Straight);

            let folded = fold_nearby_angles(inputs, index);
            let hint = &mut inputs[index];
            hint.angle = folded;
            hint.distance_to_next = distance;
            distance = 0.0;
            results.push(index);
        }

        if distance < INTERNAL_CATCHING_RANGE {
            if let Some(&last) = results.last() {
                if !inputs[last].is_barrier() {
                    let folded = fold_nearby_angles(inputs, index);
                    inputs[last].angle += folded;
                }
            }
        }
    }

    debug!(candidates = results.len(), "collected hint candidates");
    results
}

/// Forward replay over the candidates. Returns indices into `inputs` of the
/// kept hints in travel order.
fn replay_forward(
    inputs: &mut [VoiceHint],
    candidates: &[usize],
    explicit_roundabouts: bool,
) -> Vec<usize> {
    let mut kept: Vec<usize> = Vec::with_capacity(candidates.len());
    let mut i = candidates.len();

    while i > 0 {
        i -= 1;
        let mut carrier = candidates[i];

        if inputs[carrier].is_barrier() {
            kept.push(carrier);
            continue;
        }
        if inputs[carrier].command.is_none() {
            inputs[carrier].resolve_command();
        }

        if inputs[carrier].is_unconfirmed_straight() {
            if let Some(&last) = kept.last() {
                inputs[last].distance_to_next += inputs[carrier].distance_to_next;
            }
            continue;
        }

        // Absorb hints closer than the internal catching range.
        let mut distance = inputs[carrier].distance_to_next;
        while distance < INTERNAL_CATCHING_RANGE && i > 0 {
            let next = candidates[i - 1];
            if inputs[next].is_barrier() {
                break;
            }
            i -= 1;

            if inputs[next].is_roundabout() {
                // Roundabout cues are never swallowed: the roundabout hint
                // takes over the merged angle.
                inputs[next].angle += inputs[carrier].angle;
                if let Some(&last) = kept.last() {
                    inputs[last].distance_to_next += inputs[carrier].distance_to_next;
                }
                carrier = next;
                break;
            }

            distance = inputs[next].distance_to_next;
            inputs[carrier].distance_to_next += distance;
            let angle = inputs[next].angle;
            inputs[carrier].angle += angle;
        }

        let hint = &mut inputs[carrier];
        if !explicit_roundabouts {
            hint.roundabout_exit = 0;
        }
        hint.resolve_command();
        kept.push(carrier);
    }

    kept
}
