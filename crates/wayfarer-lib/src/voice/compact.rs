//! Post-processing of forward-ordered hints: drop redundant "straight"
//! announcements and merge turns that follow each other within the catching
//! range.

use tracing::debug;

use super::constants::{is_u_turn, SIGNIFICANT_ANGLE};
use super::hint::{Command, VoiceHint};

/// Result of looking ahead from a hint closer than the catching range.
enum Lookahead {
    /// Keep the hint; `end` is the first hint not consumed.
    Keep { end: usize },
    /// Merge every hint up to and including `last` into the current one.
    Merge { last: usize, angle: f64 },
    /// Drop the hint.
    Drop,
}

/// Compact forward-ordered `hints`.
///
/// Distances of dropped hints are folded into the previously kept hint, so the
/// total distance never grows.
pub fn compact(hints: Vec<VoiceHint>, catching_range: f64, min_range: f64) -> Vec<VoiceHint> {
    let input_len = hints.len();
    let mut hints: Vec<Option<VoiceHint>> = hints.into_iter().map(Some).collect();
    let mut results: Vec<VoiceHint> = Vec::with_capacity(input_len);

    let mut index = 0;
    while index < hints.len() {
        let Some(mut hint) = hints[index].take() else {
            index += 1;
            continue;
        };

        if hint.is_barrier() {
            results.push(hint);
            index += 1;
            continue;
        }

        if hint.command == Some(Command::Straight) && !hint.chosen.is_link {
            if hint.has_higher_ranked_alternative() {
                results.push(hint);
            } else {
                fold_into_last(&mut results, hint.distance_to_next);
            }
            index += 1;
            continue;
        }

        if hint.distance_to_next >= catching_range {
            results.push(hint);
            index += 1;
            continue;
        }

        loop {
            match look_ahead(&hint, &hints, index + 1, catching_range, min_range) {
                Lookahead::Merge { last, angle } => {
                    for slot in &mut hints[index + 1..=last] {
                        if let Some(merged) = slot.take() {
                            hint.distance_to_next += merged.distance_to_next;
                        }
                    }
                    hint.angle = angle;
                    hint.resolve_command();
                    // Re-examine the merged hint against what follows it.
                    index = last;
                }
                Lookahead::Keep { end } => {
                    results.push(hint);
                    for slot in &mut hints[index + 1..end] {
                        if let Some(staged) = slot.take() {
                            results.push(staged);
                        }
                    }
                    index = end;
                    break;
                }
                Lookahead::Drop => {
                    fold_into_last(&mut results, hint.distance_to_next);
                    index += 1;
                    break;
                }
            }
        }
    }

    debug!(
        input = input_len,
        output = results.len(),
        catching_range,
        min_range,
        "compacted voice hints"
    );
    results
}

fn fold_into_last(results: &mut [VoiceHint], distance: f64) {
    if let Some(last) = results.last_mut() {
        last.distance_to_next += distance;
    }
}

fn look_ahead(
    hint: &VoiceHint,
    hints: &[Option<VoiceHint>],
    start: usize,
    catching_range: f64,
    min_range: f64,
) -> Lookahead {
    let mut distance = hint.distance_to_next;
    let mut angle = hint.angle;
    let mut cursor = start;

    while distance < catching_range && cursor < hints.len() {
        let Some(next) = hints[cursor].as_ref() else {
            break;
        };
        if next.is_barrier() {
            break;
        }

        distance += next.distance_to_next;
        angle += next.angle;

        if is_u_turn(hint.angle) || is_u_turn(next.angle) {
            break;
        }
        if angle.abs() > 180.0 - SIGNIFICANT_ANGLE
            || (angle.abs() < SIGNIFICANT_ANGLE && hint.distance_to_next < min_range)
        {
            return Lookahead::Merge {
                last: cursor,
                angle,
            };
        }
        if hint.angle.abs() > SIGNIFICANT_ANGLE {
            // Significant turn: pass the next hint through unchanged.
            cursor += 1;
            continue;
        }
        if distance > catching_range {
            break;
        }
        return Lookahead::Drop;
    }

    Lookahead::Keep { end: cursor }
}
