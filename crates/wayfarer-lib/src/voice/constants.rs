//! Angle and distance thresholds used across hint synthesis and compaction.
//!
//! These values are empirically tuned; changing them changes which junctions
//! are announced.

/// Junctions closer than this (in length units) are folded into one hint.
pub const INTERNAL_CATCHING_RANGE: f64 = 2.0;

/// Turn magnitude (degrees) below which accumulated angles count as straight
/// during compaction.
pub const SIGNIFICANT_ANGLE: f64 = 22.5;

/// Turns within this many degrees of the chosen route are too small to refine
/// into keep-left/keep-right and separate link-road triggers.
pub const MINOR_ANGLE: f64 = 5.0;

/// An alternative this much straighter than the chosen turn forces a hint.
pub const STRAIGHTER_ALTERNATIVE_DISCREPANCY: f64 = 20.0;

/// Alternatives below this cost factor count when looking for a straighter option.
pub const LOW_COST_FACTOR: f64 = 20.0;

/// Alternatives turning this much further than the chosen way are ignored as candidates.
pub const CANDIDATE_DIVERGENCE: f64 = 80.0;

/// Width of the keep-left/keep-right window next to the chosen angle.
pub const KEEP_WINDOW: f64 = 45.0;

/// Roundabout exits are only counted for alternatives pointing forward.
pub const FORWARD_EXIT_ANGLE: f64 = 120.0;

/// Lower bound of the magnitude window treated as a full U-turn.
pub const U_TURN_MIN_ANGLE: f64 = 179.0;

/// Upper bound of the magnitude window treated as a full U-turn.
pub const U_TURN_MAX_ANGLE: f64 = 180.0;

/// Returns `true` when `angle` turns back onto the way it came from.
pub fn is_u_turn(angle: f64) -> bool {
    (U_TURN_MIN_ANGLE..=U_TURN_MAX_ANGLE).contains(&angle.abs())
}
