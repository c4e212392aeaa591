//! Junction descriptors and the command vocabulary of spoken instructions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Spoken instruction attached to a hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Straight,
    SlightLeft,
    Left,
    SharpLeft,
    KeepLeft,
    UTurn,
    SlightRight,
    Right,
    SharpRight,
    KeepRight,
    RoundaboutExit,
    /// Mandatory stop such as a gate. Never reclassified.
    Barrier,
}

impl Command {
    /// Classify a signed turn angle (negative = left).
    ///
    /// A non-zero `roundabout_exit` always yields [`Command::RoundaboutExit`].
    pub fn classify(angle: f64, roundabout_exit: i32) -> Self {
        if roundabout_exit != 0 {
            return Command::RoundaboutExit;
        }
        if angle < -159.0 {
            Command::UTurn
        } else if angle < -135.0 {
            Command::SharpLeft
        } else if angle < -45.0 {
            Command::Left
        } else if angle < -15.0 {
            Command::SlightLeft
        } else if angle < 15.0 {
            Command::Straight
        } else if angle < 45.0 {
            Command::SlightRight
        } else if angle < 135.0 {
            Command::Right
        } else if angle < 159.0 {
            Command::SharpRight
        } else {
            Command::UTurn
        }
    }

    /// Short code used in track exports.
    pub fn code(self) -> &'static str {
        match self {
            Command::Straight => "C",
            Command::SlightLeft => "TSLL",
            Command::Left => "TL",
            Command::SharpLeft => "TSHL",
            Command::KeepLeft => "KL",
            Command::UTurn => "TU",
            Command::SlightRight => "TSLR",
            Command::Right => "TR",
            Command::SharpRight => "TSHR",
            Command::KeepRight => "KR",
            Command::RoundaboutExit => "RNDB",
            Command::Barrier => "BL",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Geometry and classification of one way leaving (or entering) a junction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaySegment {
    /// Signed turn angle in degrees, negative to the left.
    pub turn_angle: f64,
    /// Length of the segment up to the next junction.
    pub length: f64,
    /// Road priority class; higher is more significant.
    pub priority: i32,
    pub is_link: bool,
    pub is_roundabout: bool,
    /// Oneway that may not be entered from this junction.
    pub is_wrong_way_oneway: bool,
    pub is_legal_for_motor_traffic: bool,
    pub cost_factor: f64,
}

impl Default for WaySegment {
    fn default() -> Self {
        Self {
            turn_angle: 0.0,
            length: 0.0,
            priority: 0,
            is_link: false,
            is_roundabout: false,
            is_wrong_way_oneway: false,
            is_legal_for_motor_traffic: true,
            cost_factor: 1.0,
        }
    }
}

impl WaySegment {
    /// Whether a rejected way at a roundabout junction marks a countable exit.
    pub(crate) fn is_roundabout_exit(&self) -> bool {
        !self.is_wrong_way_oneway
            && self.is_legal_for_motor_traffic
            && self.turn_angle.abs() < super::constants::FORWARD_EXIT_ANGLE
    }
}

/// Junction descriptor on a computed path, enriched in place with the
/// resolved instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceHint {
    /// Way taken when leaving the junction.
    pub chosen: WaySegment,
    /// Way the junction was approached on.
    #[serde(default)]
    pub previous: WaySegment,
    /// Ways rejected at this junction.
    #[serde(default)]
    pub alternatives: Vec<WaySegment>,

    /// Accumulated turn angle of the instruction.
    #[serde(default)]
    pub angle: f64,
    #[serde(default)]
    pub distance_to_next: f64,
    /// `None` until resolved.
    #[serde(default)]
    pub command: Option<Command>,
    /// Ordinal of the roundabout exit, negative when exiting to the left.
    #[serde(default)]
    pub roundabout_exit: i32,
    /// Only kept when the junction turns out to be a real turn.
    #[serde(default)]
    pub needs_confirmation: bool,

    #[serde(skip)]
    pub(crate) angle_consumed: bool,
}

impl VoiceHint {
    pub fn new(chosen: WaySegment, previous: WaySegment, alternatives: Vec<WaySegment>) -> Self {
        Self {
            chosen,
            previous,
            alternatives,
            angle: 0.0,
            distance_to_next: 0.0,
            command: None,
            roundabout_exit: 0,
            needs_confirmation: false,
            angle_consumed: false,
        }
    }

    /// Descriptor for a mandatory stop. Passes synthesis unchanged.
    pub fn barrier(chosen: WaySegment, previous: WaySegment) -> Self {
        Self {
            command: Some(Command::Barrier),
            ..Self::new(chosen, previous, Vec::new())
        }
    }

    pub fn is_barrier(&self) -> bool {
        self.command == Some(Command::Barrier)
    }

    pub fn is_roundabout(&self) -> bool {
        self.roundabout_exit != 0
    }

    /// Conditionally triggered hint whose angle turned out to be straight.
    pub(crate) fn is_unconfirmed_straight(&self) -> bool {
        self.needs_confirmation && self.command == Some(Command::Straight)
    }

    /// Some rejected way ranks above the chosen one.
    pub fn has_higher_ranked_alternative(&self) -> bool {
        let best = self
            .alternatives
            .iter()
            .map(|way| way.priority)
            .fold(0, i32::max);
        self.chosen.priority < best
    }

    /// Recompute `command` from `angle` and `roundabout_exit`.
    ///
    /// Barriers are left untouched. A keep-left/keep-right decision survives
    /// while the angle still reads as straight or a slight turn to that side.
    pub fn resolve_command(&mut self) {
        let resolved = Command::classify(self.angle, self.roundabout_exit);
        self.command = Some(match (self.command, resolved) {
            (Some(Command::Barrier), _) => Command::Barrier,
            (Some(Command::KeepLeft), Command::Straight | Command::SlightLeft) => Command::KeepLeft,
            (Some(Command::KeepRight), Command::Straight | Command::SlightRight) => {
                Command::KeepRight
            }
            _ => resolved,
        });
    }

    /// Short instruction code, distinguishing left-hand roundabouts.
    pub fn command_code(&self) -> Option<&'static str> {
        match self.command? {
            Command::RoundaboutExit if self.roundabout_exit < 0 => Some("RNLB"),
            command => Some(command.code()),
        }
    }

    /// Human readable instruction text.
    pub fn message(&self) -> Option<String> {
        let text = match self.command? {
            Command::Straight => "continue straight".to_string(),
            Command::SlightLeft => "bear left".to_string(),
            Command::Left => "turn left".to_string(),
            Command::SharpLeft => "turn sharp left".to_string(),
            Command::KeepLeft => "keep left".to_string(),
            Command::UTurn => "make a u-turn".to_string(),
            Command::SlightRight => "bear right".to_string(),
            Command::Right => "turn right".to_string(),
            Command::SharpRight => "turn sharp right".to_string(),
            Command::KeepRight => "keep right".to_string(),
            Command::RoundaboutExit => {
                format!("take exit {}", self.roundabout_exit.unsigned_abs())
            }
            Command::Barrier => "pass the barrier".to_string(),
        };
        Some(text)
    }
}
