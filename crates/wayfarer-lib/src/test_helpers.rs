// Test-only helpers for `wayfarer-lib` unit tests
#![allow(dead_code)]
use crate::voice::{Command, VoiceHint, WaySegment};

/// Builder for `WaySegment` values with road defaults (priority 0, legal,
/// not a link, cost factor 1).
pub struct SegmentBuilder {
    segment: WaySegment,
}

impl SegmentBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            segment: WaySegment::default(),
        }
    }

    pub fn angle(mut self, angle: f64) -> Self {
        self.segment.turn_angle = angle;
        self
    }

    pub fn length(mut self, length: f64) -> Self {
        self.segment.length = length;
        self
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.segment.priority = priority;
        self
    }

    pub fn link(mut self) -> Self {
        self.segment.is_link = true;
        self
    }

    pub fn roundabout(mut self) -> Self {
        self.segment.is_roundabout = true;
        self
    }

    pub fn wrong_way(mut self) -> Self {
        self.segment.is_wrong_way_oneway = true;
        self
    }

    pub fn no_motor_traffic(mut self) -> Self {
        self.segment.is_legal_for_motor_traffic = false;
        self
    }

    pub fn cost_factor(mut self, factor: f64) -> Self {
        self.segment.cost_factor = factor;
        self
    }

    pub fn build(self) -> WaySegment {
        self.segment
    }
}

impl Default for SegmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Shorthand for a rejected way at `angle`.
pub fn alternative(angle: f64) -> SegmentBuilder {
    SegmentBuilder::new().angle(angle)
}

/// Builder to create `VoiceHint` descriptors in tests.
pub struct HintBuilder {
    hint: VoiceHint,
}

impl HintBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            hint: VoiceHint::new(WaySegment::default(), WaySegment::default(), Vec::new()),
        }
    }

    /// Turn angle of the chosen way.
    pub fn turn(mut self, angle: f64) -> Self {
        self.hint.chosen.turn_angle = angle;
        self
    }

    /// Length of the chosen way.
    pub fn length(mut self, length: f64) -> Self {
        self.hint.chosen.length = length;
        self
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.hint.chosen.priority = priority;
        self
    }

    pub fn previous_priority(mut self, priority: i32) -> Self {
        self.hint.previous.priority = priority;
        self
    }

    pub fn link(mut self) -> Self {
        self.hint.chosen.is_link = true;
        self
    }

    pub fn previous_link(mut self) -> Self {
        self.hint.previous.is_link = true;
        self
    }

    /// Approached on a roundabout.
    pub fn from_roundabout(mut self) -> Self {
        self.hint.previous.is_roundabout = true;
        self
    }

    /// Leaves on a roundabout.
    pub fn onto_roundabout(mut self) -> Self {
        self.hint.chosen.is_roundabout = true;
        self
    }

    pub fn alternative(mut self, way: WaySegment) -> Self {
        self.hint.alternatives.push(way);
        self
    }

    /// Resolved instruction angle.
    pub fn angle(mut self, angle: f64) -> Self {
        self.hint.angle = angle;
        self
    }

    pub fn distance(mut self, distance: f64) -> Self {
        self.hint.distance_to_next = distance;
        self
    }

    pub fn command(mut self, command: Command) -> Self {
        self.hint.command = Some(command);
        self
    }

    pub fn barrier(mut self) -> Self {
        self.hint.command = Some(Command::Barrier);
        self
    }

    pub fn roundabout_exit(mut self, exit: i32) -> Self {
        self.hint.roundabout_exit = exit;
        self
    }

    pub fn needs_confirmation(mut self) -> Self {
        self.hint.needs_confirmation = true;
        self
    }

    pub fn build(self) -> VoiceHint {
        self.hint
    }
}

impl Default for HintBuilder {
    fn default() -> Self {
        Self::new()
    }
}
