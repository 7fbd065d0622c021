//! Mission interface: the session asks an external mission object for
//! completion/failure predicates, an optional focus target, and which pads
//! qualify for repair.

use glam::Vec3;
use physics::CraftSnapshot;
use world::PadId;

/// How a mission ended this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionOutcome {
    RaceVictory,
    MissionComplete,
    RaceFailed,
}

/// A mission supplies its predicates; the session owns everything else.
pub trait Mission {
    /// Evaluate the mission against this frame's craft state. Called once
    /// per active frame with the elapsed time since the last call.
    fn check(&mut self, craft: &CraftSnapshot, on_pad: Option<PadId>, dt: f32)
        -> Option<MissionOutcome>;

    /// Point of interest the Focus camera should face, if any.
    fn focus_target(&self) -> Option<Vec3> {
        None
    }

    /// Whether the given pad repairs the craft. Defaults to all pads.
    fn repair_pad(&self, _pad: PadId) -> bool {
        true
    }

    /// Back to the mission's initial state on session reset.
    fn reset(&mut self) {}
}

/// Free flight: never completes, never fails.
#[derive(Debug, Default)]
pub struct FreeFlight;

impl Mission for FreeFlight {
    fn check(
        &mut self,
        _craft: &CraftSnapshot,
        _on_pad: Option<PadId>,
        _dt: f32,
    ) -> Option<MissionOutcome> {
        None
    }
}

/// Land on a target pad before a time limit runs out. Victory requires
/// settling on the pad: grounded with near-zero speed.
#[derive(Debug)]
pub struct PadLanding {
    target: PadId,
    time_limit: Option<f32>,
    elapsed: f32,
    /// Where the target pad is, for the Focus camera.
    target_position: Option<Vec3>,
    settle_speed: f32,
}

impl PadLanding {
    pub fn new(target: PadId, time_limit: Option<f32>) -> Self {
        Self {
            target,
            time_limit,
            elapsed: 0.0,
            target_position: None,
            settle_speed: 0.05,
        }
    }

    /// Give the Focus camera a point to face.
    pub fn with_target_position(mut self, position: Vec3) -> Self {
        self.target_position = Some(position);
        self
    }
}

impl Mission for PadLanding {
    fn check(
        &mut self,
        craft: &CraftSnapshot,
        on_pad: Option<PadId>,
        dt: f32,
    ) -> Option<MissionOutcome> {
        self.elapsed += dt;
        if craft.grounded && on_pad == Some(self.target) && craft.velocity.length() < self.settle_speed
        {
            return Some(MissionOutcome::MissionComplete);
        }
        if let Some(limit) = self.time_limit {
            if self.elapsed >= limit {
                return Some(MissionOutcome::RaceFailed);
            }
        }
        None
    }

    fn focus_target(&self) -> Option<Vec3> {
        self.target_position
    }

    fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_core::Transform;
    use physics::Craft;

    fn settled_snapshot(grounded: bool) -> CraftSnapshot {
        let mut craft = Craft::new(0, Transform::default(), 100.0);
        craft.grounded = grounded;
        craft.snapshot()
    }

    /// Settling on the target pad completes; other pads do not.
    #[test]
    fn pad_landing_completes_on_target() {
        let mut mission = PadLanding::new(2, None);
        let snap = settled_snapshot(true);
        assert_eq!(mission.check(&snap, Some(1), 0.016), None);
        assert_eq!(
            mission.check(&snap, Some(2), 0.016),
            Some(MissionOutcome::MissionComplete)
        );
    }

    /// The time limit fails the mission, and reset clears the clock.
    #[test]
    fn pad_landing_times_out() {
        let mut mission = PadLanding::new(0, Some(1.0));
        let snap = settled_snapshot(false);
        assert_eq!(mission.check(&snap, None, 0.5), None);
        assert_eq!(
            mission.check(&snap, None, 0.6),
            Some(MissionOutcome::RaceFailed)
        );
        mission.reset();
        assert_eq!(mission.check(&snap, None, 0.5), None);
    }
}
