//! Mission phases and the per-phase sub-state records.

use glam::Vec3;

/// Mission phase. One active at a time; transitions are edge-triggered by
/// state predicates evaluated every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionPhase {
    Countdown,
    Active,
    RaceFailed,
    ShipDeath,
    RaceVictory,
    MissionComplete,
    Paused,
}

/// Death sub-sequence: a gravity-only fall until ground contact, then a
/// landed-death wait for restart input.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeathSequence {
    pub landed: bool,
}

/// Victory sub-sequence. Gameplay keeps running through the grace window;
/// at expiry the craft freezes at the captured position and the camera is
/// handed to Orbit.
#[derive(Debug, Clone, Copy)]
pub struct VictorySequence {
    pub captured_position: Vec3,
    pub grace_timer: f32,
    pub frozen: bool,
}

impl VictorySequence {
    pub fn new(captured_position: Vec3, grace: f32) -> Self {
        Self {
            captured_position,
            grace_timer: grace,
            frozen: false,
        }
    }
}

/// Pad-repair stillness timer. Resets on any motion or loss of pad contact.
#[derive(Debug, Clone, Copy, Default)]
pub struct RepairState {
    pub timer: f32,
}
