//! Discrete session events for audio/visual-effect collaborators.
//!
//! The session accumulates events during `update` and the owner drains them
//! once per frame. No callbacks are injected into the simulation.

use camera::CameraModeKind;
use physics::DamageCause;

use crate::state::MissionPhase;

/// One discrete thing that happened during a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightEvent {
    /// Vertical landing impact that crossed the damage threshold.
    Impact { speed: f32, hard: bool },
    /// Horizontal scrape along the ground.
    Scraped { speed: f32, hard: bool },
    /// Side collision with a structure.
    StructureHit { speed: f32 },
    /// Splashdown into water.
    Splashdown,
    /// Craft health reached zero.
    Died { cause: DamageCause },
    /// Fresh ground contact after being airborne.
    Landed,
    /// Pad repair restored the craft to full health.
    Repaired,
    /// The camera cycled or was forced to a new mode.
    CameraModeChanged(CameraModeKind),
    /// The mission phase changed.
    PhaseChanged(MissionPhase),
}
