//! The flight session: one craft, one world, one mission, one camera.
//!
//! All scene state lives here and is passed by reference into each
//! component's update call. Nothing in the simulation reads globals.

use camera::CameraController;
use engine_core::Transform;
use input::FlightInput;
use physics::{Craft, CraftSnapshot};
use world::WorldGeometry;

use crate::config::FlightConfig;
use crate::events::FlightEvent;
use crate::mission::Mission;
use crate::state::{DeathSequence, MissionPhase, RepairState, VictorySequence};

/// Owns the scene for one mission attempt. Step with `update(dt)` once per
/// frame; drain events afterwards.
pub struct FlightSession {
    pub config: FlightConfig,
    pub craft: Craft,
    pub world: WorldGeometry,
    pub camera: CameraController,
    pub input: FlightInput,
    pub phase: MissionPhase,
    pub(crate) mission: Box<dyn Mission>,
    pub(crate) spawn: Transform,
    pub(crate) countdown_timer: f32,
    pub(crate) death: Option<DeathSequence>,
    pub(crate) victory: Option<VictorySequence>,
    pub(crate) repair: RepairState,
    pub(crate) events: Vec<FlightEvent>,
}

impl FlightSession {
    pub fn new(
        config: FlightConfig,
        world: WorldGeometry,
        mission: Box<dyn Mission>,
        spawn: Transform,
    ) -> Self {
        let mut craft = Craft::new(0, spawn, config.max_health);
        craft.controls_locked = true;
        let countdown = config.countdown;
        Self {
            craft,
            world,
            camera: CameraController::new(spawn.position),
            input: FlightInput::new(),
            phase: MissionPhase::Countdown,
            mission,
            spawn,
            countdown_timer: countdown,
            death: None,
            victory: None,
            repair: RepairState::default(),
            events: Vec::new(),
            config,
        }
    }

    /// Respawn the craft and return to countdown. Used from any terminal
    /// phase on restart input.
    pub fn reset(&mut self) {
        self.craft.reset(self.spawn);
        self.craft.controls_locked = true;
        self.countdown_timer = self.config.countdown;
        self.death = None;
        self.victory = None;
        self.repair = RepairState::default();
        self.mission.reset();
        self.camera.reset(self.spawn.position);
        self.set_phase(MissionPhase::Countdown);
    }

    /// Read-only craft state for HUD/particle/audio collaborators.
    pub fn snapshot(&self) -> CraftSnapshot {
        self.craft.snapshot()
    }

    /// Take this frame's accumulated events.
    pub fn drain_events(&mut self) -> Vec<FlightEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn set_phase(&mut self, phase: MissionPhase) {
        if self.phase == phase {
            return;
        }
        log::info!("phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
        self.events.push(FlightEvent::PhaseChanged(phase));
    }

    pub(crate) fn push_event(&mut self, event: FlightEvent) {
        self.events.push(event);
    }
}
