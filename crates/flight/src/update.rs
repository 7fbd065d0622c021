//! Per-frame session advancement: the phase state machine and the strict
//! integrate -> resolve -> damage -> transitions -> camera ordering.

use camera::{CameraContext, CameraInput, CameraModeKind};
use engine_core::time_scale;
use glam::Vec3;
use physics::{auto_level, integrate, resolve, CollisionOutcome, DamageCause, DamageEvent};
use world::PadId;

use crate::events::FlightEvent;
use crate::mission::MissionOutcome;
use crate::session::FlightSession;
use crate::state::{DeathSequence, MissionPhase, VictorySequence};

impl FlightSession {
    /// Run one frame. Terminal phases run a reduced update; otherwise the
    /// craft is integrated, corrected against the world, damaged, checked
    /// for transitions, and only then read by the camera.
    pub fn update(&mut self, dt: f32) {
        match self.phase {
            MissionPhase::Countdown => self.update_countdown(dt),
            MissionPhase::Active => self.update_active(dt),
            MissionPhase::Paused => {
                if self.input.pause() {
                    self.set_phase(MissionPhase::Active);
                }
            }
            MissionPhase::ShipDeath => self.update_death(dt),
            MissionPhase::RaceFailed => {
                if self.input.restart() {
                    self.reset();
                }
            }
            MissionPhase::RaceVictory | MissionPhase::MissionComplete => self.update_victory(dt),
        }

        if self.phase != MissionPhase::Paused {
            self.update_camera(dt);
        }
        self.input.begin_frame();
    }

    /// Physics runs through the countdown; locked controls keep the
    /// thrusters off, so an airborne spawn settles under gravity instead of
    /// hanging in place.
    fn update_countdown(&mut self, dt: f32) {
        self.handle_camera_cycle();

        let outcome = self.step_flight(dt);
        let lethal = self.apply_damage(&outcome.events);
        if self.enter_death_if_dead(lethal) {
            return;
        }

        self.countdown_timer -= dt;
        if self.countdown_timer <= 0.0 {
            self.craft.controls_locked = false;
            self.set_phase(MissionPhase::Active);
        }
    }

    fn update_active(&mut self, dt: f32) {
        if self.input.pause() {
            self.set_phase(MissionPhase::Paused);
            return;
        }
        self.handle_camera_cycle();

        let outcome = self.step_flight(dt);
        let lethal = self.apply_damage(&outcome.events);

        if self.enter_death_if_dead(lethal) {
            return;
        }

        self.update_repair(outcome.on_pad, dt);

        let snapshot = self.craft.snapshot();
        if let Some(result) = self.mission.check(&snapshot, outcome.on_pad, dt) {
            match result {
                MissionOutcome::RaceVictory => self.enter_victory(MissionPhase::RaceVictory),
                MissionOutcome::MissionComplete => {
                    self.enter_victory(MissionPhase::MissionComplete)
                }
                MissionOutcome::RaceFailed => {
                    self.craft.controls_locked = true;
                    self.set_phase(MissionPhase::RaceFailed);
                }
            }
        }
    }

    /// Gravity-only fall until ground contact, then wait for restart.
    fn update_death(&mut self, dt: f32) {
        let Some(mut death) = self.death else {
            return;
        };
        if death.landed {
            if self.input.restart() {
                self.reset();
            }
            return;
        }
        let ts = time_scale(dt);
        self.craft.velocity.y += self.config.physics.gravity * ts;
        self.craft.position += self.craft.velocity * ts;
        let outcome = resolve(&mut self.craft, &self.world, &self.config.collision, dt);
        if outcome.grounded {
            death.landed = true;
            self.craft.velocity = Vec3::ZERO;
            self.craft.angular = Vec3::ZERO;
        }
        self.death = Some(death);
    }

    /// Gameplay keeps running through the grace window, then the craft
    /// freezes at the captured position and the camera orbits it.
    fn update_victory(&mut self, dt: f32) {
        let Some(mut victory) = self.victory else {
            return;
        };
        if victory.frozen {
            if self.input.restart() {
                self.reset();
            }
            return;
        }
        let outcome = self.step_flight(dt);
        self.apply_damage(&outcome.events);
        victory.grace_timer -= dt;
        if victory.grace_timer <= 0.0 {
            victory.frozen = true;
            self.craft.position = victory.captured_position;
            self.craft.velocity = Vec3::ZERO;
            self.craft.angular = Vec3::ZERO;
            self.craft.controls_locked = true;
            self.camera.force_orbit(victory.captured_position);
            self.push_event(FlightEvent::CameraModeChanged(CameraModeKind::Orbit));
        }
        self.victory = Some(victory);
    }

    /// Start the death sequence if health has run out. Returns whether the
    /// transition fired.
    fn enter_death_if_dead(&mut self, lethal: Option<DamageCause>) -> bool {
        if !self.craft.is_dead() {
            return false;
        }
        self.push_event(FlightEvent::Died {
            cause: lethal.unwrap_or(DamageCause::VerticalImpact),
        });
        self.craft.controls_locked = true;
        self.death = Some(DeathSequence::default());
        self.set_phase(MissionPhase::ShipDeath);
        true
    }

    fn enter_victory(&mut self, phase: MissionPhase) {
        self.craft.invulnerable = true;
        self.victory = Some(VictorySequence::new(
            self.craft.position,
            self.config.victory_grace,
        ));
        self.set_phase(phase);
    }

    /// The integrate-then-resolve chain shared by Active and the victory
    /// grace window. Emits `Landed` on fresh ground contact.
    fn step_flight(&mut self, dt: f32) -> CollisionOutcome {
        self.craft.apply_thruster_input(self.input.thrusters());
        integrate(&mut self.craft, &self.config.physics, dt);
        if self.config.auto_level {
            auto_level(&mut self.craft, &self.config.physics, dt);
        }
        let was_grounded = self.craft.grounded;
        let outcome = resolve(&mut self.craft, &self.world, &self.config.collision, dt);
        if outcome.grounded && !was_grounded {
            self.push_event(FlightEvent::Landed);
        }
        outcome
    }

    /// Apply resolver damage to craft health and translate each event for
    /// external collaborators. Returns the cause that emptied the health
    /// bar, if any.
    fn apply_damage(&mut self, events: &[DamageEvent]) -> Option<DamageCause> {
        let mut lethal = None;
        for event in events {
            if !self.craft.invulnerable {
                let was_alive = !self.craft.health.is_dead();
                self.craft.health.take_damage(event.amount);
                if was_alive && self.craft.health.is_dead() {
                    lethal = Some(event.cause);
                }
            }
            let translated = match event.cause {
                DamageCause::VerticalImpact => FlightEvent::Impact {
                    speed: event.speed,
                    hard: event.hard,
                },
                DamageCause::Scrape => FlightEvent::Scraped {
                    speed: event.speed,
                    hard: event.hard,
                },
                DamageCause::StructureHit => FlightEvent::StructureHit { speed: event.speed },
                DamageCause::Water => FlightEvent::Splashdown,
            };
            self.push_event(translated);
        }
        lethal
    }

    /// Pad repair: requires stillness on a qualifying pad for longer than
    /// the delay, then restores health at a fixed rate. Any motion or loss
    /// of pad contact resets the timer.
    fn update_repair(&mut self, on_pad: Option<PadId>, dt: f32) {
        let still = self.craft.grounded
            && self.craft.speed() < self.config.repair_speed_epsilon
            && on_pad.is_some_and(|id| self.mission.repair_pad(id));
        if !still {
            self.repair.timer = 0.0;
            return;
        }
        self.repair.timer += dt;
        if self.repair.timer < self.config.repair_delay {
            return;
        }
        let health = &mut self.craft.health;
        if health.current < health.max {
            health.heal(self.config.repair_rate * dt);
            if health.current >= health.max {
                self.push_event(FlightEvent::Repaired);
            }
        }
    }

    fn handle_camera_cycle(&mut self) {
        if self.input.cycle_camera() {
            let kind = self.camera.cycle_mode();
            self.push_event(FlightEvent::CameraModeChanged(kind));
        }
    }

    /// Camera reads the corrected craft state, strictly after resolution.
    fn update_camera(&mut self, dt: f32) {
        let ctx = CameraContext {
            craft_position: self.craft.position,
            craft_velocity: self.craft.velocity,
            focus_target: self.mission.focus_target(),
        };
        let camera_input = CameraInput {
            look_axis: self.input.camera_axis(),
            pointer_delta: self.input.pointer_delta(),
            dragging: self.input.is_dragging(),
        };
        self.camera
            .update(&ctx, &camera_input, &self.config.camera, dt);
    }
}
