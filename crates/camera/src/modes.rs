//! One type per camera behavior mode.

use engine_core::{direction_from, time_scale, yaw_pitch_of};
use glam::{Quat, Vec2, Vec3};

use crate::controller::CameraState;
use crate::tuning::CameraTuning;

/// Closed set of camera behaviors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraModeKind {
    Follow,
    Free,
    Focus,
    Orbit,
}

/// Per-frame inputs the camera cares about.
#[derive(Debug, Clone, Copy, Default)]
pub struct CameraInput {
    /// Analog look axes, -1..1 per component.
    pub look_axis: Vec2,
    /// Pointer movement this frame, in pixels.
    pub pointer_delta: Vec2,
    /// Whether the pointer-drag input is held.
    pub dragging: bool,
}

/// Craft state and target information the camera reads each frame. Always
/// the post-collision state for this frame.
#[derive(Debug, Clone, Copy)]
pub struct CameraContext {
    pub craft_position: Vec3,
    pub craft_velocity: Vec3,
    /// Mission-supplied point of interest (nearest enemy, objective,
    /// checkpoint), if any.
    pub focus_target: Option<Vec3>,
}

/// A camera behavior: steers yaw/pitch on the shared state and reports the
/// position the camera should converge toward this frame.
pub trait CameraMode {
    fn kind(&self) -> CameraModeKind;

    fn update(
        &mut self,
        state: &mut CameraState,
        ctx: &CameraContext,
        input: &CameraInput,
        tuning: &CameraTuning,
        dt: f32,
    ) -> Vec3;

    /// Whether the speed-scaled pull-back distance applies in this mode.
    fn uses_pull_back(&self) -> bool {
        true
    }
}

/// Steer yaw/pitch toward a world-space direction along the shortest
/// angular path, proportionally to elapsed time. A single correction never
/// rotates more than pi.
fn steer_toward(state: &mut CameraState, dir: Vec3, max_pitch: f32, gain: f32, dt: f32) {
    if dir.length_squared() < 1e-9 {
        return;
    }
    let (target_yaw, target_pitch) = yaw_pitch_of(dir);
    let mut diff = target_yaw - state.yaw;
    while diff > std::f32::consts::PI {
        diff -= std::f32::consts::TAU;
    }
    while diff < -std::f32::consts::PI {
        diff += std::f32::consts::TAU;
    }
    let t = (gain * dt).min(1.0);
    state.yaw += diff * t;
    state.pitch += (target_pitch - state.pitch) * t;
    state.pitch = state.pitch.clamp(-max_pitch, max_pitch);
}

// ── Free ───────────────────────────────────────────────────────────────────

/// Direct yaw/pitch control from analog axes and pointer drag.
pub struct FreeLook;

impl CameraMode for FreeLook {
    fn kind(&self) -> CameraModeKind {
        CameraModeKind::Free
    }

    fn update(
        &mut self,
        state: &mut CameraState,
        ctx: &CameraContext,
        input: &CameraInput,
        tuning: &CameraTuning,
        dt: f32,
    ) -> Vec3 {
        state.yaw += input.look_axis.x * tuning.free_look_speed * dt;
        state.pitch += input.look_axis.y * tuning.free_look_speed * dt;
        if input.dragging {
            state.yaw += input.pointer_delta.x * tuning.drag_sensitivity;
            state.pitch += input.pointer_delta.y * tuning.drag_sensitivity;
        }
        let limit = tuning.free_pitch_limit_deg.to_radians();
        state.pitch = state.pitch.clamp(-limit, limit);
        ctx.craft_position
    }
}

// ── Follow ─────────────────────────────────────────────────────────────────

/// Velocity-facing chase camera. Keeps an orientation quaternion and slerps
/// it toward the craft's direction of travel; yaw/pitch are re-derived from
/// the orientation's forward vector each frame rather than stored
/// independently, so they cannot drift apart.
pub struct Follow {
    orientation: Quat,
}

impl Follow {
    /// Seed the internal orientation from the current view angles, so mode
    /// entry does not snap.
    pub fn from_angles(yaw: f32, pitch: f32) -> Self {
        Self {
            orientation: Quat::from_rotation_y(yaw) * Quat::from_rotation_x(-pitch),
        }
    }
}

impl CameraMode for Follow {
    fn kind(&self) -> CameraModeKind {
        CameraModeKind::Follow
    }

    fn update(
        &mut self,
        state: &mut CameraState,
        ctx: &CameraContext,
        _input: &CameraInput,
        tuning: &CameraTuning,
        dt: f32,
    ) -> Vec3 {
        let horizontal = Vec3::new(ctx.craft_velocity.x, 0.0, ctx.craft_velocity.z);
        if horizontal.length_squared() > 1e-8 {
            let target_yaw = horizontal.x.atan2(horizontal.z);
            let speed = ctx.craft_velocity.length().max(1e-6);
            let ratio = (ctx.craft_velocity.y / speed)
                .clamp(-tuning.follow_pitch_ratio, tuning.follow_pitch_ratio);
            let target_pitch = ratio.asin();
            let target =
                Quat::from_rotation_y(target_yaw) * Quat::from_rotation_x(-target_pitch);
            let t = 1.0 - tuning.follow_retain.powf(time_scale(dt));
            self.orientation = self.orientation.slerp(target, t).normalize();
        }
        let fwd = self.orientation * Vec3::Z;
        let (yaw, pitch) = yaw_pitch_of(fwd);
        state.yaw = yaw;
        state.pitch = pitch;
        ctx.craft_position
    }
}

// ── Focus ──────────────────────────────────────────────────────────────────

/// Steers continuously toward an externally supplied target point. Without
/// a target, falls back to velocity facing with pitch relaxing to level.
pub struct Focus;

impl CameraMode for Focus {
    fn kind(&self) -> CameraModeKind {
        CameraModeKind::Focus
    }

    fn update(
        &mut self,
        state: &mut CameraState,
        ctx: &CameraContext,
        _input: &CameraInput,
        tuning: &CameraTuning,
        dt: f32,
    ) -> Vec3 {
        let max_pitch = tuning.focus_pitch_limit_deg.to_radians();
        match ctx.focus_target {
            Some(target) => {
                steer_toward(state, target - state.position, max_pitch, tuning.focus_gain, dt);
            }
            None => {
                let horizontal = Vec3::new(ctx.craft_velocity.x, 0.0, ctx.craft_velocity.z);
                steer_toward(state, horizontal, max_pitch, tuning.focus_gain, dt);
                state.pitch -= state.pitch * (tuning.focus_gain * dt).min(1.0);
            }
        }
        ctx.craft_position
    }
}

// ── Orbit ──────────────────────────────────────────────────────────────────

/// Victory/mission-complete camera: revolves around a frozen craft position
/// at a fixed rate and radius, always facing the craft. Pull-back is
/// disabled; the orbit itself provides the distance.
pub struct Orbit {
    center: Vec3,
    angle: f32,
}

impl Orbit {
    /// Start orbiting from the camera's current bearing so the hand-off
    /// does not snap.
    pub fn around(center: Vec3, camera_position: Vec3) -> Self {
        let offset = camera_position - center;
        let angle = if offset.length_squared() > 1e-6 {
            offset.z.atan2(offset.x)
        } else {
            0.0
        };
        Self { center, angle }
    }
}

impl CameraMode for Orbit {
    fn kind(&self) -> CameraModeKind {
        CameraModeKind::Orbit
    }

    fn update(
        &mut self,
        state: &mut CameraState,
        _ctx: &CameraContext,
        _input: &CameraInput,
        tuning: &CameraTuning,
        dt: f32,
    ) -> Vec3 {
        self.angle += tuning.orbit_rate * dt;
        let target = self.center
            + Vec3::new(
                self.angle.cos() * tuning.orbit_radius,
                tuning.orbit_height,
                self.angle.sin() * tuning.orbit_radius,
            );
        steer_toward(
            state,
            self.center - state.position,
            tuning.focus_pitch_limit_deg.to_radians(),
            tuning.focus_gain,
            dt,
        );
        target
    }

    fn uses_pull_back(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn state_at(position: Vec3, yaw: f32) -> CameraState {
        CameraState {
            position,
            yaw,
            pitch: 0.0,
            pull_back: 0.0,
        }
    }

    /// Focus yaw converges monotonically toward a static target along the
    /// shortest path, never correcting by more than pi in one step.
    #[test]
    fn focus_converges_shortest_path() {
        let tuning = CameraTuning::default();
        let target = Vec3::new(10.0, 0.0, 10.0);
        let bearing = std::f32::consts::FRAC_PI_4;
        let input = CameraInput::default();
        let ctx = CameraContext {
            craft_position: Vec3::ZERO,
            craft_velocity: Vec3::ZERO,
            focus_target: Some(target),
        };

        for &start_yaw in &[-3.0_f32, -1.0, 0.0, 2.5, 3.1] {
            let mut mode = Focus;
            let mut state = state_at(Vec3::ZERO, start_yaw);
            let mut previous = f32::INFINITY;
            for _ in 0..600 {
                let before = state.yaw;
                mode.update(&mut state, &ctx, &input, &tuning, DT);
                let step = (state.yaw - before).abs();
                assert!(step <= std::f32::consts::PI + 1e-5);
                let mut diff = bearing - state.yaw;
                while diff > std::f32::consts::PI {
                    diff -= std::f32::consts::TAU;
                }
                while diff < -std::f32::consts::PI {
                    diff += std::f32::consts::TAU;
                }
                assert!(
                    diff.abs() <= previous + 1e-5,
                    "diverged from start {}",
                    start_yaw
                );
                previous = diff.abs();
            }
            assert!(previous < 1e-3, "did not converge from start {}", start_yaw);
        }
    }

    /// Without a target, Focus relaxes pitch toward level.
    #[test]
    fn focus_without_target_levels_pitch() {
        let tuning = CameraTuning::default();
        let mut mode = Focus;
        let mut state = state_at(Vec3::ZERO, 0.0);
        state.pitch = 1.2;
        let ctx = CameraContext {
            craft_position: Vec3::ZERO,
            craft_velocity: Vec3::new(0.0, 0.0, 0.4),
            focus_target: None,
        };
        for _ in 0..300 {
            mode.update(&mut state, &ctx, &CameraInput::default(), &tuning, DT);
        }
        assert!(state.pitch.abs() < 1e-3);
    }

    /// Follow turns to face the direction of travel, derived from the
    /// smoothed orientation's forward vector.
    #[test]
    fn follow_faces_velocity() {
        let tuning = CameraTuning::default();
        let mut mode = Follow::from_angles(2.0, 0.3);
        let mut state = state_at(Vec3::ZERO, 2.0);
        let ctx = CameraContext {
            craft_position: Vec3::ZERO,
            craft_velocity: Vec3::new(0.3, 0.0, 0.3),
            focus_target: None,
        };
        for _ in 0..600 {
            mode.update(&mut state, &ctx, &CameraInput::default(), &tuning, DT);
        }
        assert!((state.yaw - std::f32::consts::FRAC_PI_4).abs() < 1e-2);
        assert!(state.pitch.abs() < 1e-2);
    }

    /// Free mode clamps pitch short of vertical no matter how hard the
    /// player drags.
    #[test]
    fn free_pitch_clamps() {
        let tuning = CameraTuning::default();
        let mut mode = FreeLook;
        let mut state = state_at(Vec3::ZERO, 0.0);
        let input = CameraInput {
            dragging: true,
            pointer_delta: Vec2::new(0.0, 10_000.0),
            ..CameraInput::default()
        };
        let ctx = CameraContext {
            craft_position: Vec3::ZERO,
            craft_velocity: Vec3::ZERO,
            focus_target: None,
        };
        mode.update(&mut state, &ctx, &input, &tuning, DT);
        let limit = tuning.free_pitch_limit_deg.to_radians();
        assert!((state.pitch - limit).abs() < 1e-5);
    }

    /// Orbit keeps the camera target on the configured ring and faces the
    /// frozen center.
    #[test]
    fn orbit_rings_the_center() {
        let tuning = CameraTuning::default();
        let center = Vec3::new(5.0, 2.0, -3.0);
        let mut mode = Orbit::around(center, center + Vec3::new(tuning.orbit_radius, 0.0, 0.0));
        let mut state = state_at(center + Vec3::new(tuning.orbit_radius, tuning.orbit_height, 0.0), 0.0);
        let ctx = CameraContext {
            craft_position: center,
            craft_velocity: Vec3::ZERO,
            focus_target: None,
        };
        for _ in 0..240 {
            let target = mode.update(&mut state, &ctx, &CameraInput::default(), &tuning, DT);
            let radial = Vec3::new(target.x - center.x, 0.0, target.z - center.z).length();
            assert!((radial - tuning.orbit_radius).abs() < 1e-3);
            // Track the target like the controller would.
            state.position = target;
        }
        // After settling, the view direction points at the center.
        let to_center = (center - state.position).normalize();
        let fwd = direction_from(state.yaw, state.pitch);
        assert!(fwd.dot(to_center) > 0.95);
    }
}
