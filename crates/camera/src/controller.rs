//! Camera controller: owns the shared camera state, the active mode, and
//! the view/projection construction.

use engine_core::{direction_from, time_scale};
use glam::{Mat4, Vec3};

use crate::modes::{
    CameraContext, CameraInput, CameraMode, CameraModeKind, Focus, Follow, FreeLook, Orbit,
};
use crate::tuning::CameraTuning;

/// Mode-cycle order for the camera-cycle input.
const CYCLE_ORDER: [CameraModeKind; 3] = [
    CameraModeKind::Follow,
    CameraModeKind::Free,
    CameraModeKind::Focus,
];

/// Shared camera state every mode steers.
#[derive(Debug, Clone, Copy)]
pub struct CameraState {
    /// Converged focus position (the craft, or the orbit ring). The
    /// pull-back offset is applied only when building the view transform.
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    /// Distance the eye sits behind `position` along the view direction.
    pub pull_back: f32,
}

impl CameraState {
    /// View direction for the current yaw/pitch.
    pub fn forward(&self) -> Vec3 {
        direction_from(self.yaw, self.pitch)
    }

    /// Eye position: the stored position pulled back along the view
    /// direction.
    pub fn eye(&self) -> Vec3 {
        self.position - self.forward() * self.pull_back
    }
}

/// The camera controller. Consumes post-collision craft state each frame
/// and exposes a view transform to the render backend.
pub struct CameraController {
    pub state: CameraState,
    mode: Box<dyn CameraMode>,
    /// Whether Follow participates in the cycle (disabled by some missions).
    pub follow_enabled: bool,
    /// Field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Aspect ratio (width / height).
    pub aspect: f32,
}

impl CameraController {
    /// Create a controller in Follow mode at the given position.
    pub fn new(position: Vec3) -> Self {
        Self {
            state: CameraState {
                position,
                yaw: 0.0,
                pitch: 0.0,
                pull_back: 0.0,
            },
            mode: Box::new(Follow::from_angles(0.0, 0.0)),
            follow_enabled: true,
            fov_degrees: 70.0,
            near: 0.1,
            far: 1000.0,
            aspect: 16.0 / 9.0,
        }
    }

    pub fn mode_kind(&self) -> CameraModeKind {
        self.mode.kind()
    }

    /// Advance to the next mode in the cycle, skipping Follow when it is
    /// disabled. From Orbit, cycling re-enters the normal rotation at
    /// Follow. Returns the new mode.
    pub fn cycle_mode(&mut self) -> CameraModeKind {
        let current = self.mode.kind();
        let index = CYCLE_ORDER
            .iter()
            .position(|k| *k == current)
            .unwrap_or(CYCLE_ORDER.len() - 1);
        let mut next = CYCLE_ORDER[(index + 1) % CYCLE_ORDER.len()];
        if next == CameraModeKind::Follow && !self.follow_enabled {
            next = CYCLE_ORDER[(index + 2) % CYCLE_ORDER.len()];
        }
        self.set_mode(next);
        next
    }

    fn set_mode(&mut self, kind: CameraModeKind) {
        self.mode = match kind {
            CameraModeKind::Follow => {
                Box::new(Follow::from_angles(self.state.yaw, self.state.pitch))
            }
            CameraModeKind::Free => Box::new(FreeLook),
            CameraModeKind::Focus => Box::new(Focus),
            // Orbit needs a frozen center; entered only via force_orbit.
            CameraModeKind::Orbit => return,
        };
    }

    /// Hand the camera to the victory orbit around a frozen craft position.
    pub fn force_orbit(&mut self, center: Vec3) {
        self.mode = Box::new(Orbit::around(center, self.state.eye()));
    }

    /// Back to the default mode at a respawn position.
    pub fn reset(&mut self, position: Vec3) {
        self.state = CameraState {
            position,
            yaw: 0.0,
            pitch: 0.0,
            pull_back: 0.0,
        };
        let default_kind = if self.follow_enabled {
            CameraModeKind::Follow
        } else {
            CameraModeKind::Free
        };
        self.set_mode(default_kind);
    }

    /// Per-frame update. Must run after the craft's position has been
    /// corrected by the collision resolver.
    pub fn update(
        &mut self,
        ctx: &CameraContext,
        input: &CameraInput,
        tuning: &CameraTuning,
        dt: f32,
    ) {
        let target_position = self.mode.update(&mut self.state, ctx, input, tuning, dt);

        let ts = time_scale(dt);
        let t = 1.0 - tuning.position_retain.powf(ts);
        self.state.position += (target_position - self.state.position) * t;

        let target_distance = if self.mode.uses_pull_back() {
            tuning.base_distance + ctx.craft_velocity.length() * tuning.distance_speed_scale
        } else {
            0.0
        };
        let td = 1.0 - tuning.distance_retain.powf(ts);
        self.state.pull_back += (target_distance - self.state.pull_back) * td;
    }

    /// Update aspect ratio (call on window resize).
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    /// Get the view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        let eye = self.state.eye();
        Mat4::look_at_rh(eye, eye + self.state.forward(), Vec3::Y)
    }

    /// Get the projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    /// Get the combined view-projection matrix.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn ctx_at(craft_position: Vec3, craft_velocity: Vec3) -> CameraContext {
        CameraContext {
            craft_position,
            craft_velocity,
            focus_target: None,
        }
    }

    /// The cycle is Follow -> Free -> Focus -> Follow.
    #[test]
    fn cycle_order() {
        let mut cam = CameraController::new(Vec3::ZERO);
        assert_eq!(cam.mode_kind(), CameraModeKind::Follow);
        assert_eq!(cam.cycle_mode(), CameraModeKind::Free);
        assert_eq!(cam.cycle_mode(), CameraModeKind::Focus);
        assert_eq!(cam.cycle_mode(), CameraModeKind::Follow);
    }

    /// With Follow disabled, cycling skips it.
    #[test]
    fn cycle_skips_disabled_follow() {
        let mut cam = CameraController::new(Vec3::ZERO);
        cam.follow_enabled = false;
        cam.set_mode(CameraModeKind::Focus);
        assert_eq!(cam.cycle_mode(), CameraModeKind::Free);
        assert_eq!(cam.cycle_mode(), CameraModeKind::Focus);
    }

    /// Camera position converges exponentially toward the craft.
    #[test]
    fn position_converges_to_craft() {
        let mut cam = CameraController::new(Vec3::ZERO);
        let tuning = CameraTuning::default();
        let craft = Vec3::new(30.0, 12.0, -4.0);
        let mut last_distance = f32::INFINITY;
        for _ in 0..600 {
            cam.update(&ctx_at(craft, Vec3::ZERO), &CameraInput::default(), &tuning, DT);
            let d = (cam.state.position - craft).length();
            assert!(d <= last_distance + 1e-4);
            last_distance = d;
        }
        assert!(last_distance < 0.05);
    }

    /// Pull-back grows with craft speed and collapses to zero in orbit.
    #[test]
    fn pull_back_tracks_speed() {
        let tuning = CameraTuning::default();
        let mut cam = CameraController::new(Vec3::ZERO);

        let fast = Vec3::new(0.0, 0.0, 2.0);
        for _ in 0..600 {
            cam.update(&ctx_at(Vec3::ZERO, fast), &CameraInput::default(), &tuning, DT);
        }
        let expected = tuning.base_distance + fast.length() * tuning.distance_speed_scale;
        assert!((cam.state.pull_back - expected).abs() < 0.05);

        cam.force_orbit(Vec3::ZERO);
        for _ in 0..600 {
            cam.update(&ctx_at(Vec3::ZERO, Vec3::ZERO), &CameraInput::default(), &tuning, DT);
        }
        assert!(cam.state.pull_back.abs() < 0.05);
    }

    /// force_orbit switches the mode; reset returns to the default.
    #[test]
    fn orbit_and_reset() {
        let mut cam = CameraController::new(Vec3::ZERO);
        cam.force_orbit(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(cam.mode_kind(), CameraModeKind::Orbit);
        cam.reset(Vec3::ZERO);
        assert_eq!(cam.mode_kind(), CameraModeKind::Follow);
    }

    /// The eye sits pull_back behind the stored position along the view
    /// direction.
    #[test]
    fn eye_applies_pull_back() {
        let mut cam = CameraController::new(Vec3::ZERO);
        cam.state.yaw = 0.0;
        cam.state.pitch = 0.0;
        cam.state.pull_back = 5.0;
        // Forward at yaw 0 is +Z, so the eye is 5 units down -Z.
        let eye = cam.state.eye();
        assert!((eye.z + 5.0).abs() < 1e-5);
    }
}
