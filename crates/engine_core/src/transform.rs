//! Transform type and spatial utilities.
//!
//! Convention: forward is positive Z, up is positive Y, so a craft's yaw is
//! recovered as `atan2(forward.x, forward.z)`.

use glam::{Quat, Vec3};

/// A 3D transform representing position and rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Transform {
    /// Create a new transform at the given position.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a new transform with position and rotation.
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Get the forward direction (positive Z).
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Heading angle in radians, read from the forward basis vector.
    ///
    /// This stays correct at extreme pitch, unlike Euler extraction from
    /// the quaternion.
    pub fn yaw(&self) -> f32 {
        let fwd = self.forward();
        fwd.x.atan2(fwd.z)
    }
}

/// Yaw and pitch (radians) of an arbitrary direction vector.
///
/// Returns `(0.0, 0.0)` for a near-zero vector rather than dividing by a
/// degenerate length.
pub fn yaw_pitch_of(dir: Vec3) -> (f32, f32) {
    let len = dir.length();
    if len < 1e-6 {
        return (0.0, 0.0);
    }
    let yaw = dir.x.atan2(dir.z);
    let pitch = (dir.y / len).clamp(-1.0, 1.0).asin();
    (yaw, pitch)
}

/// Unit direction vector for the given yaw and pitch.
pub fn direction_from(yaw: f32, pitch: f32) -> Vec3 {
    Vec3::new(
        yaw.sin() * pitch.cos(),
        pitch.sin(),
        yaw.cos() * pitch.cos(),
    )
}
