//! Craft state: orientation, velocities, thrusters, and health.

use engine_core::{Health, Transform};
use glam::{Quat, Vec3};

/// One of the four fixed thruster mounts. Each produces thrust along the
/// craft's local up axis and torque about one local axis depending on its
/// offset from the center of mass.
#[derive(Debug, Clone, Copy)]
pub struct Thruster {
    /// Mount point in craft-local space.
    pub offset: Vec3,
    /// Whether the thruster fires this tick.
    pub enabled: bool,
}

/// Default mount layout: four corners of the airframe, forward being +Z.
pub const THRUSTER_OFFSETS: [Vec3; 4] = [
    Vec3::new(-0.9, 0.0, 1.1),  // front left
    Vec3::new(0.9, 0.0, 1.1),   // front right
    Vec3::new(-0.9, 0.0, -1.1), // rear left
    Vec3::new(0.9, 0.0, -1.1),  // rear right
];

/// The player craft. One record per session, owned by the flight state
/// machine and written only by the integrator and collision resolver during
/// a frame's update chain.
#[derive(Debug, Clone)]
pub struct Craft {
    /// Stable identity, preserved across resets so external systems
    /// (damage smoke, audio emitters) can keep referring to this craft.
    pub id: u32,
    pub position: Vec3,
    pub velocity: Vec3,
    /// Unit orientation quaternion. No Euler state is retained.
    pub orientation: Quat,
    /// Local-space pitch/yaw/roll rates (x, y, z).
    pub angular: Vec3,
    pub health: Health,
    pub thrusters: [Thruster; 4],
    pub invulnerable: bool,
    pub controls_locked: bool,
    pub grounded: bool,
}

impl Craft {
    /// Create a craft at the given spawn transform.
    pub fn new(id: u32, spawn: Transform, max_health: f32) -> Self {
        Self {
            id,
            position: spawn.position,
            velocity: Vec3::ZERO,
            orientation: spawn.rotation.normalize(),
            angular: Vec3::ZERO,
            health: Health::new(max_health),
            thrusters: THRUSTER_OFFSETS.map(|offset| Thruster {
                offset,
                enabled: false,
            }),
            invulnerable: false,
            controls_locked: false,
            grounded: false,
        }
    }

    /// Reset to the spawn transform, keeping identity. Used on respawn.
    pub fn reset(&mut self, spawn: Transform) {
        let max = self.health.max;
        self.position = spawn.position;
        self.velocity = Vec3::ZERO;
        self.orientation = spawn.rotation.normalize();
        self.angular = Vec3::ZERO;
        self.health = Health::new(max);
        for thruster in &mut self.thrusters {
            thruster.enabled = false;
        }
        self.invulnerable = false;
        self.controls_locked = false;
        self.grounded = false;
    }

    /// Set per-slot thruster input for this tick. Ignored while controls
    /// are locked (death and victory sequences).
    pub fn apply_thruster_input(&mut self, slots: [bool; 4]) {
        if self.controls_locked {
            for thruster in &mut self.thrusters {
                thruster.enabled = false;
            }
            return;
        }
        for (thruster, on) in self.thrusters.iter_mut().zip(slots) {
            thruster.enabled = on;
        }
    }

    /// The craft's local up axis in world space.
    pub fn world_up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// The craft's local forward axis in world space.
    pub fn world_forward(&self) -> Vec3 {
        self.orientation * Vec3::Z
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    pub fn horizontal_speed(&self) -> f32 {
        Vec3::new(self.velocity.x, 0.0, self.velocity.z).length()
    }

    pub fn is_dead(&self) -> bool {
        self.health.is_dead()
    }

    /// Read-only state view for HUD, particle, and audio collaborators.
    pub fn snapshot(&self) -> CraftSnapshot {
        CraftSnapshot {
            id: self.id,
            position: self.position,
            velocity: self.velocity,
            orientation: self.orientation,
            health: self.health.current,
            max_health: self.health.max,
            grounded: self.grounded,
            thrusters_active: [
                self.thrusters[0].enabled,
                self.thrusters[1].enabled,
                self.thrusters[2].enabled,
                self.thrusters[3].enabled,
            ],
        }
    }
}

/// Snapshot of craft state exposed to external systems each frame.
#[derive(Debug, Clone, Copy)]
pub struct CraftSnapshot {
    pub id: u32,
    pub position: Vec3,
    pub velocity: Vec3,
    pub orientation: Quat,
    pub health: f32,
    pub max_health: f32,
    pub grounded: bool,
    pub thrusters_active: [bool; 4],
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reset restores spawn state but keeps the craft's identity.
    #[test]
    fn reset_preserves_identity() {
        let spawn = Transform::from_position(Vec3::new(0.0, 10.0, 0.0));
        let mut craft = Craft::new(3, spawn, 100.0);
        craft.position = Vec3::new(50.0, 2.0, -8.0);
        craft.health.take_damage(70.0);
        craft.invulnerable = true;
        craft.reset(spawn);
        assert_eq!(craft.id, 3);
        assert_eq!(craft.position, spawn.position);
        assert_eq!(craft.health.current, 100.0);
        assert!(!craft.invulnerable);
    }

    /// Control lock forces all thrusters off regardless of input.
    #[test]
    fn control_lock_disables_thrusters() {
        let mut craft = Craft::new(0, Transform::default(), 100.0);
        craft.controls_locked = true;
        craft.apply_thruster_input([true; 4]);
        assert!(craft.thrusters.iter().all(|t| !t.enabled));
    }
}
