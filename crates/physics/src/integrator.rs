//! Per-frame rigid-body integration for the craft.
//!
//! All terms are scaled by `time_scale(dt)` so tuning behaves identically at
//! any frame rate, against a 60-step baseline.

use engine_core::time_scale;
use glam::{EulerRot, Quat, Vec3};

use crate::craft::Craft;
use crate::tuning::PhysicsTuning;

/// Advance velocity, position, and orientation by one tick.
///
/// The caller (the collision resolver) may still reject or adjust the
/// resulting position; integration never looks at world geometry.
pub fn integrate(craft: &mut Craft, tuning: &PhysicsTuning, dt: f32) {
    let ts = time_scale(dt);

    // Gravity
    craft.velocity.y += tuning.gravity * ts;

    // Thrust along the craft's world-up, plus local-frame torque from each
    // mount's offset: Z offset drives pitch, X offset drives (negated) roll.
    let world_up = craft.world_up();
    for i in 0..craft.thrusters.len() {
        let thruster = craft.thrusters[i];
        if !thruster.enabled {
            continue;
        }
        craft.velocity += world_up * tuning.thrust * ts;
        craft.angular.x += thruster.offset.z * tuning.pitch_torque * ts;
        craft.angular.z -= thruster.offset.x * tuning.roll_torque * ts;
    }

    // Position
    craft.position += craft.velocity * ts;

    // Orientation: compose a small delta rotation from the negated local
    // rates, then renormalize. The renormalize is mandatory: accumulated
    // float error must not denormalize the quaternion over long sessions.
    let delta = Quat::from_euler(
        EulerRot::YXZ,
        -craft.angular.y * ts,
        -craft.angular.x * ts,
        -craft.angular.z * ts,
    );
    craft.orientation = (craft.orientation * delta).normalize();

    // Exponential damping, frame-rate independent.
    craft.velocity *= tuning.linear_damping.powf(ts);
    craft.angular *= tuning.angular_damping.powf(ts);

    // Hard altitude ceiling: clamp, kill climb, and cut thrust for the tick.
    if craft.position.y > tuning.ceiling {
        craft.position.y = tuning.ceiling;
        if craft.velocity.y > 0.0 {
            craft.velocity.y = 0.0;
        }
        for thruster in &mut craft.thrusters {
            thruster.enabled = false;
        }
    }
}

/// Assist mode: level pitch and roll while preserving heading.
///
/// The heading is read from the forward basis vector, not from Euler
/// extraction, so leveling stays correct at extreme pitch.
pub fn auto_level(craft: &mut Craft, tuning: &PhysicsTuning, dt: f32) {
    let ts = time_scale(dt);
    let fwd = craft.world_forward();
    let yaw = fwd.x.atan2(fwd.z);
    let target = Quat::from_rotation_y(yaw);
    let t = 1.0 - tuning.auto_level_retain.powf(ts);
    craft.orientation = craft.orientation.slerp(target, t).normalize();

    let keep = tuning.auto_level_angular_retain.powf(ts);
    craft.angular.x *= keep;
    craft.angular.z *= keep;
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_core::Transform;

    const EPS: f32 = 1e-4;

    fn test_craft() -> Craft {
        Craft::new(0, Transform::from_position(Vec3::new(0.0, 50.0, 0.0)), 100.0)
    }

    /// Exponential velocity damping composes: N small steps equal one big
    /// step of the same total duration.
    #[test]
    fn damping_is_frame_rate_independent() {
        let tuning = PhysicsTuning {
            gravity: 0.0,
            ..PhysicsTuning::default()
        };

        let mut fine = test_craft();
        fine.velocity = Vec3::new(1.0, 0.4, -0.7);
        for _ in 0..8 {
            integrate(&mut fine, &tuning, 1.0 / 240.0);
        }

        let mut coarse = test_craft();
        coarse.velocity = Vec3::new(1.0, 0.4, -0.7);
        integrate(&mut coarse, &tuning, 8.0 / 240.0);

        assert!(
            (fine.velocity - coarse.velocity).length() < EPS,
            "fine {:?} vs coarse {:?}",
            fine.velocity,
            coarse.velocity
        );
    }

    /// Without damping, gravity accumulation is linear in simulated time
    /// regardless of step size.
    #[test]
    fn gravity_is_linear_in_time() {
        let tuning = PhysicsTuning {
            linear_damping: 1.0,
            ..PhysicsTuning::default()
        };

        let mut fine = test_craft();
        for _ in 0..30 {
            integrate(&mut fine, &tuning, 1.0 / 300.0);
        }

        let mut coarse = test_craft();
        integrate(&mut coarse, &tuning, 30.0 / 300.0);

        assert!((fine.velocity.y - coarse.velocity.y).abs() < EPS);
    }

    /// The orientation quaternion stays unit-length across an arbitrary
    /// sequence of steps with thrusters and spin.
    #[test]
    fn orientation_norm_is_preserved() {
        let tuning = PhysicsTuning::default();
        let mut craft = test_craft();
        craft.angular = Vec3::new(0.13, -0.21, 0.08);
        craft.apply_thruster_input([true, false, true, true]);
        for i in 0..2000 {
            let dt = if i % 3 == 0 { 1.0 / 60.0 } else { 1.0 / 144.0 };
            integrate(&mut craft, &tuning, dt);
        }
        let norm = craft.orientation.length();
        assert!((norm - 1.0).abs() < 1e-3, "norm drifted to {}", norm);
    }

    /// Thrusters at the default mounts with the craft upright accelerate it
    /// straight up against gravity.
    #[test]
    fn symmetric_thrust_lifts_without_torque() {
        let tuning = PhysicsTuning::default();
        let mut craft = test_craft();
        craft.apply_thruster_input([true; 4]);
        integrate(&mut craft, &tuning, 1.0 / 60.0);
        assert!(craft.velocity.y > 0.0);
        // Symmetric mounts: pitch and roll contributions cancel.
        assert!(craft.angular.x.abs() < EPS);
        assert!(craft.angular.z.abs() < EPS);
    }

    /// An asymmetric thruster produces pitch and roll rates.
    #[test]
    fn single_thruster_torques() {
        let tuning = PhysicsTuning::default();
        let mut craft = test_craft();
        craft.apply_thruster_input([true, false, false, false]); // front left
        integrate(&mut craft, &tuning, 1.0 / 60.0);
        assert!(craft.angular.x != 0.0);
        assert!(craft.angular.z != 0.0);
    }

    /// The ceiling clamps altitude, kills climb, and cuts thrust for the tick.
    #[test]
    fn ceiling_clamps_and_cuts_thrust() {
        let tuning = PhysicsTuning::default();
        let mut craft = test_craft();
        craft.position.y = tuning.ceiling - 0.01;
        craft.velocity.y = 5.0;
        craft.apply_thruster_input([true; 4]);
        integrate(&mut craft, &tuning, 1.0 / 60.0);
        assert_eq!(craft.position.y, tuning.ceiling);
        assert!(craft.velocity.y <= 0.0);
        assert!(craft.thrusters.iter().all(|t| !t.enabled));
    }

    /// Auto-level drives a banked craft back toward upright while keeping
    /// its heading.
    #[test]
    fn auto_level_restores_upright() {
        let tuning = PhysicsTuning::default();
        let mut craft = test_craft();
        let yaw = 1.2_f32;
        craft.orientation = Quat::from_rotation_y(yaw) * Quat::from_rotation_x(0.9);
        craft.angular = Vec3::new(0.2, 0.0, -0.1);
        for _ in 0..600 {
            auto_level(&mut craft, &tuning, 1.0 / 60.0);
        }
        assert!(craft.angular.x.abs() < 1e-3);
        assert!(craft.angular.z.abs() < 1e-3);
        let up = craft.world_up();
        assert!(up.y > 0.999, "up vector {:?}", up);
        let fwd = craft.world_forward();
        let recovered = fwd.x.atan2(fwd.z);
        assert!((recovered - yaw).abs() < 1e-2, "yaw drifted: {}", recovered);
    }
}
