//! Multi-surface collision resolution: terrain heightfield, landing-pad
//! volumes, and axis-aligned structure boxes.
//!
//! All tests are discrete per-tick; tunneling through thin geometry at very
//! high speed is an accepted limitation. Overlapping objects are resolved
//! sequentially in list order, pads before structures.

use engine_core::time_scale;
use glam::Vec3;
use world::{PadId, WorldGeometry};

use crate::craft::Craft;
use crate::tuning::CollisionTuning;

const EPS: f32 = 1e-6;

/// What kind of contact produced a damage event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageCause {
    /// Vertical landing impact.
    VerticalImpact,
    /// Horizontal scrape along the ground.
    Scrape,
    /// Side collision with a structure.
    StructureHit,
    /// Splashdown into water; instantly lethal.
    Water,
}

/// A single damage event produced by the resolver. The session applies the
/// amount to craft health; `hard` events additionally trigger visual/audio
/// feedback.
#[derive(Debug, Clone, Copy)]
pub struct DamageEvent {
    pub cause: DamageCause,
    pub amount: f32,
    /// Pre-collision speed that produced the event.
    pub speed: f32,
    /// Whether the impact also crossed the feedback threshold.
    pub hard: bool,
}

/// Result of one resolution pass.
#[derive(Debug, Clone)]
pub struct CollisionOutcome {
    /// Effective ground height under the craft this tick (highest of
    /// terrain, qualifying pad tops, qualifying structure roofs).
    pub ground_height: f32,
    /// Whether the craft is resting on the effective ground.
    pub grounded: bool,
    /// The pad the craft is resting on, if the effective ground is a pad top.
    pub on_pad: Option<PadId>,
    pub events: Vec<DamageEvent>,
}

/// Damage scaling from how far the craft's up vector has tilted from
/// vertical: 1.0 upright, `side_multiplier` at horizontal, and
/// `inverted_multiplier` fully upside-down. Monotonically non-decreasing as
/// `up_y` falls from 1 to -1.
pub fn orientation_multiplier(up_y: f32, tuning: &CollisionTuning) -> f32 {
    let up_y = up_y.clamp(-1.0, 1.0);
    if up_y >= 0.0 {
        1.0 + (1.0 - up_y) * (tuning.side_multiplier - 1.0)
    } else {
        tuning.side_multiplier + (-up_y) * (tuning.inverted_multiplier - tuning.side_multiplier)
    }
}

/// Minimum-translation push-out of a point from an axis-aligned box footprint.
///
/// Moves `position` to the nearest face along the axis of least penetration
/// and returns the outward axis direction. Returns `None` when the point is
/// not inside, or sits exactly at the center where the direction is
/// undefined (the caller falls back to a velocity reversal).
fn push_out_box(
    position: &mut Vec3,
    center_x: f32,
    center_z: f32,
    half_width: f32,
    half_depth: f32,
) -> Option<Vec3> {
    let dx = position.x - center_x;
    let dz = position.z - center_z;
    let pen_x = half_width - dx.abs();
    let pen_z = half_depth - dz.abs();
    if pen_x <= 0.0 || pen_z <= 0.0 {
        return None;
    }
    if dx.abs() < EPS && dz.abs() < EPS {
        return None;
    }
    if pen_x <= pen_z {
        let dir = if dx >= 0.0 { 1.0 } else { -1.0 };
        position.x = center_x + dir * half_width;
        Some(Vec3::new(dir, 0.0, 0.0))
    } else {
        let dir = if dz >= 0.0 { 1.0 } else { -1.0 };
        position.z = center_z + dir * half_depth;
        Some(Vec3::new(0.0, 0.0, dir))
    }
}

/// Resolve the craft's proposed position against all world surfaces.
///
/// Mutates position and velocity in place and reports the effective ground,
/// grounded state, and any damage events. Must run after integration and
/// before the camera reads craft state.
pub fn resolve(
    craft: &mut Craft,
    world: &WorldGeometry,
    tuning: &CollisionTuning,
    dt: f32,
) -> CollisionOutcome {
    let mut events = Vec::new();

    let mut ground = world.terrain.height(craft.position.x, craft.position.z);
    let mut ground_is_terrain = true;
    let mut pad_under: Option<PadId> = None;

    // Pads first: side volumes push out, tops become landing candidates.
    for pad in &world.pads {
        if !pad.contains_xz(craft.position.x, craft.position.z) {
            continue;
        }
        if craft.position.y >= pad.top {
            if pad.top > ground {
                ground = pad.top;
                ground_is_terrain = false;
                pad_under = Some(pad.id);
            }
        } else if craft.position.y + tuning.ground_offset > pad.bottom {
            // Inside the side volume: push out along the least-penetration
            // axis and halve the horizontal velocity components.
            match push_out_box(
                &mut craft.position,
                pad.center_x,
                pad.center_z,
                pad.half_width,
                pad.half_depth,
            ) {
                Some(_) => {
                    craft.velocity.x *= 0.5;
                    craft.velocity.z *= 0.5;
                }
                None => {
                    craft.velocity.x = -craft.velocity.x;
                    craft.velocity.z = -craft.velocity.z;
                }
            }
        }
    }

    // Structures: roofs are landing candidates when the craft center is
    // high enough; anything else is a side hit with bounce and damage.
    for structure in &world.structures {
        if !structure.contains_xz(craft.position.x, craft.position.z) {
            continue;
        }
        let roof = structure.roof();
        let low = craft.position.y - tuning.ground_offset;
        let high = craft.position.y + tuning.ground_offset;
        if high < structure.base_y || low > roof {
            continue;
        }
        if craft.position.y > roof - tuning.roof_tolerance {
            // Over the roof (within tolerance): treat as ground, not a wall.
            if roof > ground {
                ground = roof;
                ground_is_terrain = false;
                pad_under = None;
            }
        } else {
            let speed_before = craft.horizontal_speed();
            match push_out_box(
                &mut craft.position,
                structure.center_x,
                structure.center_z,
                structure.half_width,
                structure.half_depth,
            ) {
                Some(dir) => {
                    // Reflect-and-dampen with an outward impulse, then
                    // enforce a minimum escape speed along the push axis.
                    if dir.x != 0.0 {
                        craft.velocity.x =
                            -craft.velocity.x * tuning.bounce_factor + dir.x * tuning.push_force;
                        if craft.velocity.x * dir.x < tuning.min_escape_speed {
                            craft.velocity.x = dir.x * tuning.min_escape_speed;
                        }
                    } else {
                        craft.velocity.z =
                            -craft.velocity.z * tuning.bounce_factor + dir.z * tuning.push_force;
                        if craft.velocity.z * dir.z < tuning.min_escape_speed {
                            craft.velocity.z = dir.z * tuning.min_escape_speed;
                        }
                    }
                }
                None => {
                    // Degenerate push-out: simple velocity reversal.
                    craft.velocity.x = -craft.velocity.x * tuning.bounce_factor;
                    craft.velocity.z = -craft.velocity.z * tuning.bounce_factor;
                }
            }
            if speed_before > tuning.structure_damage_threshold {
                events.push(DamageEvent {
                    cause: DamageCause::StructureHit,
                    amount: speed_before * tuning.structure_damage_scale,
                    speed: speed_before,
                    hard: speed_before > tuning.hard_impact_threshold,
                });
            }
        }
    }

    // Vertical resolution against the effective ground.
    let floor = ground + tuning.ground_offset;
    let mut grounded = false;
    if craft.position.y < floor {
        let in_water =
            ground_is_terrain && world.terrain.is_water(craft.position.x, craft.position.z);
        if in_water && !craft.invulnerable {
            events.push(DamageEvent {
                cause: DamageCause::Water,
                amount: f32::INFINITY,
                speed: craft.velocity.length(),
                hard: true,
            });
        } else if !in_water {
            let multiplier = orientation_multiplier(craft.world_up().y, tuning);

            let impact_speed = (-craft.velocity.y).max(0.0);
            if impact_speed > tuning.vertical_damage_threshold {
                if impact_speed > tuning.hard_impact_threshold {
                    log::debug!(
                        "hard landing at {:?}: impact speed {:.3}",
                        craft.position,
                        impact_speed
                    );
                }
                events.push(DamageEvent {
                    cause: DamageCause::VerticalImpact,
                    amount: impact_speed
                        * tuning.vertical_damage_scale
                        * (1.0 + impact_speed * 10.0)
                        * multiplier,
                    speed: impact_speed,
                    hard: impact_speed > tuning.hard_impact_threshold,
                });
            }

            let scrape_speed = craft.horizontal_speed();
            if scrape_speed > tuning.scrape_damage_threshold {
                events.push(DamageEvent {
                    cause: DamageCause::Scrape,
                    amount: scrape_speed
                        * tuning.vertical_damage_scale
                        * 0.5
                        * (1.0 + scrape_speed * 5.0)
                        * multiplier,
                    speed: scrape_speed,
                    hard: scrape_speed > tuning.hard_scrape_threshold,
                });
            }
        }

        craft.position.y = floor;
        craft.velocity.y = 0.0;
        let keep = tuning.grounded_friction.powf(time_scale(dt));
        craft.velocity.x *= keep;
        craft.velocity.z *= keep;
        grounded = true;
    }
    craft.grounded = grounded;

    CollisionOutcome {
        ground_height: ground,
        grounded,
        on_pad: if grounded { pad_under } else { None },
        events,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_core::Transform;
    use glam::Quat;
    use world::{FlatTerrain, Pad, Structure};

    const DT: f32 = 1.0 / 60.0;

    fn flat_world() -> WorldGeometry {
        WorldGeometry::new(Box::new(FlatTerrain::new(0.0)))
    }

    fn craft_at(position: Vec3) -> Craft {
        Craft::new(0, Transform::from_position(position), 100.0)
    }

    /// A gentle touchdown rests at ground + offset with vy zeroed and no
    /// damage events.
    #[test]
    fn soft_landing_rests_on_ground() {
        let world = flat_world();
        let tuning = CollisionTuning::default();
        let mut craft = craft_at(Vec3::new(0.0, 0.3, 0.0));
        craft.velocity.y = -0.05;
        let outcome = resolve(&mut craft, &world, &tuning, DT);
        assert_eq!(craft.position.y, tuning.ground_offset);
        assert_eq!(craft.velocity.y, 0.0);
        assert!(outcome.grounded);
        assert!(outcome.events.is_empty());
    }

    /// A hard vertical impact emits a damage event scaled by speed, and a
    /// fast one is flagged hard.
    #[test]
    fn hard_landing_emits_damage() {
        let world = flat_world();
        let tuning = CollisionTuning::default();
        let mut craft = craft_at(Vec3::new(0.0, 0.2, 0.0));
        craft.velocity.y = -0.5;
        let outcome = resolve(&mut craft, &world, &tuning, DT);
        assert_eq!(outcome.events.len(), 1);
        let event = outcome.events[0];
        assert_eq!(event.cause, DamageCause::VerticalImpact);
        assert!(event.hard);
        assert!(event.amount > 0.0);
    }

    /// The full drop scenario: falling from y=10 with vy=-2 under repeated
    /// ticks lands, zeroes vy, and fires at least one damage event.
    #[test]
    fn drop_scenario_lands_and_damages() {
        let world = flat_world();
        let physics = crate::tuning::PhysicsTuning::default();
        let tuning = CollisionTuning::default();
        let mut craft = craft_at(Vec3::new(0.0, 10.0, 0.0));
        craft.velocity.y = -2.0;
        let mut damage_events = 0;
        for _ in 0..600 {
            crate::integrator::integrate(&mut craft, &physics, DT);
            let outcome = resolve(&mut craft, &world, &tuning, DT);
            damage_events += outcome.events.len();
            if outcome.grounded {
                break;
            }
        }
        assert!(craft.grounded);
        assert_eq!(craft.position.y, tuning.ground_offset);
        assert_eq!(craft.velocity.y, 0.0);
        assert!(damage_events >= 1);
    }

    /// Water contact is lethal for a vulnerable craft, and ignored for an
    /// invulnerable one.
    #[test]
    fn water_is_lethal_unless_invulnerable() {
        let world = WorldGeometry::new(Box::new(FlatTerrain::water()));
        let tuning = CollisionTuning::default();

        let mut craft = craft_at(Vec3::new(0.0, 0.1, 0.0));
        craft.velocity.y = -0.01;
        let outcome = resolve(&mut craft, &world, &tuning, DT);
        assert!(outcome.events.iter().any(|e| e.cause == DamageCause::Water));

        let mut safe = craft_at(Vec3::new(0.0, 0.1, 0.0));
        safe.invulnerable = true;
        safe.velocity.y = -0.01;
        let outcome = resolve(&mut safe, &world, &tuning, DT);
        assert!(outcome.events.is_empty());
    }

    /// A craft inside a structure's side volume is pushed out along the
    /// least-penetration axis and its opposing velocity is never increased.
    #[test]
    fn structure_side_push_out() {
        let structure = Structure::new(0.0, 0.0, 2.0, 2.0, 0.0, 10.0);
        let world = flat_world().with_structures(vec![structure]);
        let tuning = CollisionTuning::default();

        let mut craft = craft_at(Vec3::new(1.4, 5.0, 0.2));
        craft.velocity = Vec3::new(-0.6, 0.0, 0.0); // flying into the box
        resolve(&mut craft, &world, &tuning, DT);

        // Outside along the push axis.
        assert!((craft.position.x - 0.0).abs() >= structure.half_width);
        // Velocity into the box is gone; outward speed is bounded by the
        // reflected magnitude plus push impulse.
        assert!(craft.velocity.x >= 0.0);
        assert!(craft.velocity.x.abs() <= 0.6 * tuning.bounce_factor + tuning.push_force + 1e-5);
    }

    /// A fast side hit emits structure damage scaled by pre-collision speed.
    #[test]
    fn structure_side_hit_damages() {
        let world = flat_world().with_structures(vec![Structure::new(0.0, 0.0, 2.0, 2.0, 0.0, 10.0)]);
        let tuning = CollisionTuning::default();
        let mut craft = craft_at(Vec3::new(1.5, 5.0, 0.0));
        craft.velocity = Vec3::new(-0.4, 0.0, 0.0);
        let outcome = resolve(&mut craft, &world, &tuning, DT);
        let hit = outcome
            .events
            .iter()
            .find(|e| e.cause == DamageCause::StructureHit)
            .expect("expected a structure hit event");
        assert!((hit.speed - 0.4).abs() < 1e-5);
    }

    /// Dead-center inside a box the push direction is undefined: velocity
    /// is reversed instead.
    #[test]
    fn degenerate_push_out_reverses_velocity() {
        let world = flat_world().with_structures(vec![Structure::new(0.0, 0.0, 2.0, 2.0, 0.0, 10.0)]);
        let tuning = CollisionTuning::default();
        let mut craft = craft_at(Vec3::new(0.0, 5.0, 0.0));
        craft.velocity = Vec3::new(0.3, 0.0, -0.2);
        resolve(&mut craft, &world, &tuning, DT);
        assert!(craft.velocity.x < 0.0);
        assert!(craft.velocity.z > 0.0);
    }

    /// Landing on a structure roof uses the roof as ground; a craft just
    /// below the roof within tolerance still counts as a roof landing.
    #[test]
    fn roof_landing() {
        let world = flat_world().with_structures(vec![Structure::new(0.0, 0.0, 3.0, 3.0, 0.0, 8.0)]);
        let tuning = CollisionTuning::default();
        let mut craft = craft_at(Vec3::new(0.0, 8.1, 0.0));
        craft.velocity.y = -0.05;
        let outcome = resolve(&mut craft, &world, &tuning, DT);
        assert_eq!(outcome.ground_height, 8.0);
        assert!(outcome.grounded);
        assert_eq!(craft.position.y, 8.0 + tuning.ground_offset);
    }

    /// Pad tops are landing surfaces only from above; the side volume
    /// pushes out and halves horizontal velocity.
    #[test]
    fn pad_top_and_side() {
        let pad = Pad::new(4, 0.0, 0.0, 3.0, 3.0, 0.0, 2.0);
        let tuning = CollisionTuning::default();

        // From above: rests on the pad top and reports the pad id.
        let world = flat_world().with_pads(vec![pad]);
        let mut craft = craft_at(Vec3::new(0.0, 2.1, 0.0));
        craft.velocity.y = -0.05;
        let outcome = resolve(&mut craft, &world, &tuning, DT);
        assert_eq!(outcome.ground_height, 2.0);
        assert_eq!(outcome.on_pad, Some(4));

        // From the side: pushed out, horizontal velocity halved.
        let world = flat_world().with_pads(vec![pad]);
        let mut craft = craft_at(Vec3::new(2.6, 1.0, 0.0));
        craft.velocity = Vec3::new(-0.4, 0.0, 0.1);
        resolve(&mut craft, &world, &tuning, DT);
        assert!(craft.position.x >= 3.0);
        assert!((craft.velocity.x + 0.2).abs() < 1e-5);
        assert!((craft.velocity.z - 0.05).abs() < 1e-5);
    }

    /// The highest of terrain and pad top wins as effective ground.
    #[test]
    fn highest_surface_wins() {
        let world = WorldGeometry::new(Box::new(FlatTerrain::new(5.0)))
            .with_pads(vec![Pad::new(1, 0.0, 0.0, 3.0, 3.0, 0.0, 2.0)]);
        let tuning = CollisionTuning::default();
        let mut craft = craft_at(Vec3::new(0.0, 5.2, 0.0));
        craft.velocity.y = -0.05;
        let outcome = resolve(&mut craft, &world, &tuning, DT);
        // Terrain at 5.0 is above the pad top at 2.0.
        assert_eq!(outcome.ground_height, 5.0);
        assert_eq!(outcome.on_pad, None);
    }

    /// Orientation multiplier: exactly 1 upright, above 1 once tilted past
    /// up_y = 0.5, and monotonically non-decreasing toward inverted.
    #[test]
    fn orientation_multiplier_profile() {
        let tuning = CollisionTuning::default();
        assert_eq!(orientation_multiplier(1.0, &tuning), 1.0);
        assert!(orientation_multiplier(0.49, &tuning) > 1.0);
        let mut previous = orientation_multiplier(1.0, &tuning);
        let mut y = 1.0_f32;
        while y >= -1.0 {
            let m = orientation_multiplier(y, &tuning);
            assert!(m + 1e-6 >= previous, "multiplier decreased at up_y {}", y);
            previous = m;
            y -= 0.05;
        }
        assert_eq!(
            orientation_multiplier(-1.0, &tuning),
            tuning.inverted_multiplier
        );
    }

    /// A tilted craft takes more landing damage than an upright one at the
    /// same impact speed.
    #[test]
    fn tilted_landing_hurts_more() {
        let tuning = CollisionTuning::default();
        let world = flat_world();

        let mut upright = craft_at(Vec3::new(0.0, 0.2, 0.0));
        upright.velocity.y = -0.4;
        let upright_damage: f32 = resolve(&mut upright, &world, &tuning, DT)
            .events
            .iter()
            .map(|e| e.amount)
            .sum();

        let mut tilted = craft_at(Vec3::new(0.0, 0.2, 0.0));
        tilted.orientation = Quat::from_rotation_z(std::f32::consts::FRAC_PI_2);
        tilted.velocity.y = -0.4;
        let tilted_damage: f32 = resolve(&mut tilted, &world, &tuning, DT)
            .events
            .iter()
            .map(|e| e.amount)
            .sum();

        assert!(tilted_damage > upright_damage);
    }
}
