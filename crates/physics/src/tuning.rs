//! Tuned physics constants. All velocity units are world units per 60 Hz
//! baseline step; damping values are the per-step retain factor.

use serde::{Deserialize, Serialize};

/// Integrator tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsTuning {
    /// Gravity added to vertical velocity each baseline step (negative = down).
    #[serde(default = "default_gravity")]
    pub gravity: f32,
    /// Velocity added along the craft's world-up per enabled thruster per step.
    #[serde(default = "default_thrust")]
    pub thrust: f32,
    /// Pitch rate contributed per unit of thruster Z offset.
    #[serde(default = "default_pitch_torque")]
    pub pitch_torque: f32,
    /// Roll rate contributed per unit of thruster X offset.
    #[serde(default = "default_roll_torque")]
    pub roll_torque: f32,
    /// Per-step linear velocity retain factor.
    #[serde(default = "default_linear_damping")]
    pub linear_damping: f32,
    /// Per-step angular rate retain factor.
    #[serde(default = "default_angular_damping")]
    pub angular_damping: f32,
    /// Hard altitude ceiling.
    #[serde(default = "default_ceiling")]
    pub ceiling: f32,
    /// Per-step orientation retain factor for the auto-level assist slerp.
    #[serde(default = "default_auto_level_retain")]
    pub auto_level_retain: f32,
    /// Per-step pitch/roll rate retain factor while auto-leveling.
    #[serde(default = "default_auto_level_angular_retain")]
    pub auto_level_angular_retain: f32,
}

fn default_gravity() -> f32 {
    -0.01
}
fn default_thrust() -> f32 {
    0.02
}
fn default_pitch_torque() -> f32 {
    0.002
}
fn default_roll_torque() -> f32 {
    0.002
}
fn default_linear_damping() -> f32 {
    0.98
}
fn default_angular_damping() -> f32 {
    0.94
}
fn default_ceiling() -> f32 {
    250.0
}
fn default_auto_level_retain() -> f32 {
    0.95
}
fn default_auto_level_angular_retain() -> f32 {
    0.8
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            gravity: default_gravity(),
            thrust: default_thrust(),
            pitch_torque: default_pitch_torque(),
            roll_torque: default_roll_torque(),
            linear_damping: default_linear_damping(),
            angular_damping: default_angular_damping(),
            ceiling: default_ceiling(),
            auto_level_retain: default_auto_level_retain(),
            auto_level_angular_retain: default_auto_level_angular_retain(),
        }
    }
}

/// Collision resolver tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollisionTuning {
    /// Vertical distance between the craft origin and its lowest collision
    /// extent; resting height is `ground + ground_offset`.
    #[serde(default = "default_ground_offset")]
    pub ground_offset: f32,
    /// How far below a structure roof the craft center may sit while still
    /// counting as a roof landing rather than a side hit. Empirically tuned:
    /// too small and the craft bounces off roof edges, too large and it
    /// teleports up walls.
    #[serde(default = "default_roof_tolerance")]
    pub roof_tolerance: f32,
    /// Velocity reflection factor on structure side hits.
    #[serde(default = "default_bounce_factor")]
    pub bounce_factor: f32,
    /// Outward impulse added along the push axis on side hits.
    #[serde(default = "default_push_force")]
    pub push_force: f32,
    /// Minimum outward speed after a side hit, so the craft never re-enters
    /// the box on the next tick.
    #[serde(default = "default_min_escape_speed")]
    pub min_escape_speed: f32,
    /// Per-step horizontal velocity retain factor while grounded.
    #[serde(default = "default_grounded_friction")]
    pub grounded_friction: f32,
    /// Vertical impact damage coefficient.
    #[serde(default = "default_vertical_damage_scale")]
    pub vertical_damage_scale: f32,
    /// Impact speed below which a vertical landing is damage-free.
    #[serde(default = "default_vertical_damage_threshold")]
    pub vertical_damage_threshold: f32,
    /// Impact speed above which the landing also emits a hard-impact event
    /// (camera shake, audio, debris).
    #[serde(default = "default_hard_impact_threshold")]
    pub hard_impact_threshold: f32,
    /// Horizontal speed below which ground contact does not scrape.
    #[serde(default = "default_scrape_damage_threshold")]
    pub scrape_damage_threshold: f32,
    /// Horizontal speed above which a scrape also emits a hard event.
    #[serde(default = "default_hard_scrape_threshold")]
    pub hard_scrape_threshold: f32,
    /// Structure side-hit damage coefficient (applied to pre-collision speed).
    #[serde(default = "default_structure_damage_scale")]
    pub structure_damage_scale: f32,
    /// Speed below which a structure side hit is damage-free.
    #[serde(default = "default_structure_damage_threshold")]
    pub structure_damage_threshold: f32,
    /// Damage multiplier when the craft's up vector is fully horizontal.
    #[serde(default = "default_side_multiplier")]
    pub side_multiplier: f32,
    /// Damage multiplier when the craft is fully inverted.
    #[serde(default = "default_inverted_multiplier")]
    pub inverted_multiplier: f32,
}

fn default_ground_offset() -> f32 {
    0.5
}
fn default_roof_tolerance() -> f32 {
    0.75
}
fn default_bounce_factor() -> f32 {
    0.5
}
fn default_push_force() -> f32 {
    0.05
}
fn default_min_escape_speed() -> f32 {
    0.02
}
fn default_grounded_friction() -> f32 {
    0.85
}
fn default_vertical_damage_scale() -> f32 {
    20.0
}
fn default_vertical_damage_threshold() -> f32 {
    0.15
}
fn default_hard_impact_threshold() -> f32 {
    0.3
}
fn default_scrape_damage_threshold() -> f32 {
    0.2
}
fn default_hard_scrape_threshold() -> f32 {
    0.45
}
fn default_structure_damage_scale() -> f32 {
    30.0
}
fn default_structure_damage_threshold() -> f32 {
    0.1
}
fn default_side_multiplier() -> f32 {
    1.5
}
fn default_inverted_multiplier() -> f32 {
    2.5
}

impl Default for CollisionTuning {
    fn default() -> Self {
        Self {
            ground_offset: default_ground_offset(),
            roof_tolerance: default_roof_tolerance(),
            bounce_factor: default_bounce_factor(),
            push_force: default_push_force(),
            min_escape_speed: default_min_escape_speed(),
            grounded_friction: default_grounded_friction(),
            vertical_damage_scale: default_vertical_damage_scale(),
            vertical_damage_threshold: default_vertical_damage_threshold(),
            hard_impact_threshold: default_hard_impact_threshold(),
            scrape_damage_threshold: default_scrape_damage_threshold(),
            hard_scrape_threshold: default_hard_scrape_threshold(),
            structure_damage_scale: default_structure_damage_scale(),
            structure_damage_threshold: default_structure_damage_threshold(),
            side_multiplier: default_side_multiplier(),
            inverted_multiplier: default_inverted_multiplier(),
        }
    }
}
