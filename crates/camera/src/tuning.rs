//! Camera tuning. Retain factors are per 60 Hz baseline step; rates are per
//! second.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraTuning {
    /// Per-step retain factor for camera position convergence.
    #[serde(default = "default_position_retain")]
    pub position_retain: f32,
    /// Per-step retain factor for pull-back distance convergence.
    #[serde(default = "default_distance_retain")]
    pub distance_retain: f32,
    /// Pull-back distance at rest.
    #[serde(default = "default_base_distance")]
    pub base_distance: f32,
    /// Extra pull-back per unit of craft speed.
    #[serde(default = "default_distance_speed_scale")]
    pub distance_speed_scale: f32,
    /// Per-step retain factor for the Follow-mode orientation slerp.
    #[serde(default = "default_follow_retain")]
    pub follow_retain: f32,
    /// Bound on the vertical/total speed ratio that drives Follow pitch.
    #[serde(default = "default_follow_pitch_ratio")]
    pub follow_pitch_ratio: f32,
    /// Proportional gain (per second) for Focus/Orbit steering.
    #[serde(default = "default_focus_gain")]
    pub focus_gain: f32,
    /// Free-look rotation speed from analog input, radians per second.
    #[serde(default = "default_free_look_speed")]
    pub free_look_speed: f32,
    /// Radians of rotation per pointer-drag pixel.
    #[serde(default = "default_drag_sensitivity")]
    pub drag_sensitivity: f32,
    /// Pitch limit for Free/Follow modes, degrees.
    #[serde(default = "default_free_pitch_limit_deg")]
    pub free_pitch_limit_deg: f32,
    /// Pitch limit for target-facing modes, degrees (just under vertical).
    #[serde(default = "default_focus_pitch_limit_deg")]
    pub focus_pitch_limit_deg: f32,
    /// Orbit angular rate, radians per second.
    #[serde(default = "default_orbit_rate")]
    pub orbit_rate: f32,
    /// Orbit radius around the frozen craft position.
    #[serde(default = "default_orbit_radius")]
    pub orbit_radius: f32,
    /// Orbit height above the frozen craft position.
    #[serde(default = "default_orbit_height")]
    pub orbit_height: f32,
}

fn default_position_retain() -> f32 {
    0.85
}
fn default_distance_retain() -> f32 {
    0.9
}
fn default_base_distance() -> f32 {
    6.0
}
fn default_distance_speed_scale() -> f32 {
    3.0
}
fn default_follow_retain() -> f32 {
    0.9
}
fn default_follow_pitch_ratio() -> f32 {
    0.6
}
fn default_focus_gain() -> f32 {
    5.0
}
fn default_free_look_speed() -> f32 {
    2.5
}
fn default_drag_sensitivity() -> f32 {
    0.005
}
fn default_free_pitch_limit_deg() -> f32 {
    86.0
}
fn default_focus_pitch_limit_deg() -> f32 {
    89.5
}
fn default_orbit_rate() -> f32 {
    0.6
}
fn default_orbit_radius() -> f32 {
    9.0
}
fn default_orbit_height() -> f32 {
    4.0
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            position_retain: default_position_retain(),
            distance_retain: default_distance_retain(),
            base_distance: default_base_distance(),
            distance_speed_scale: default_distance_speed_scale(),
            follow_retain: default_follow_retain(),
            follow_pitch_ratio: default_follow_pitch_ratio(),
            focus_gain: default_focus_gain(),
            free_look_speed: default_free_look_speed(),
            drag_sensitivity: default_drag_sensitivity(),
            free_pitch_limit_deg: default_free_pitch_limit_deg(),
            focus_pitch_limit_deg: default_focus_pitch_limit_deg(),
            orbit_rate: default_orbit_rate(),
            orbit_radius: default_orbit_radius(),
            orbit_height: default_orbit_height(),
        }
    }
}
