//! Session configuration. Loaded from `openvtol.ron` at startup; every
//! empirically-tuned constant lives here with a default.

use std::path::{Path, PathBuf};

use camera::CameraTuning;
use physics::{CollisionTuning, PhysicsTuning};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a config file could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

/// Persistent session settings. Loaded from `openvtol.ron` in the current
/// directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightConfig {
    #[serde(default)]
    pub physics: PhysicsTuning,
    #[serde(default)]
    pub collision: CollisionTuning,
    #[serde(default)]
    pub camera: CameraTuning,
    /// Seconds before the countdown hands control to the pilot.
    #[serde(default = "default_countdown")]
    pub countdown: f32,
    /// Seconds of gameplay that keep running after a victory predicate
    /// fires, before the craft freezes and the camera orbits.
    #[serde(default = "default_victory_grace")]
    pub victory_grace: f32,
    /// Seconds of stillness on a qualifying pad before repair starts.
    #[serde(default = "default_repair_delay")]
    pub repair_delay: f32,
    /// Health restored per second while repairing.
    #[serde(default = "default_repair_rate")]
    pub repair_rate: f32,
    /// Total speed below which the craft counts as still for repair.
    #[serde(default = "default_repair_speed_epsilon")]
    pub repair_speed_epsilon: f32,
    /// Craft hit points at spawn.
    #[serde(default = "default_max_health")]
    pub max_health: f32,
    /// Whether the integrator auto-levels the craft each frame.
    #[serde(default = "default_true")]
    pub auto_level: bool,
}

fn default_countdown() -> f32 {
    3.0
}
fn default_victory_grace() -> f32 {
    2.5
}
fn default_repair_delay() -> f32 {
    1.5
}
fn default_repair_rate() -> f32 {
    10.0
}
fn default_repair_speed_epsilon() -> f32 {
    0.01
}
fn default_max_health() -> f32 {
    100.0
}
fn default_true() -> bool {
    true
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsTuning::default(),
            collision: CollisionTuning::default(),
            camera: CameraTuning::default(),
            countdown: default_countdown(),
            victory_grace: default_victory_grace(),
            repair_delay: default_repair_delay(),
            repair_rate: default_repair_rate(),
            repair_speed_epsilon: default_repair_speed_epsilon(),
            max_health: default_max_health(),
            auto_level: default_true(),
        }
    }
}

impl FlightConfig {
    /// Load config from `openvtol.ron`. If the file is missing, returns the
    /// defaults; if it is invalid, warns and returns the defaults.
    pub fn load() -> Self {
        let path = config_path();
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(ConfigError::Io { .. }) => Self::default(),
            Err(e) => {
                log::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save current config to `openvtol.ron`. Logs on error.
    pub fn save(&self) {
        let path = config_path();
        if let Ok(s) = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default()) {
            if let Err(e) = std::fs::write(&path, s) {
                log::warn!("Could not write config to {:?}: {}", path, e);
            }
        }
    }
}

fn config_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("openvtol.ron")
}
