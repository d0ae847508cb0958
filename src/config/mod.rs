use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::RouteOptions;

/// Fixed service speed used for transit estimates: 37 km/h, about 20 knots.
pub const AVERAGE_SPEED_KMH: f64 = 37.0;

fn default_buffer_km() -> f64 {
    15.0
}
fn default_min_canal_saving_km() -> f64 {
    300.0
}
fn default_escape_base_offset_deg() -> f64 {
    0.8
}
fn default_escape_max_attempts() -> u32 {
    10
}
fn default_escape_multiplier_step() -> f64 {
    0.5
}
fn default_emergency_multiplier() -> f64 {
    10.0
}
fn default_port_nudge_deg() -> f64 {
    0.5
}
fn default_port_connection_step_km() -> f64 {
    50.0
}
fn default_waypoint_corridor_km() -> f64 {
    500.0
}
fn default_waypoint_margin_deg() -> f64 {
    5.0
}
fn default_min_direct_steps() -> usize {
    15
}
fn default_min_canal_leg_steps() -> usize {
    10
}
fn default_fetch_timeout_secs() -> u64 {
    60
}

/// Tuned constants of the routing engine.
///
/// The defaults are empirically chosen; change them only with a reason.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct EngineConfig {
    /// Safety margin added around every land polygon
    #[serde(default = "default_buffer_km")]
    pub buffer_km: f64,
    /// A canal is only used when it saves strictly more than this
    #[serde(default = "default_min_canal_saving_km")]
    pub min_canal_saving_km: f64,
    /// Base perpendicular offset of an escape point, in degrees
    #[serde(default = "default_escape_base_offset_deg")]
    pub escape_base_offset_deg: f64,
    #[serde(default = "default_escape_max_attempts")]
    pub escape_max_attempts: u32,
    /// Added to the multiplier magnitude after every rejected attempt
    #[serde(default = "default_escape_multiplier_step")]
    pub escape_multiplier_step: f64,
    #[serde(default = "default_emergency_multiplier")]
    pub emergency_multiplier: f64,
    /// Perpendicular nudge for blocked port-connection points, in degrees
    #[serde(default = "default_port_nudge_deg")]
    pub port_nudge_deg: f64,
    /// One connection point per this many kilometres (clamped to 2..=5)
    #[serde(default = "default_port_connection_step_km")]
    pub port_connection_step_km: f64,
    #[serde(default = "default_waypoint_corridor_km")]
    pub waypoint_corridor_km: f64,
    #[serde(default = "default_waypoint_margin_deg")]
    pub waypoint_margin_deg: f64,
    #[serde(default = "default_min_direct_steps")]
    pub min_direct_steps: usize,
    #[serde(default = "default_min_canal_leg_steps")]
    pub min_canal_leg_steps: usize,
    /// Douglas-Peucker tolerance applied to land rings on load (0 = off)
    #[serde(default)]
    pub simplify_epsilon_deg: f64,
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            buffer_km: default_buffer_km(),
            min_canal_saving_km: default_min_canal_saving_km(),
            escape_base_offset_deg: default_escape_base_offset_deg(),
            escape_max_attempts: default_escape_max_attempts(),
            escape_multiplier_step: default_escape_multiplier_step(),
            emergency_multiplier: default_emergency_multiplier(),
            port_nudge_deg: default_port_nudge_deg(),
            port_connection_step_km: default_port_connection_step_km(),
            waypoint_corridor_km: default_waypoint_corridor_km(),
            waypoint_margin_deg: default_waypoint_margin_deg(),
            min_direct_steps: default_min_direct_steps(),
            min_canal_leg_steps: default_min_canal_leg_steps(),
            simplify_epsilon_deg: 0.0,
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

impl EngineConfig {
    pub fn with_buffer_km(mut self, buffer_km: f64) -> Self {
        self.buffer_km = buffer_km;
        self
    }

    pub fn with_min_canal_saving_km(mut self, saving_km: f64) -> Self {
        self.min_canal_saving_km = saving_km;
        self
    }
}

/// Settings read from `seaway.toml`
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    /// Land dataset: file path or http(s) URL
    #[serde(default)]
    pub land: Option<String>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub route: RouteOptions,
}

impl FileConfig {
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        log::warn!("Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("seaway.toml"));
    paths.push(PathBuf::from(".seaway.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("seaway").join("config.toml"));
        paths.push(config_dir.join("seaway.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".seaway.toml"));
        paths.push(home.join(".config").join("seaway").join("config.toml"));
    }

    paths
}
