pub mod data;
pub mod selection;

pub use selection::{
    CanalPassage, canal_saving_km, find_best_canal, find_best_canal_against,
    find_strategic_waypoints,
};

use crate::domain::{Canal, StrategicWaypoint};

/// Canals and strategic waypoints known to the engine; read-only
#[derive(Debug, Clone)]
pub struct Registry {
    pub canals: Vec<Canal>,
    pub waypoints: Vec<StrategicWaypoint>,
}

impl Registry {
    pub fn new(canals: Vec<Canal>, waypoints: Vec<StrategicWaypoint>) -> Self {
        Self { canals, waypoints }
    }

    /// The built-in tables from [`data`]
    pub fn builtin() -> Self {
        Self {
            canals: data::CANALS.to_vec(),
            waypoints: data::STRATEGIC_WAYPOINTS.to_vec(),
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
