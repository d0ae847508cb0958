use serde::Serialize;

use super::Coordinate;

/// A navigable man-made or natural passage with distinct entry and exit
#[derive(Debug, Clone, PartialEq)]
pub struct Canal {
    pub name: &'static str,
    pub entry: Coordinate,
    pub exit: Coordinate,
    /// Nominal navigable width in metres
    pub width_m: f64,
}

/// Classification used by map consumers to pick a marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WaypointCategory {
    Port,
    Canal,
    Waypoint,
}

/// A named point of interest such as a cape or strait
#[derive(Debug, Clone, PartialEq)]
pub struct StrategicWaypoint {
    pub name: &'static str,
    pub coordinate: Coordinate,
    pub category: WaypointCategory,
    pub description: &'static str,
}
