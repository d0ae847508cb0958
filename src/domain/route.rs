use serde::{Deserialize, Serialize};

use super::{Coordinate, WaypointCategory};

fn default_true() -> bool {
    true
}
fn default_max_detour_factor() -> f64 {
    2.0
}
fn default_precision() -> f64 {
    20.0
}

/// Per-request routing switches
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RouteOptions {
    /// Run the land-avoidance search when the direct line crosses land
    #[serde(default = "default_true")]
    pub avoid_land: bool,
    /// Consider canal shortcuts
    #[serde(default = "default_true")]
    pub use_canals: bool,
    /// Routes longer than `direct * max_detour_factor` get a warning
    #[serde(default = "default_max_detour_factor")]
    pub max_detour_factor: f64,
    /// Kilometres per escape step
    #[serde(default = "default_precision")]
    pub precision: f64,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            avoid_land: true,
            use_canals: true,
            max_detour_factor: default_max_detour_factor(),
            precision: default_precision(),
        }
    }
}

impl RouteOptions {
    pub fn with_avoid_land(mut self, avoid_land: bool) -> Self {
        self.avoid_land = avoid_land;
        self
    }

    pub fn with_canals(mut self, use_canals: bool) -> Self {
        self.use_canals = use_canals;
        self
    }

    pub fn with_max_detour_factor(mut self, factor: f64) -> Self {
        self.max_detour_factor = factor;
        self
    }

    pub fn with_precision(mut self, precision_km: f64) -> Self {
        self.precision = precision_km;
        self
    }
}

/// A named stop annotated on a route
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteWaypoint {
    pub name: String,
    pub coordinate: Coordinate,
    pub category: WaypointCategory,
}

impl RouteWaypoint {
    pub fn new(name: impl Into<String>, coordinate: Coordinate, category: WaypointCategory) -> Self {
        Self {
            name: name.into(),
            coordinate,
            category,
        }
    }
}

/// Result of a routing request. Never mutated after it is returned.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaritimeRoute {
    pub coordinates: Vec<Coordinate>,
    /// Kilometres
    pub distance: f64,
    /// Hours
    pub estimated_time: f64,
    pub warnings: Vec<String>,
    pub waypoints: Vec<RouteWaypoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canal: Option<String>,
}

impl MaritimeRoute {
    pub fn start(&self) -> Option<Coordinate> {
        self.coordinates.first().copied()
    }

    pub fn end(&self) -> Option<Coordinate> {
        self.coordinates.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_options_defaults_from_empty_toml() {
        let options: RouteOptions = toml::from_str("").unwrap();
        assert_eq!(options, RouteOptions::default());
        assert!(options.avoid_land);
        assert_eq!(options.precision, 20.0);
    }

    #[test]
    fn test_route_serializes_camel_case() {
        let route = MaritimeRoute {
            coordinates: vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0)],
            distance: 111.2,
            estimated_time: 3.0,
            warnings: Vec::new(),
            waypoints: Vec::new(),
            canal: None,
        };
        let json = serde_json::to_value(&route).unwrap();
        assert!(json.get("estimatedTime").is_some());
        assert!(json.get("canal").is_none());
        assert_eq!(json["coordinates"][1][0], 1.0);
    }
}
