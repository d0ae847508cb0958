//! Static passage and waypoint tables.
//!
//! Coordinates are (lon, lat). Canal entry/exit are the two ends of the
//! navigable passage; selection orients them relative to the route.

use crate::domain::{Canal, Coordinate, StrategicWaypoint, WaypointCategory};

pub static CANALS: [Canal; 6] = [
    Canal {
        name: "Suez Canal",
        entry: Coordinate::new(32.30, 31.26),
        exit: Coordinate::new(32.57, 29.93),
        width_m: 205.0,
    },
    Canal {
        name: "Panama Canal",
        entry: Coordinate::new(-79.92, 9.35),
        exit: Coordinate::new(-79.57, 8.95),
        width_m: 55.0,
    },
    Canal {
        name: "Kiel Canal",
        entry: Coordinate::new(9.14, 53.89),
        exit: Coordinate::new(10.15, 54.37),
        width_m: 162.0,
    },
    Canal {
        name: "Corinth Canal",
        entry: Coordinate::new(22.955, 37.94),
        exit: Coordinate::new(23.004, 37.915),
        width_m: 24.6,
    },
    Canal {
        name: "Bosphorus",
        entry: Coordinate::new(29.12, 41.23),
        exit: Coordinate::new(28.99, 41.0),
        width_m: 700.0,
    },
    Canal {
        name: "Dardanelles",
        entry: Coordinate::new(26.68, 40.42),
        exit: Coordinate::new(26.18, 40.05),
        width_m: 1200.0,
    },
];

pub static STRATEGIC_WAYPOINTS: [StrategicWaypoint; 14] = [
    StrategicWaypoint {
        name: "Strait of Gibraltar",
        coordinate: Coordinate::new(-5.6, 35.95),
        category: WaypointCategory::Waypoint,
        description: "Atlantic gateway to the Mediterranean",
    },
    StrategicWaypoint {
        name: "Dover Strait",
        coordinate: Coordinate::new(1.45, 51.0),
        category: WaypointCategory::Waypoint,
        description: "Narrowest point of the English Channel",
    },
    StrategicWaypoint {
        name: "Strait of Malacca",
        coordinate: Coordinate::new(100.35, 3.2),
        category: WaypointCategory::Waypoint,
        description: "Main passage between the Indian Ocean and the South China Sea",
    },
    StrategicWaypoint {
        name: "Singapore Strait",
        coordinate: Coordinate::new(104.0, 1.2),
        category: WaypointCategory::Waypoint,
        description: "Southern exit of the Malacca route",
    },
    StrategicWaypoint {
        name: "Strait of Hormuz",
        coordinate: Coordinate::new(56.5, 26.5),
        category: WaypointCategory::Waypoint,
        description: "Entrance to the Persian Gulf",
    },
    StrategicWaypoint {
        name: "Bab-el-Mandeb",
        coordinate: Coordinate::new(43.35, 12.6),
        category: WaypointCategory::Waypoint,
        description: "Southern entrance to the Red Sea",
    },
    StrategicWaypoint {
        name: "Cape of Good Hope",
        coordinate: Coordinate::new(18.47, -34.36),
        category: WaypointCategory::Waypoint,
        description: "Route around southern Africa",
    },
    StrategicWaypoint {
        name: "Cape Horn",
        coordinate: Coordinate::new(-67.27, -55.98),
        category: WaypointCategory::Waypoint,
        description: "Southern tip of South America",
    },
    StrategicWaypoint {
        name: "Suez Canal",
        coordinate: Coordinate::new(32.35, 30.6),
        category: WaypointCategory::Canal,
        description: "Mediterranean to Red Sea",
    },
    StrategicWaypoint {
        name: "Panama Canal",
        coordinate: Coordinate::new(-79.7, 9.1),
        category: WaypointCategory::Canal,
        description: "Atlantic to Pacific",
    },
    StrategicWaypoint {
        name: "Port of Singapore",
        coordinate: Coordinate::new(103.85, 1.26),
        category: WaypointCategory::Port,
        description: "Transshipment hub",
    },
    StrategicWaypoint {
        name: "Port of Colombo",
        coordinate: Coordinate::new(79.85, 6.95),
        category: WaypointCategory::Port,
        description: "Indian Ocean transshipment hub",
    },
    StrategicWaypoint {
        name: "Port of Rotterdam",
        coordinate: Coordinate::new(4.05, 51.98),
        category: WaypointCategory::Port,
        description: "North Sea gateway port",
    },
    StrategicWaypoint {
        name: "Port Said",
        coordinate: Coordinate::new(32.3, 31.26),
        category: WaypointCategory::Port,
        description: "Northern terminus of the Suez Canal",
    },
];
