use log::{debug, warn};

use crate::config::EngineConfig;
use crate::domain::{Coordinate, LandPolygonSet};
use crate::geometry::{BufferedLandPolygonSet, great_circle_km, unit_perpendicular};
use crate::land::{point_on_buffered_land, point_on_land};

const MIN_CONNECTION_POINTS: usize = 2;
const MAX_CONNECTION_POINTS: usize = 5;

/// Ports are coastal, so they are always accepted.
///
/// A port inside the buffer zone but off the original land is logged; it
/// usually means the dataset coastline and the port position disagree.
pub fn is_port_accessible(
    port: Coordinate,
    land: &LandPolygonSet,
    buffered: &BufferedLandPolygonSet,
) -> bool {
    if point_on_buffered_land(port, buffered) && !point_on_land(port, land) {
        warn!(
            "Port ({:.4}, {:.4}) lies inside the land buffer; allowing access",
            port.lon, port.lat
        );
    }
    true
}

/// Number of connection points for a stretch of `distance_km`
pub fn connection_point_count(distance_km: f64, step_km: f64) -> usize {
    if !distance_km.is_finite() || step_km <= 0.0 {
        return MIN_CONNECTION_POINTS;
    }
    ((distance_km / step_km).ceil() as usize).clamp(MIN_CONNECTION_POINTS, MAX_CONNECTION_POINTS)
}

/// Intermediate points of a port connector, in travel order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortConnection {
    pub points: Vec<Coordinate>,
    /// Points left on buffered land after both nudges
    pub blocked: usize,
}

/// Short safe connector between a port and the neighbouring route point.
///
/// Points run port -> route for a departure, route -> port for an arrival,
/// endpoints excluded. Blocked points get a single perpendicular nudge
/// instead of a full escape search.
pub fn build_port_connection(
    port: Coordinate,
    route_point: Coordinate,
    is_departure: bool,
    buffered: &BufferedLandPolygonSet,
    config: &EngineConfig,
) -> PortConnection {
    let count = connection_point_count(
        great_circle_km(port, route_point),
        config.port_connection_step_km,
    );
    let perpendicular = unit_perpendicular(port, route_point);

    let mut connection = PortConnection {
        points: Vec::with_capacity(count),
        blocked: 0,
    };
    for i in 1..=count {
        let point = port.lerp(&route_point, i as f64 / (count + 1) as f64);
        if !point_on_buffered_land(point, buffered) {
            connection.points.push(point);
            continue;
        }
        match perpendicular.and_then(|perp| nudge(point, perp, config.port_nudge_deg, buffered)) {
            Some(nudged) => connection.points.push(nudged),
            None => {
                connection.blocked += 1;
                connection.points.push(point);
            }
        }
    }

    if !is_departure {
        connection.points.reverse();
    }
    connection
}

/// Left nudge, else right nudge, else `None`
fn nudge(
    point: Coordinate,
    (px, py): (f64, f64),
    magnitude: f64,
    buffered: &BufferedLandPolygonSet,
) -> Option<Coordinate> {
    let left = Coordinate::new(point.lon + px * magnitude, point.lat + py * magnitude).normalized();
    if !point_on_buffered_land(left, buffered) {
        return Some(left);
    }
    let right = Coordinate::new(point.lon - px * magnitude, point.lat - py * magnitude).normalized();
    if !point_on_buffered_land(right, buffered) {
        return Some(right);
    }
    debug!(
        "Connection point ({:.4}, {:.4}) still on buffered land after nudge",
        point.lon, point.lat
    );
    None
}
