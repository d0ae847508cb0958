use geo::{Intersects, Line, Point};

use crate::domain::{Coordinate, LandPolygonSet};
use crate::geometry::{BufferedLandPolygon, BufferedLandPolygonSet};

/// Whether the straight segment touches any (unbuffered) land polygon.
/// Stops at the first hit.
pub fn crosses_land(segment: [Coordinate; 2], land: &LandPolygonSet) -> bool {
    let line = Line::new(geo::Coord::from(segment[0]), geo::Coord::from(segment[1]));
    land.iter().any(|p| line.intersects(&p.polygon))
}

pub fn point_on_land(point: Coordinate, land: &LandPolygonSet) -> bool {
    let p = Point::from(point);
    land.iter().any(|polygon| polygon.polygon.intersects(&p))
}

pub fn point_on_buffered_land(point: Coordinate, buffered: &BufferedLandPolygonSet) -> bool {
    buffered.iter().any(|polygon| polygon.contains(point))
}

/// First buffered polygon (in dataset order) whose land the segment crosses
pub fn first_crossing(
    segment: [Coordinate; 2],
    buffered: &BufferedLandPolygonSet,
) -> Option<&BufferedLandPolygon> {
    buffered
        .iter()
        .find(|p| p.intersects_segment(segment[0], segment[1]))
}
