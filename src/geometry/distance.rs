use geo::{Closest, ClosestPoint, Distance, Haversine, Line, Point};

use crate::domain::Coordinate;

/// Great-circle distance in kilometres (haversine, mean Earth radius)
pub fn great_circle_km(a: Coordinate, b: Coordinate) -> f64 {
    Haversine::distance(Point::from(a), Point::from(b)) / 1000.0
}

/// Distance in kilometres from `point` to the nearest position on the
/// straight (degree-space) segment `start`-`end`
pub fn distance_to_segment_km(point: Coordinate, start: Coordinate, end: Coordinate) -> f64 {
    let line = Line::new(geo::Coord::from(start), geo::Coord::from(end));
    match line.closest_point(&Point::from(point)) {
        Closest::Intersection(p) | Closest::SinglePoint(p) => great_circle_km(point, p.into()),
        Closest::Indeterminate => great_circle_km(point, start).min(great_circle_km(point, end)),
    }
}

/// Unit vector perpendicular (to the left) of the direction `from` -> `to`,
/// in degree space. `None` when the two positions coincide.
pub fn unit_perpendicular(from: Coordinate, to: Coordinate) -> Option<(f64, f64)> {
    let dx = to.lon - from.lon;
    let dy = to.lat - from.lat;
    let len = dx.hypot(dy);
    if len <= f64::EPSILON {
        return None;
    }
    Some((-dy / len, dx / len))
}

/// Z component of the cross product of `from`->`to` and `from`->`point`.
/// Positive when `point` lies to the left of the direction of travel.
pub fn side_of(from: Coordinate, to: Coordinate, point: Coordinate) -> f64 {
    (to.lon - from.lon) * (point.lat - from.lat) - (to.lat - from.lat) * (point.lon - from.lon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_great_circle_one_degree_at_equator() {
        let d = great_circle_km(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0));
        assert!((d - 111.19).abs() < 0.5);
    }

    #[test]
    fn test_great_circle_singapore_rotterdam() {
        let d = great_circle_km(Coordinate::new(103.85, 1.29), Coordinate::new(4.47, 51.91));
        // ~10,500 km as the crow flies
        assert!(d > 10_000.0 && d < 11_000.0);
    }

    #[test]
    fn test_distance_to_segment() {
        let d = distance_to_segment_km(
            Coordinate::new(5.0, 1.0),
            Coordinate::new(0.0, 0.0),
            Coordinate::new(10.0, 0.0),
        );
        assert!((d - 111.19).abs() < 0.5);

        // Beyond the end, distance is to the endpoint
        let d = distance_to_segment_km(
            Coordinate::new(11.0, 0.0),
            Coordinate::new(0.0, 0.0),
            Coordinate::new(10.0, 0.0),
        );
        assert!((d - 111.19).abs() < 0.5);
    }

    #[test]
    fn test_unit_perpendicular_points_left() {
        let (px, py) =
            unit_perpendicular(Coordinate::new(0.0, 0.0), Coordinate::new(10.0, 0.0)).unwrap();
        assert!(px.abs() < 1e-12);
        assert!((py - 1.0).abs() < 1e-12);
        assert!(unit_perpendicular(Coordinate::new(1.0, 1.0), Coordinate::new(1.0, 1.0)).is_none());
    }

    #[test]
    fn test_side_of() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(10.0, 0.0);
        assert!(side_of(a, b, Coordinate::new(5.0, 3.0)) > 0.0);
        assert!(side_of(a, b, Coordinate::new(5.0, -3.0)) < 0.0);
    }
}
