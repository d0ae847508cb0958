use crate::config::AVERAGE_SPEED_KMH;
use crate::domain::Coordinate;
use crate::geometry::great_circle_km;

/// Sum of great-circle lengths of consecutive pairs, in kilometres
pub fn distance_of(route: &[Coordinate]) -> f64 {
    route
        .windows(2)
        .map(|pair| great_circle_km(pair[0], pair[1]))
        .sum()
}

/// Transit time in hours at the fixed service speed
pub fn estimated_time(distance_km: f64) -> f64 {
    distance_km / AVERAGE_SPEED_KMH
}

/// Route length relative to the direct distance; 1.0 for zero-length trips
pub fn detour_factor(route_km: f64, direct_km: f64) -> f64 {
    if direct_km <= f64::EPSILON {
        1.0
    } else {
        route_km / direct_km
    }
}
