//! Perturbation search that pulls a straight leg off buffered land.
//!
//! Each interpolated point of the leg is pushed sideways, perpendicular to
//! the leg. Rejected candidates grow the push by a fixed step and alternate
//! sides. When the attempt budget runs out an emergency point far out on the
//! outward side is taken instead, so the search always terminates.

use geo::Centroid;
use log::debug;

use crate::config::EngineConfig;
use crate::domain::Coordinate;
use crate::error::GeometryError;
use crate::geometry::{BufferedLandPolygonSet, great_circle_km, side_of, unit_perpendicular};
use crate::land::{first_crossing, point_on_buffered_land};

/// Upper bound on interpolated points per leg
const MAX_ESCAPE_STEPS: usize = 5_000;

/// Floor for the latitude scaling so offsets stay finite near the poles
const MIN_LATITUDE_COS: f64 = 0.2;

/// Intermediate points of one leg, endpoints excluded
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EscapedLeg {
    pub points: Vec<Coordinate>,
    /// How many points came from an exhausted retry budget
    pub emergency_points: usize,
}

/// Number of interpolated fractions for a leg
pub fn escape_steps(distance_km: f64, precision_km: f64, min_steps: usize) -> usize {
    let scaled = if precision_km > 0.0 && precision_km.is_finite() && distance_km.is_finite() {
        (distance_km / precision_km).floor() as usize
    } else {
        0
    };
    scaled.max(min_steps).min(MAX_ESCAPE_STEPS)
}

/// +1 to push left of travel, -1 to push right. Pushes away from the first
/// land mass the leg crosses, left when it crosses none.
pub fn outward_side(a: Coordinate, b: Coordinate, buffered: &BufferedLandPolygonSet) -> f64 {
    let Some(centroid) = first_crossing([a, b], buffered)
        .and_then(|polygon| polygon.source.polygon.centroid())
    else {
        return 1.0;
    };
    let midpoint = a.lerp(&b, 0.5);
    let direction_end = Coordinate::new(midpoint.lon + (b.lon - a.lon), midpoint.lat + (b.lat - a.lat));
    if side_of(midpoint, direction_end, centroid.into()) > 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Offset magnitude in degrees before the multiplier is applied
fn base_magnitude(lat: f64, base_offset_deg: f64) -> f64 {
    base_offset_deg / lat.to_radians().cos().max(MIN_LATITUDE_COS)
}

fn offset(point: Coordinate, (px, py): (f64, f64), distance_deg: f64) -> Coordinate {
    Coordinate::new(point.lon + px * distance_deg, point.lat + py * distance_deg).normalized()
}

/// Build the sea-side intermediate points of the leg `a` -> `b`
pub fn escape_leg(
    a: Coordinate,
    b: Coordinate,
    min_steps: usize,
    precision_km: f64,
    buffered: &BufferedLandPolygonSet,
    config: &EngineConfig,
) -> Result<EscapedLeg, GeometryError> {
    let a = a.validate()?;
    let b = b.validate()?;

    let Some(perpendicular) = unit_perpendicular(a, b) else {
        return Ok(EscapedLeg::default());
    };

    let steps = escape_steps(great_circle_km(a, b), precision_km, min_steps);
    let outward = outward_side(a, b, buffered);
    let mut leg = EscapedLeg {
        points: Vec::with_capacity(steps.saturating_sub(1)),
        emergency_points: 0,
    };

    for i in 1..steps {
        let base = a.lerp(&b, i as f64 / steps as f64);
        let magnitude = base_magnitude(base.lat, config.escape_base_offset_deg);

        let mut multiplier = outward;
        let mut accepted = None;
        for _ in 0..config.escape_max_attempts {
            let candidate = offset(base, perpendicular, magnitude * multiplier);
            if !point_on_buffered_land(candidate, buffered) {
                accepted = Some(candidate);
                break;
            }
            multiplier = -multiplier.signum() * (multiplier.abs() + config.escape_multiplier_step);
        }

        let point = match accepted {
            Some(point) => point,
            None => {
                leg.emergency_points += 1;
                let point = offset(
                    base,
                    perpendicular,
                    magnitude * config.emergency_multiplier * outward,
                );
                debug!(
                    "Escape budget exhausted near ({:.3}, {:.3}); emergency point ({:.3}, {:.3})",
                    base.lon, base.lat, point.lon, point.lat
                );
                point
            }
        };

        if !point.is_valid() {
            return Err(GeometryError::InvalidCoordinate {
                lon: point.lon,
                lat: point.lat,
            });
        }
        leg.points.push(point);
    }

    Ok(leg)
}
