//! Outward buffering of land polygons.
//!
//! A buffered polygon is represented as the source polygon plus a distance:
//! a position is inside the buffer when it lies in the polygon or within
//! `buffer_km` great-circle kilometres of its boundary. This is the exact
//! Minkowski sum, evaluated lazily, so no offset rings have to be built.
//! A bounding envelope grown by the buffer gives a cheap rejection test.

use geo::{BoundingRect, Closest, ClosestPoint, Intersects, Line, Point, Rect};

use super::distance::great_circle_km;
use crate::domain::{Coordinate, LandPolygon};
use crate::error::GeometryError;

/// Kilometres per degree of latitude
const KM_PER_DEGREE: f64 = 111.32;

#[derive(Debug, Clone)]
pub struct BufferedLandPolygon {
    pub source: LandPolygon,
    pub buffer_km: f64,
    envelope: Rect<f64>,
}

impl BufferedLandPolygon {
    /// Expand `source` outward by `buffer_km`
    pub fn new(source: LandPolygon, buffer_km: f64) -> Result<Self, GeometryError> {
        if !buffer_km.is_finite() || buffer_km < 0.0 {
            return Err(GeometryError::InvalidBuffer(buffer_km));
        }
        let rect = source
            .polygon
            .bounding_rect()
            .ok_or_else(|| GeometryError::EmptyPolygon(source.name.clone()))?;

        let lat_margin = buffer_km / KM_PER_DEGREE;
        let widest_lat = (rect.max().y.abs().max(rect.min().y.abs()) + lat_margin).min(89.0);
        let lon_margin =
            (buffer_km / (KM_PER_DEGREE * widest_lat.to_radians().cos().max(0.01))).min(360.0);

        let envelope = Rect::new(
            geo::coord! { x: rect.min().x - lon_margin, y: rect.min().y - lat_margin },
            geo::coord! { x: rect.max().x + lon_margin, y: rect.max().y + lat_margin },
        );

        Ok(Self {
            source,
            buffer_km,
            envelope,
        })
    }

    /// Treat the source polygon itself as the buffer surface
    pub fn unbuffered(source: LandPolygon) -> Self {
        let envelope = source.polygon.bounding_rect().unwrap_or_else(|| {
            Rect::new(geo::coord! { x: 0.0, y: 0.0 }, geo::coord! { x: 0.0, y: 0.0 })
        });
        Self {
            source,
            buffer_km: 0.0,
            envelope,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.source.name.as_deref()
    }

    pub fn contains(&self, point: Coordinate) -> bool {
        let p = Point::from(point);
        if !self.envelope.intersects(&p) {
            return false;
        }
        if self.source.polygon.intersects(&p) {
            return true;
        }
        if self.buffer_km <= 0.0 {
            return false;
        }
        match self.source.polygon.closest_point(&p) {
            Closest::Intersection(_) => true,
            Closest::SinglePoint(q) => great_circle_km(point, q.into()) <= self.buffer_km,
            Closest::Indeterminate => false,
        }
    }

    /// Whether the straight segment touches the source polygon
    pub fn intersects_segment(&self, a: Coordinate, b: Coordinate) -> bool {
        let line = Line::new(geo::Coord::from(a), geo::Coord::from(b));
        line.intersects(&self.envelope) && line.intersects(&self.source.polygon)
    }
}

/// Buffered counterpart of a [`crate::domain::LandPolygonSet`]
#[derive(Debug, Clone, Default)]
pub struct BufferedLandPolygonSet {
    pub polygons: Vec<BufferedLandPolygon>,
    pub buffer_km: f64,
}

impl BufferedLandPolygonSet {
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BufferedLandPolygon> {
        self.polygons.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(min: f64, max: f64) -> LandPolygon {
        LandPolygon::new(
            vec![
                Coordinate::new(min, min),
                Coordinate::new(max, min),
                Coordinate::new(max, max),
                Coordinate::new(min, max),
                Coordinate::new(min, min),
            ],
            Vec::new(),
            Some("Block".to_string()),
        )
    }

    #[test]
    fn test_buffer_extends_beyond_coast() {
        let buffered = BufferedLandPolygon::new(square(0.0, 1.0), 15.0).unwrap();
        // Inside the polygon
        assert!(buffered.contains(Coordinate::new(0.5, 0.5)));
        // ~11 km east of the coast
        assert!(buffered.contains(Coordinate::new(1.1, 0.5)));
        // ~22 km east of the coast
        assert!(!buffered.contains(Coordinate::new(1.2, 0.5)));
    }

    #[test]
    fn test_unbuffered_matches_polygon() {
        let buffered = BufferedLandPolygon::unbuffered(square(0.0, 1.0));
        assert!(buffered.contains(Coordinate::new(0.5, 0.5)));
        assert!(!buffered.contains(Coordinate::new(1.05, 0.5)));
    }

    #[test]
    fn test_invalid_buffer_rejected() {
        assert!(matches!(
            BufferedLandPolygon::new(square(0.0, 1.0), f64::NAN),
            Err(GeometryError::InvalidBuffer(_))
        ));
        assert!(BufferedLandPolygon::new(square(0.0, 1.0), -1.0).is_err());
    }

    #[test]
    fn test_empty_polygon_cannot_be_buffered() {
        let empty = LandPolygon::new(Vec::new(), Vec::new(), None);
        assert!(matches!(
            BufferedLandPolygon::new(empty, 15.0),
            Err(GeometryError::EmptyPolygon(None))
        ));
    }

    #[test]
    fn test_intersects_segment() {
        let buffered = BufferedLandPolygon::new(square(0.0, 1.0), 15.0).unwrap();
        assert!(buffered.intersects_segment(Coordinate::new(-1.0, 0.5), Coordinate::new(2.0, 0.5)));
        assert!(!buffered.intersects_segment(Coordinate::new(-1.0, 2.0), Coordinate::new(2.0, 2.0)));
    }
}
