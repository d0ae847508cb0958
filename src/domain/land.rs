use geo::{LineString, Polygon};

use super::Coordinate;

/// A land mass: outer ring plus optional holes, in geographic coordinates
#[derive(Debug, Clone)]
pub struct LandPolygon {
    pub polygon: Polygon<f64>,
    pub name: Option<String>,
}

impl LandPolygon {
    /// Build from rings of `(lon, lat)` coordinates. Open rings are closed.
    pub fn new(outer: Vec<Coordinate>, holes: Vec<Vec<Coordinate>>, name: Option<String>) -> Self {
        let exterior = to_ring(outer);
        let interiors = holes.into_iter().map(to_ring).collect();
        Self {
            polygon: Polygon::new(exterior, interiors),
            name,
        }
    }

    pub fn from_polygon(polygon: Polygon<f64>, name: Option<String>) -> Self {
        Self { polygon, name }
    }

    /// A closed ring needs at least 4 positions
    pub fn is_valid(&self) -> bool {
        self.polygon.exterior().0.len() >= 4
    }
}

fn to_ring(points: Vec<Coordinate>) -> LineString<f64> {
    points
        .into_iter()
        .map(geo::Coord::from)
        .collect::<Vec<_>>()
        .into()
}

/// The loaded land model; immutable once built
#[derive(Debug, Clone, Default)]
pub struct LandPolygonSet {
    pub polygons: Vec<LandPolygon>,
}

impl LandPolygonSet {
    pub fn new(polygons: Vec<LandPolygon>) -> Self {
        Self { polygons }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LandPolygon> {
        self.polygons.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_ring_is_closed() {
        let land = LandPolygon::new(
            vec![
                Coordinate::new(0.0, 0.0),
                Coordinate::new(1.0, 0.0),
                Coordinate::new(1.0, 1.0),
            ],
            Vec::new(),
            Some("Islet".to_string()),
        );
        let ring = &land.polygon.exterior().0;
        assert_eq!(ring.first(), ring.last());
        assert!(land.is_valid());
    }
}
