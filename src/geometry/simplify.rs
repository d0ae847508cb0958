use geo::Simplify;

use crate::domain::LandPolygon;

/// Douglas-Peucker simplification of a land polygon, `epsilon` in degrees.
///
/// Rings that would collapse below a triangle keep their original vertices.
pub fn simplify_land_polygon(land: &LandPolygon, epsilon: f64) -> LandPolygon {
    if epsilon <= 0.0 || land.polygon.exterior().0.len() < 5 {
        return land.clone();
    }

    let simplified = land.polygon.simplify(&epsilon);

    if simplified.exterior().0.len() < 4 {
        return land.clone();
    }

    LandPolygon::from_polygon(simplified, land.name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinate;

    fn vertex_count(land: &LandPolygon) -> usize {
        land.polygon.exterior().0.len()
            + land
                .polygon
                .interiors()
                .iter()
                .map(|ring| ring.0.len())
                .sum::<usize>()
    }

    fn jagged_coast() -> LandPolygon {
        let mut outer: Vec<Coordinate> = (0..=100)
            .map(|i| {
                let lon = i as f64 * 0.1;
                let lat = if i % 2 == 0 { 0.0 } else { 0.0001 };
                Coordinate::new(lon, lat)
            })
            .collect();
        outer.push(Coordinate::new(10.0, 5.0));
        outer.push(Coordinate::new(0.0, 5.0));
        outer.push(Coordinate::new(0.0, 0.0));
        LandPolygon::new(outer, Vec::new(), None)
    }

    #[test]
    fn test_simplify_reduces_vertices() {
        let land = jagged_coast();
        let simplified = simplify_land_polygon(&land, 0.001);
        assert!(vertex_count(&simplified) < vertex_count(&land));
        assert!(simplified.is_valid());
    }

    #[test]
    fn test_zero_epsilon_is_identity() {
        let land = jagged_coast();
        let same = simplify_land_polygon(&land, 0.0);
        assert_eq!(vertex_count(&same), vertex_count(&land));
    }

    #[test]
    fn test_simplify_preserves_minimum() {
        let tri = LandPolygon::new(
            vec![
                Coordinate::new(0.0, 0.0),
                Coordinate::new(1.0, 0.0),
                Coordinate::new(0.0, 1.0),
                Coordinate::new(0.0, 0.0),
            ],
            Vec::new(),
            None,
        );
        let result = simplify_land_polygon(&tri, 10.0);
        assert!(result.is_valid());
    }
}
