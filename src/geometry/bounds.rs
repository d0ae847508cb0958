use crate::domain::Coordinate;

/// Longitude/latitude bounding box in degrees
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl Bounds {
    /// Create bounds from a set of points
    pub fn from_points(points: &[Coordinate]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let mut min_lon = f64::MAX;
        let mut max_lon = f64::MIN;
        let mut min_lat = f64::MAX;
        let mut max_lat = f64::MIN;

        for p in points {
            min_lon = min_lon.min(p.lon);
            max_lon = max_lon.max(p.lon);
            min_lat = min_lat.min(p.lat);
            max_lat = max_lat.max(p.lat);
        }

        Some(Self {
            min_lon,
            max_lon,
            min_lat,
            max_lat,
        })
    }

    /// Grow every side by `margin_deg`
    pub fn expanded(&self, margin_deg: f64) -> Self {
        Self {
            min_lon: self.min_lon - margin_deg,
            max_lon: self.max_lon + margin_deg,
            min_lat: self.min_lat - margin_deg,
            max_lat: self.max_lat + margin_deg,
        }
    }

    pub fn contains(&self, point: Coordinate) -> bool {
        point.lon >= self.min_lon
            && point.lon <= self.max_lon
            && point.lat >= self.min_lat
            && point.lat <= self.max_lat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_from_points() {
        let points = vec![
            Coordinate::new(103.85, 1.29),
            Coordinate::new(4.47, 51.91),
        ];
        let bounds = Bounds::from_points(&points).unwrap();

        assert_eq!(bounds.min_lon, 4.47);
        assert_eq!(bounds.max_lon, 103.85);
        assert_eq!(bounds.min_lat, 1.29);
        assert_eq!(bounds.max_lat, 51.91);
        assert!(Bounds::from_points(&[]).is_none());
    }

    #[test]
    fn test_expanded_contains() {
        let bounds = Bounds::from_points(&[Coordinate::new(0.0, 0.0), Coordinate::new(10.0, 10.0)])
            .unwrap()
            .expanded(5.0);
        assert!(bounds.contains(Coordinate::new(-4.9, 14.9)));
        assert!(!bounds.contains(Coordinate::new(-5.1, 0.0)));
        assert_eq!(bounds.min_lon, -5.0);
        assert_eq!(bounds.max_lat, 15.0);
    }
}
