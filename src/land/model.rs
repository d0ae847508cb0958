use log::{info, warn};

use crate::api::{LandSource, fetch_land};
use crate::config::EngineConfig;
use crate::dataset::parse_land;
use crate::domain::LandPolygonSet;
use crate::error::LandDataError;
use crate::geometry::{BufferedLandPolygon, BufferedLandPolygonSet, simplify_land_polygon};

/// Fetch, decode and (optionally) simplify the land dataset
pub fn load_land(
    source: &LandSource,
    config: &EngineConfig,
) -> Result<LandPolygonSet, LandDataError> {
    let document = fetch_land(source, config.fetch_timeout_secs)?;
    let land = parse_land(&document);
    if land.is_empty() {
        return Err(LandDataError::NoPolygons);
    }

    let land = if config.simplify_epsilon_deg > 0.0 {
        LandPolygonSet::new(
            land.iter()
                .map(|p| simplify_land_polygon(p, config.simplify_epsilon_deg))
                .collect(),
        )
    } else {
        land
    };

    info!("Loaded {} land polygons from {}", land.len(), source);
    Ok(land)
}

/// Expand every polygon outward by `buffer_km`.
///
/// If any polygon cannot be buffered the whole set falls back to the
/// unbuffered polygons.
pub fn build_buffer(land: &LandPolygonSet, buffer_km: f64) -> BufferedLandPolygonSet {
    let buffered: Result<Vec<_>, _> = land
        .iter()
        .map(|p| BufferedLandPolygon::new(p.clone(), buffer_km))
        .collect();

    match buffered {
        Ok(polygons) => BufferedLandPolygonSet {
            polygons,
            buffer_km,
        },
        Err(e) => {
            warn!("Land buffering failed ({}); using unbuffered land for avoidance", e);
            BufferedLandPolygonSet {
                polygons: land
                    .iter()
                    .cloned()
                    .map(BufferedLandPolygon::unbuffered)
                    .collect(),
                buffer_km: 0.0,
            }
        }
    }
}

/// Whether land data backs the model
#[derive(Debug, Clone, PartialEq)]
pub enum LandStatus {
    Loaded,
    /// Load failed or has not happened; the model is empty
    Unavailable(String),
}

/// Original and buffered land, read-only once built
#[derive(Debug, Clone)]
pub struct LandModel {
    pub land: LandPolygonSet,
    pub buffered: BufferedLandPolygonSet,
    pub status: LandStatus,
}

impl LandModel {
    pub fn new(land: LandPolygonSet, buffer_km: f64) -> Self {
        let buffered = build_buffer(&land, buffer_km);
        Self {
            land,
            buffered,
            status: LandStatus::Loaded,
        }
    }

    /// Empty model used before loading completes or after it failed
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            land: LandPolygonSet::empty(),
            buffered: BufferedLandPolygonSet::default(),
            status: LandStatus::Unavailable(reason.into()),
        }
    }

    /// Load from `source`, degrading to an empty model on failure
    pub fn load_or_empty(source: &LandSource, config: &EngineConfig) -> Self {
        match load_land(source, config) {
            Ok(land) => Self::new(land, config.buffer_km),
            Err(e) => {
                warn!(
                    "Land data from {} unavailable ({}); routes will be direct lines",
                    source, e
                );
                Self::unavailable(e.to_string())
            }
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == LandStatus::Loaded
    }

    /// Same land with a different buffer distance
    pub fn rebuffered(&self, buffer_km: f64) -> Self {
        Self {
            land: self.land.clone(),
            buffered: build_buffer(&self.land, buffer_km),
            status: self.status.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinate, LandPolygon};
    use std::fs;
    use tempfile::tempdir;

    fn block() -> LandPolygon {
        LandPolygon::new(
            vec![
                Coordinate::new(0.0, 0.0),
                Coordinate::new(1.0, 0.0),
                Coordinate::new(1.0, 1.0),
                Coordinate::new(0.0, 1.0),
            ],
            Vec::new(),
            None,
        )
    }

    #[test]
    fn test_build_buffer() {
        let land = LandPolygonSet::new(vec![block()]);
        let buffered = build_buffer(&land, 15.0);
        assert_eq!(buffered.len(), 1);
        assert_eq!(buffered.buffer_km, 15.0);
    }

    #[test]
    fn test_build_buffer_falls_back_to_unbuffered() {
        let empty_ring = LandPolygon::new(Vec::new(), Vec::new(), Some("Ghost".to_string()));
        let land = LandPolygonSet::new(vec![block(), empty_ring]);
        let buffered = build_buffer(&land, 15.0);
        assert_eq!(buffered.len(), 2);
        assert_eq!(buffered.buffer_km, 0.0);
        assert!(buffered.polygons.iter().all(|p| p.buffer_km == 0.0));
    }

    #[test]
    fn test_load_or_empty_on_missing_file() {
        let model = LandModel::load_or_empty(
            &LandSource::parse("/nonexistent/land.geojson"),
            &EngineConfig::default(),
        );
        assert!(!model.is_available());
        assert!(model.land.is_empty());
        assert!(model.buffered.is_empty());
    }

    #[test]
    fn test_load_land_without_polygons_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.geojson");
        fs::write(&path, r#"{"type": "FeatureCollection", "features": []}"#).unwrap();

        let err = load_land(&LandSource::File(path), &EngineConfig::default()).unwrap_err();
        assert!(matches!(err, LandDataError::NoPolygons));
    }

    #[test]
    fn test_load_or_empty_success() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("land.geojson");
        fs::write(
            &path,
            r#"{"type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,1],[0,0]]]}"#,
        )
        .unwrap();

        let model = LandModel::load_or_empty(&LandSource::File(path), &EngineConfig::default());
        assert!(model.is_available());
        assert_eq!(model.land.len(), 1);
        assert_eq!(model.buffered.buffer_km, 15.0);

        let wider = model.rebuffered(30.0);
        assert_eq!(wider.buffered.buffer_km, 30.0);
        assert!(wider.is_available());
    }
}
