use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::LandDataError;

const USER_AGENT: &str = "seaway/0.1.0";

/// A GeoJSON position; anything past longitude and latitude is ignored
pub type Position = Vec<f64>;
pub type Ring = Vec<Position>;

/// Top-level GeoJSON document holding land geometry
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum LandDocument {
    FeatureCollection {
        features: Vec<Feature>,
    },
    Feature(Feature),
    Polygon {
        coordinates: Vec<Ring>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Ring>>,
    },
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: Option<serde_json::Map<String, serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon { coordinates: Vec<Ring> },
    MultiPolygon { coordinates: Vec<Vec<Ring>> },
    GeometryCollection { geometries: Vec<Geometry> },
    #[serde(other)]
    Unsupported,
}

/// Where the land dataset lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LandSource {
    File(PathBuf),
    Url(String),
}

impl LandSource {
    pub fn parse(s: &str) -> Self {
        if s.starts_with("http://") || s.starts_with("https://") {
            LandSource::Url(s.to_string())
        } else {
            LandSource::File(PathBuf::from(s))
        }
    }
}

impl From<&str> for LandSource {
    fn from(s: &str) -> Self {
        LandSource::parse(s)
    }
}

impl fmt::Display for LandSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LandSource::File(path) => write!(f, "{}", path.display()),
            LandSource::Url(url) => f.write_str(url),
        }
    }
}

/// Read or download the land dataset and decode it
///
/// # Arguments
/// * `source` - Local GeoJSON file or http(s) URL
/// * `timeout_secs` - Client timeout for remote sources
pub fn fetch_land(source: &LandSource, timeout_secs: u64) -> Result<LandDocument, LandDataError> {
    let body = match source {
        LandSource::File(path) => {
            std::fs::read_to_string(path).map_err(|source| LandDataError::Read {
                path: path.clone(),
                source,
            })?
        }
        LandSource::Url(url) => download(url, timeout_secs)?,
    };

    Ok(serde_json::from_str(&body)?)
}

fn download(url: &str, timeout_secs: u64) -> Result<String, LandDataError> {
    let fetch_error = |source| LandDataError::Fetch {
        url: url.to_string(),
        source,
    };

    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(fetch_error)?;

    let response = client.get(url).send().map_err(fetch_error)?;

    if !response.status().is_success() {
        return Err(LandDataError::Status {
            url: url.to_string(),
            status: response.status().as_u16(),
        });
    }

    response.text().map_err(fetch_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_land_source_parse() {
        assert_eq!(
            LandSource::parse("https://example.org/land.geojson"),
            LandSource::Url("https://example.org/land.geojson".to_string())
        );
        assert_eq!(
            LandSource::parse("assets/land.geojson"),
            LandSource::File(PathBuf::from("assets/land.geojson"))
        );
    }

    #[test]
    fn test_parse_feature_collection() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {"name": "Isla"},
                    "geometry": {"type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,0]]]}
                },
                {
                    "type": "Feature",
                    "properties": null,
                    "geometry": {"type": "LineString", "coordinates": [[0,0],[1,1]]}
                }
            ]
        }"#;

        let doc: LandDocument = serde_json::from_str(json).unwrap();
        match doc {
            LandDocument::FeatureCollection { features } => {
                assert_eq!(features.len(), 2);
                assert!(matches!(
                    features[0].geometry,
                    Some(Geometry::Polygon { .. })
                ));
                assert!(matches!(
                    features[1].geometry,
                    Some(Geometry::Unsupported)
                ));
            }
            other => panic!("unexpected document: {:?}", other),
        }
    }

    #[test]
    fn test_fetch_land_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("land.geojson");
        fs::write(
            &path,
            r#"{"type": "MultiPolygon", "coordinates": [[[[0,0],[1,0],[1,1],[0,0]]]]}"#,
        )
        .unwrap();

        let doc = fetch_land(&LandSource::File(path), 5).unwrap();
        assert!(matches!(doc, LandDocument::MultiPolygon { .. }));
    }

    #[test]
    fn test_fetch_land_missing_file() {
        let err = fetch_land(&LandSource::parse("/nonexistent/land.geojson"), 5).unwrap_err();
        assert!(matches!(err, LandDataError::Read { .. }));
    }

    #[test]
    fn test_fetch_land_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.geojson");
        fs::write(&path, "{ not json").unwrap();

        let err = fetch_land(&LandSource::File(path), 5).unwrap_err();
        assert!(matches!(err, LandDataError::Parse(_)));
    }
}
