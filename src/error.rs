use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain a usable land dataset.
#[derive(Debug, Error)]
pub enum LandDataError {
    #[error("failed to read land dataset {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch land dataset from {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("land dataset server returned status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("malformed land dataset")]
    Parse(#[from] serde_json::Error),

    #[error("land dataset contains no polygon geometry")]
    NoPolygons,
}

/// A geometry operation refused its input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("coordinate ({lon}, {lat}) is not a valid longitude/latitude pair")]
    InvalidCoordinate { lon: f64, lat: f64 },

    #[error("polygon {0:?} has an empty exterior ring")]
    EmptyPolygon(Option<String>),

    #[error("buffer distance {0} km is not a finite, non-negative value")]
    InvalidBuffer(f64),
}

/// Degradation recorded on a route instead of failing the request.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RoutingWarning {
    #[error("Land data not available; route is a direct line and may cross land")]
    LandDataUnavailable,

    #[error("Route synthesis failed ({0}); falling back to the direct route")]
    Geometry(#[from] GeometryError),

    #[error(
        "Route is significantly longer than direct ({factor:.2}x the direct distance, limit {limit:.2}x)"
    )]
    SignificantDetour { factor: f64, limit: f64 },
}
