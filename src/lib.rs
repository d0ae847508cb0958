//! seaway - Sea routes that steer around land, with canal shortcuts

pub mod api;
pub mod config;
pub mod dataset;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod land;
pub mod registry;
pub mod routing;

pub use api::LandSource;
pub use config::{EngineConfig, FileConfig};
pub use domain::{Coordinate, MaritimeRoute, RouteOptions};
pub use error::{GeometryError, LandDataError, RoutingWarning};
pub use routing::MaritimeRoutingService;
