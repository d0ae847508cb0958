pub mod coordinate;
pub mod land;
pub mod passage;
pub mod route;

pub use coordinate::Coordinate;
pub use land::{LandPolygon, LandPolygonSet};
pub use passage::{Canal, StrategicWaypoint, WaypointCategory};
pub use route::{MaritimeRoute, RouteOptions, RouteWaypoint};
