pub mod bounds;
pub mod buffer;
pub mod distance;
pub mod simplify;

pub use bounds::Bounds;
pub use buffer::{BufferedLandPolygon, BufferedLandPolygonSet};
pub use distance::{distance_to_segment_km, great_circle_km, side_of, unit_perpendicular};
pub use simplify::simplify_land_polygon;
