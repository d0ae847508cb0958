pub mod detector;
pub mod model;
pub mod ready;

pub use detector::{crosses_land, first_crossing, point_on_buffered_land, point_on_land};
pub use model::{LandModel, LandStatus, build_buffer, load_land};
pub use ready::ReadySignal;
