pub mod land;

pub use land::{LandDocument, LandSource, fetch_land};
