pub mod escape;
pub mod metrics;
pub mod port;
pub mod service;
pub mod synthesizer;

pub use escape::{EscapedLeg, escape_leg};
pub use metrics::{detour_factor, distance_of, estimated_time};
pub use port::{PortConnection, build_port_connection, is_port_accessible};
pub use service::MaritimeRoutingService;
pub use synthesizer::{RouteSynthesizer, SynthesizedRoute};
