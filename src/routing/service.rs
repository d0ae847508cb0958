use log::{debug, info, warn};
use std::sync::mpsc::Receiver;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::thread::{self, JoinHandle};

use super::metrics::{distance_of, estimated_time};
use super::synthesizer::{RouteSynthesizer, SynthesizedRoute};
use crate::api::LandSource;
use crate::config::EngineConfig;
use crate::domain::{
    Coordinate, LandPolygonSet, MaritimeRoute, RouteOptions, RouteWaypoint, WaypointCategory,
};
use crate::error::RoutingWarning;
use crate::land::{LandModel, ReadySignal};
use crate::registry::Registry;

#[derive(Debug)]
struct Inner {
    config: EngineConfig,
    registry: Registry,
    land: RwLock<Arc<LandModel>>,
    ready: ReadySignal,
}

/// Public entry point of the routing engine.
///
/// Cheap to clone; clones share land data and readiness. Routes requested
/// before land is loaded are direct lines carrying a warning.
#[derive(Debug, Clone)]
pub struct MaritimeRoutingService {
    inner: Arc<Inner>,
}

impl MaritimeRoutingService {
    /// Service with the built-in registry and no land loaded yet
    pub fn new(config: EngineConfig) -> Self {
        Self::with_registry(config, Registry::builtin())
    }

    pub fn with_registry(config: EngineConfig, registry: Registry) -> Self {
        Self {
            inner: Arc::new(Inner {
                config,
                registry,
                land: RwLock::new(Arc::new(LandModel::unavailable("land data not loaded"))),
                ready: ReadySignal::new(),
            }),
        }
    }

    /// Service that is ready immediately with already-decoded land
    pub fn with_land(land: LandPolygonSet, config: EngineConfig) -> Self {
        let service = Self::new(config);
        let model = LandModel::new(land, service.inner.config.buffer_km);
        service.install(model);
        service
    }

    pub fn config(&self) -> &EngineConfig {
        &self.inner.config
    }

    pub fn registry(&self) -> &Registry {
        &self.inner.registry
    }

    /// Snapshot of the current land model
    pub fn land(&self) -> Arc<LandModel> {
        Arc::clone(&self.read_land())
    }

    pub fn ready_state(&self) -> &ReadySignal {
        &self.inner.ready
    }

    pub fn is_ready(&self) -> bool {
        self.inner.ready.is_ready()
    }

    /// `false` now (unless already ready), then a single `true` once land
    /// loading has finished, successfully or not
    pub fn is_service_ready(&self) -> Receiver<bool> {
        self.inner.ready.subscribe()
    }

    /// Load land data, blocking. Failures degrade to an empty land set.
    ///
    /// Returns `false` if an earlier load already completed; the new data is
    /// then discarded.
    pub fn load_land(&self, source: &LandSource) -> bool {
        let model = LandModel::load_or_empty(source, &self.inner.config);
        self.install(model)
    }

    pub fn load_land_in_background(&self, source: LandSource) -> JoinHandle<bool> {
        let service = self.clone();
        thread::spawn(move || service.load_land(&source))
    }

    fn install(&self, model: LandModel) -> bool {
        let mut land = self.write_land();
        if self.inner.ready.is_ready() {
            info!("Land data already loaded; ignoring later load");
            return false;
        }
        *land = Arc::new(model);
        self.inner.ready.mark_ready();
        true
    }

    /// Recompute the buffered land with a new safety margin
    pub fn rebuffer(&self, buffer_km: f64) {
        let mut land = self.write_land();
        if land.buffered.buffer_km == buffer_km {
            return;
        }
        debug!("Rebuffering land to {} km", buffer_km);
        let rebuffered = land.rebuffered(buffer_km);
        *land = Arc::new(rebuffered);
    }

    fn read_land(&self) -> RwLockReadGuard<'_, Arc<LandModel>> {
        self.inner.land.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_land(&self) -> RwLockWriteGuard<'_, Arc<LandModel>> {
        self.inner.land.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Compute a sea route between two coordinates.
    ///
    /// Never fails: problems are reported in `warnings` and, for invalid
    /// input, the route falls back to the direct line.
    pub fn calculate_maritime_route(
        &self,
        start: Coordinate,
        end: Coordinate,
        options: Option<RouteOptions>,
    ) -> MaritimeRoute {
        let options = options.unwrap_or_default();
        let land = self.land();

        let mut warnings = Vec::new();
        if options.avoid_land && !land.is_available() {
            warnings.push(RoutingWarning::LandDataUnavailable);
        }

        let synthesizer = RouteSynthesizer::new(&land, &self.inner.registry, &self.inner.config);
        match synthesizer.synthesize(start, end, &options) {
            Ok(route) => {
                warnings.extend(route.warnings.iter().cloned());
                package(&route, warnings)
            }
            Err(warning) => {
                warn!("{}", warning);
                warnings.push(warning);
                direct_route(start, end, warnings)
            }
        }
    }
}

impl Default for MaritimeRoutingService {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

fn package(route: &SynthesizedRoute<'_>, warnings: Vec<RoutingWarning>) -> MaritimeRoute {
    let (Some(&start), Some(&end)) = (route.coordinates.first(), route.coordinates.last()) else {
        return MaritimeRoute {
            coordinates: Vec::new(),
            distance: 0.0,
            estimated_time: 0.0,
            warnings: warnings.iter().map(ToString::to_string).collect(),
            waypoints: Vec::new(),
            canal: None,
        };
    };

    let mut waypoints = vec![RouteWaypoint::new("Origin", start, WaypointCategory::Port)];
    if let Some(passage) = &route.canal {
        waypoints.push(RouteWaypoint::new(
            format!("{} (entry)", passage.canal.name),
            passage.entry,
            WaypointCategory::Canal,
        ));
        waypoints.push(RouteWaypoint::new(
            format!("{} (exit)", passage.canal.name),
            passage.exit,
            WaypointCategory::Canal,
        ));
    }
    waypoints.extend(
        route
            .strategic
            .iter()
            .map(|w| RouteWaypoint::new(w.name, w.coordinate, w.category)),
    );
    waypoints.push(RouteWaypoint::new("Destination", end, WaypointCategory::Port));

    debug!(
        "Route with {} points, {:.1} km (direct {:.1} km)",
        route.coordinates.len(),
        route.distance_km,
        route.direct_km
    );

    MaritimeRoute {
        coordinates: route.coordinates.clone(),
        distance: route.distance_km,
        estimated_time: estimated_time(route.distance_km),
        warnings: warnings.iter().map(ToString::to_string).collect(),
        waypoints,
        canal: route.canal().map(|c| c.name.to_string()),
    }
}

/// Two-point fallback route; a non-finite length is reported as zero
fn direct_route(start: Coordinate, end: Coordinate, warnings: Vec<RoutingWarning>) -> MaritimeRoute {
    let coordinates = vec![start, end];
    let distance = match distance_of(&coordinates) {
        d if d.is_finite() => d,
        _ => 0.0,
    };
    MaritimeRoute {
        coordinates,
        distance,
        estimated_time: estimated_time(distance),
        warnings: warnings.iter().map(ToString::to_string).collect(),
        waypoints: vec![
            RouteWaypoint::new("Origin", start, WaypointCategory::Port),
            RouteWaypoint::new("Destination", end, WaypointCategory::Port),
        ],
        canal: None,
    }
}
