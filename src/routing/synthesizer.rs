use log::debug;

use super::escape::{EscapedLeg, escape_leg};
use super::metrics::{detour_factor, distance_of};
use super::port::{build_port_connection, is_port_accessible};
use crate::config::EngineConfig;
use crate::domain::{Canal, Coordinate, RouteOptions, StrategicWaypoint};
use crate::error::RoutingWarning;
use crate::geometry::great_circle_km;
use crate::land::{LandModel, crosses_land};
use crate::registry::{CanalPassage, Registry, find_best_canal_against, find_strategic_waypoints};

/// Coordinates plus everything needed to annotate them
#[derive(Debug, Clone)]
pub struct SynthesizedRoute<'a> {
    pub coordinates: Vec<Coordinate>,
    pub direct_km: f64,
    pub distance_km: f64,
    pub canal: Option<CanalPassage<'a>>,
    pub strategic: Vec<&'a StrategicWaypoint>,
    /// Escape points accepted after the retry budget ran out, plus port
    /// connector points no nudge could move off buffered land
    pub emergency_points: usize,
    /// Whether the avoidance search ran at all
    pub avoided_land: bool,
    pub warnings: Vec<RoutingWarning>,
}

impl SynthesizedRoute<'_> {
    pub fn canal(&self) -> Option<&Canal> {
        self.canal.as_ref().map(|p| p.canal)
    }
}

/// Builds sea routes over a fixed land model and registry
#[derive(Debug, Clone, Copy)]
pub struct RouteSynthesizer<'a> {
    land: &'a LandModel,
    registry: &'a Registry,
    config: &'a EngineConfig,
}

impl<'a> RouteSynthesizer<'a> {
    pub fn new(land: &'a LandModel, registry: &'a Registry, config: &'a EngineConfig) -> Self {
        Self {
            land,
            registry,
            config,
        }
    }

    /// Route from `start` to `end`.
    ///
    /// # Algorithm
    /// 1. Direct line if the endpoints coincide, avoidance is off, or the
    ///    line misses (unbuffered) land
    /// 2. Otherwise escape the whole leg, then try a canal against that length
    /// 3. Attach port connections at both ends
    /// 4. Warn when the result exceeds `max_detour_factor` x direct
    pub fn synthesize(
        &self,
        start: Coordinate,
        end: Coordinate,
        options: &RouteOptions,
    ) -> Result<SynthesizedRoute<'a>, RoutingWarning> {
        let start = start.validate()?;
        let end = end.validate()?;
        let direct_km = great_circle_km(start, end);

        if start == end || !options.avoid_land || !crosses_land([start, end], &self.land.land) {
            return Ok(SynthesizedRoute {
                coordinates: vec![start, end],
                direct_km,
                distance_km: direct_km,
                canal: None,
                strategic: Vec::new(),
                emergency_points: 0,
                avoided_land: false,
                warnings: Vec::new(),
            });
        }

        is_port_accessible(start, &self.land.land, &self.land.buffered);
        is_port_accessible(end, &self.land.land, &self.land.buffered);

        let direct_leg = self.escape(start, end, self.config.min_direct_steps, options)?;
        let mut coordinates = splice(&[&[start], &direct_leg.points, &[end]]);
        let mut emergency_points = direct_leg.emergency_points;
        let mut canal = None;

        if options.use_canals {
            let baseline_km = distance_of(&coordinates);
            if let Some(passage) = find_best_canal_against(
                start,
                end,
                baseline_km,
                &self.registry.canals,
                self.config.min_canal_saving_km,
            ) {
                debug!(
                    "Routing via {} (saves {:.0} km)",
                    passage.canal.name, passage.saving_km
                );
                let min_steps = self.config.min_canal_leg_steps;
                let to_entry = self.escape(start, passage.entry, min_steps, options)?;
                let from_exit = self.escape(passage.exit, end, min_steps, options)?;

                coordinates = splice(&[
                    &[start],
                    &to_entry.points,
                    &[passage.entry, passage.exit],
                    &from_exit.points,
                    &[end],
                ]);
                emergency_points = to_entry.emergency_points + from_exit.emergency_points;
                canal = Some(passage);
            }
        }

        let (coordinates, blocked) = self.attach_port_connections(coordinates);
        emergency_points += blocked;

        let strategic = find_strategic_waypoints(
            start,
            end,
            &self.registry.waypoints,
            self.config.waypoint_corridor_km,
            self.config.waypoint_margin_deg,
        );

        let distance_km = distance_of(&coordinates);
        let mut warnings = Vec::new();
        if distance_km > direct_km * options.max_detour_factor {
            warnings.push(RoutingWarning::SignificantDetour {
                factor: detour_factor(distance_km, direct_km),
                limit: options.max_detour_factor,
            });
        }

        if emergency_points > 0 {
            debug!(
                "{} of {} route points are emergency escape points",
                emergency_points,
                coordinates.len()
            );
        }

        Ok(SynthesizedRoute {
            coordinates,
            direct_km,
            distance_km,
            canal,
            strategic,
            emergency_points,
            avoided_land: true,
            warnings,
        })
    }

    fn escape(
        &self,
        a: Coordinate,
        b: Coordinate,
        min_steps: usize,
        options: &RouteOptions,
    ) -> Result<EscapedLeg, RoutingWarning> {
        Ok(escape_leg(
            a,
            b,
            min_steps,
            options.precision,
            &self.land.buffered,
            self.config,
        )?)
    }

    /// Replace the first and last segments with safe port connectors.
    /// Also returns how many connector points stayed on buffered land.
    fn attach_port_connections(&self, coordinates: Vec<Coordinate>) -> (Vec<Coordinate>, usize) {
        let n = coordinates.len();
        if n < 3 {
            return (coordinates, 0);
        }
        let buffered = &self.land.buffered;

        let departure =
            build_port_connection(coordinates[0], coordinates[1], true, buffered, self.config);
        let arrival = build_port_connection(
            coordinates[n - 1],
            coordinates[n - 2],
            false,
            buffered,
            self.config,
        );
        let blocked = departure.blocked + arrival.blocked;

        let mut attached =
            Vec::with_capacity(n + departure.points.len() + arrival.points.len());
        attached.push(coordinates[0]);
        attached.extend(departure.points);
        attached.extend_from_slice(&coordinates[1..n - 1]);
        attached.extend(arrival.points);
        attached.push(coordinates[n - 1]);
        (attached, blocked)
    }
}

/// Concatenate pieces, dropping a coordinate equal to the one before it
fn splice(pieces: &[&[Coordinate]]) -> Vec<Coordinate> {
    let mut out: Vec<Coordinate> = Vec::new();
    for point in pieces.iter().flat_map(|piece| piece.iter()) {
        if out.last() != Some(point) {
            out.push(*point);
        }
    }
    out
}
