use crate::domain::{Canal, Coordinate, StrategicWaypoint};
use crate::geometry::{Bounds, distance_to_segment_km, great_circle_km};

/// A canal chosen for a route, with its ends ordered in travel direction
#[derive(Debug, Clone, PartialEq)]
pub struct CanalPassage<'a> {
    pub canal: &'a Canal,
    pub entry: Coordinate,
    pub exit: Coordinate,
    /// Kilometres saved compared with the direct distance
    pub saving_km: f64,
}

/// Order the canal ends so the entry is the end nearer to `start`
fn oriented(canal: &Canal, start: Coordinate) -> (Coordinate, Coordinate) {
    if great_circle_km(start, canal.exit) < great_circle_km(start, canal.entry) {
        (canal.exit, canal.entry)
    } else {
        (canal.entry, canal.exit)
    }
}

/// `direct - (d(start, entry) + d(entry, exit) + d(exit, end))`
pub fn canal_saving_km(start: Coordinate, end: Coordinate, canal: &Canal) -> f64 {
    canal_saving_against_km(start, end, great_circle_km(start, end), canal)
}

/// `baseline_km - (d(start, entry) + d(entry, exit) + d(exit, end))`
pub fn canal_saving_against_km(
    start: Coordinate,
    end: Coordinate,
    baseline_km: f64,
    canal: &Canal,
) -> f64 {
    let (entry, exit) = oriented(canal, start);
    let via = great_circle_km(start, entry) + great_circle_km(entry, exit) + great_circle_km(exit, end);
    baseline_km - via
}

/// Canal with the largest saving over the direct distance, if that saving
/// is strictly above `min_saving_km`. Ties keep the earlier canal.
pub fn find_best_canal<'a>(
    start: Coordinate,
    end: Coordinate,
    canals: &'a [Canal],
    min_saving_km: f64,
) -> Option<CanalPassage<'a>> {
    find_best_canal_against(start, end, great_circle_km(start, end), canals, min_saving_km)
}

/// Like [`find_best_canal`], but savings are measured against `baseline_km`
/// (e.g. the length of a land-avoiding route without a canal).
pub fn find_best_canal_against<'a>(
    start: Coordinate,
    end: Coordinate,
    baseline_km: f64,
    canals: &'a [Canal],
    min_saving_km: f64,
) -> Option<CanalPassage<'a>> {
    let mut best: Option<(&Canal, f64)> = None;

    for canal in canals {
        let saving = canal_saving_against_km(start, end, baseline_km, canal);
        if best.is_none_or(|(_, best_saving)| saving > best_saving) {
            best = Some((canal, saving));
        }
    }

    let (canal, saving_km) = best?;
    if saving_km <= min_saving_km {
        return None;
    }

    let (entry, exit) = oriented(canal, start);
    Some(CanalPassage {
        canal,
        entry,
        exit,
        saving_km,
    })
}

/// Waypoints inside the start/end box grown by `margin_deg` and closer than
/// `corridor_km` to the direct line, in registry order
pub fn find_strategic_waypoints<'a>(
    start: Coordinate,
    end: Coordinate,
    waypoints: &'a [StrategicWaypoint],
    corridor_km: f64,
    margin_deg: f64,
) -> Vec<&'a StrategicWaypoint> {
    let Some(bounds) = Bounds::from_points(&[start, end]) else {
        return Vec::new();
    };
    let bounds = bounds.expanded(margin_deg);

    waypoints
        .iter()
        .filter(|w| bounds.contains(w.coordinate))
        .filter(|w| distance_to_segment_km(w.coordinate, start, end) < corridor_km)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::domain::WaypointCategory;
    use crate::registry::data::{CANALS, STRATEGIC_WAYPOINTS};

    fn shortcut(name: &'static str, entry: Coordinate, exit: Coordinate) -> Canal {
        Canal {
            name,
            entry,
            exit,
            width_m: 100.0,
        }
    }

    #[test]
    fn test_direct_baseline_never_beats_the_great_circle() {
        // Alexandria-ish to Jeddah-ish
        let start = Coordinate::new(29.9, 31.5);
        let end = Coordinate::new(39.1, 21.5);
        assert!(CANALS.iter().all(|c| canal_saving_km(start, end, c) <= 1e-6));
        assert!(find_best_canal(start, end, &CANALS, 300.0).is_none());
    }

    #[test]
    fn test_suez_chosen_against_long_baseline() {
        let start = Coordinate::new(29.9, 31.5);
        let end = Coordinate::new(39.1, 21.5);
        let baseline = great_circle_km(start, end) + 1500.0;

        let passage = find_best_canal_against(start, end, baseline, &CANALS, 300.0).unwrap();
        assert_eq!(passage.canal.name, "Suez Canal");
        assert_eq!(passage.entry, Coordinate::new(32.30, 31.26));
        assert!(passage.saving_km > 300.0);
    }

    #[test]
    fn test_best_canal_requires_strict_threshold() {
        let start = Coordinate::new(0.0, 0.0);
        let end = Coordinate::new(20.0, 0.0);
        let canal = shortcut("Cut", Coordinate::new(5.0, 0.0), Coordinate::new(15.0, 0.0));
        let canals = vec![canal];

        // A canal on the direct line saves nothing
        let saving = canal_saving_km(start, end, &canals[0]);
        assert!(saving.abs() < 1e-6);
        assert!(find_best_canal(start, end, &canals, 300.0).is_none());
    }

    #[test]
    fn test_saving_equal_to_threshold_is_rejected() {
        let start = Coordinate::new(0.0, 0.0);
        let end = Coordinate::new(20.0, 0.0);
        let canals = vec![shortcut(
            "Detour",
            Coordinate::new(10.0, 1.0),
            Coordinate::new(10.0, -1.0),
        )];
        let saving = canal_saving_km(start, end, &canals[0]);

        // With the threshold set to exactly the saving, nothing is selected
        assert!(find_best_canal(start, end, &canals, saving).is_none());
        // Just under the threshold it is
        let passage = find_best_canal(start, end, &canals, saving - 1.0).unwrap();
        assert_eq!(passage.canal.name, "Detour");
        assert_eq!(passage.saving_km, saving);
    }

    #[test]
    fn test_saving_of_exactly_300_km_is_rejected_by_default() {
        let min_saving = EngineConfig::default().min_canal_saving_km;
        assert_eq!(min_saving, 300.0);

        let start = Coordinate::new(0.0, 0.0);
        let end = Coordinate::new(10.0, 0.0);
        let canals = vec![shortcut(
            "Cut",
            Coordinate::new(2.0, 0.0),
            Coordinate::new(8.0, 0.0),
        )];
        let via = -canal_saving_against_km(start, end, 0.0, &canals[0]);
        // Within [1024, 1748) km, `via + 300` is exact, so the saving is exactly 300
        assert!((1024.0..1748.0).contains(&via));
        let baseline = via + 300.0;
        assert_eq!(canal_saving_against_km(start, end, baseline, &canals[0]), 300.0);

        assert!(find_best_canal_against(start, end, baseline, &canals, min_saving).is_none());
        let passage =
            find_best_canal_against(start, end, baseline + 1.0, &canals, min_saving).unwrap();
        assert_eq!(passage.canal.name, "Cut");
    }

    #[test]
    fn test_tie_keeps_first_canal() {
        let start = Coordinate::new(0.0, 0.0);
        let end = Coordinate::new(20.0, 0.0);
        let a = shortcut("First", Coordinate::new(5.0, 0.0), Coordinate::new(15.0, 0.0));
        let b = shortcut("Second", Coordinate::new(5.0, 0.0), Coordinate::new(15.0, 0.0));
        let canals = vec![a, b];

        let passage = find_best_canal(start, end, &canals, -1.0).unwrap();
        assert_eq!(passage.canal.name, "First");
    }

    #[test]
    fn test_canal_is_oriented_toward_start() {
        let start = Coordinate::new(20.0, 0.0);
        let end = Coordinate::new(0.0, 0.0);
        let canals = vec![shortcut(
            "Cut",
            Coordinate::new(5.0, 0.0),
            Coordinate::new(15.0, 0.0),
        )];
        let passage = find_best_canal(start, end, &canals, -1.0).unwrap();
        assert_eq!(passage.entry, Coordinate::new(15.0, 0.0));
        assert_eq!(passage.exit, Coordinate::new(5.0, 0.0));
    }

    #[test]
    fn test_strategic_waypoints_for_malacca_route() {
        // Colombo to Singapore
        let start = Coordinate::new(79.85, 6.95);
        let end = Coordinate::new(103.85, 1.29);
        let found = find_strategic_waypoints(start, end, &STRATEGIC_WAYPOINTS, 500.0, 5.0);
        let names: Vec<&str> = found.iter().map(|w| w.name).collect();

        assert!(names.contains(&"Strait of Malacca"));
        assert!(names.contains(&"Port of Singapore"));
        assert!(!names.contains(&"Cape Horn"));
    }

    #[test]
    fn test_strategic_waypoints_require_both_conditions() {
        let start = Coordinate::new(0.0, 0.0);
        let end = Coordinate::new(40.0, 0.0);
        let waypoints = vec![
            StrategicWaypoint {
                name: "Near",
                coordinate: Coordinate::new(20.0, 2.0),
                category: WaypointCategory::Waypoint,
                description: "close to the line",
            },
            StrategicWaypoint {
                name: "InBoxFar",
                coordinate: Coordinate::new(20.0, 4.9),
                category: WaypointCategory::Waypoint,
                description: "inside the box, ~545 km off the line",
            },
            StrategicWaypoint {
                name: "OutOfBox",
                coordinate: Coordinate::new(-5.5, 0.0),
                category: WaypointCategory::Waypoint,
                description: "outside the box",
            },
        ];

        let found = find_strategic_waypoints(start, end, &waypoints, 500.0, 5.0);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Near");
    }
}
