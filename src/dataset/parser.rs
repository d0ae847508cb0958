use crate::api::land::{Feature, Geometry, LandDocument, Ring};
use crate::domain::{Coordinate, LandPolygon, LandPolygonSet};

/// Property keys tried, in order, for a polygon's display name
const NAME_KEYS: [&str; 3] = ["name", "NAME", "ADMIN"];

/// Parse a decoded GeoJSON document into the land model
///
/// # Algorithm
/// 1. Walk features (or the bare geometry) in document order
/// 2. Polygon -> one LandPolygon, MultiPolygon -> one per member
/// 3. Other geometry types are skipped
/// 4. Rings are closed; rings with fewer than 4 positions are dropped,
///    and a polygon whose outer ring is dropped is skipped entirely
pub fn parse_land(document: &LandDocument) -> LandPolygonSet {
    let mut polygons = Vec::new();

    match document {
        LandDocument::FeatureCollection { features } => {
            for feature in features {
                collect_feature(feature, &mut polygons);
            }
        }
        LandDocument::Feature(feature) => collect_feature(feature, &mut polygons),
        LandDocument::Polygon { coordinates } => {
            polygons.extend(build_polygon(coordinates, None));
        }
        LandDocument::MultiPolygon { coordinates } => {
            for member in coordinates {
                polygons.extend(build_polygon(member, None));
            }
        }
        LandDocument::Unsupported => {}
    }

    LandPolygonSet::new(polygons)
}

fn collect_feature(feature: &Feature, out: &mut Vec<LandPolygon>) {
    let name = feature_name(feature);
    if let Some(geometry) = &feature.geometry {
        collect_geometry(geometry, &name, out);
    }
}

fn collect_geometry(geometry: &Geometry, name: &Option<String>, out: &mut Vec<LandPolygon>) {
    match geometry {
        Geometry::Polygon { coordinates } => out.extend(build_polygon(coordinates, name.clone())),
        Geometry::MultiPolygon { coordinates } => {
            for member in coordinates {
                out.extend(build_polygon(member, name.clone()));
            }
        }
        Geometry::GeometryCollection { geometries } => {
            for inner in geometries {
                collect_geometry(inner, name, out);
            }
        }
        Geometry::Unsupported => {}
    }
}

fn feature_name(feature: &Feature) -> Option<String> {
    let properties = feature.properties.as_ref()?;
    NAME_KEYS
        .iter()
        .find_map(|key| properties.get(*key).and_then(|v| v.as_str()))
        .map(str::to_string)
}

fn build_polygon(rings: &[Ring], name: Option<String>) -> Option<LandPolygon> {
    let mut rings = rings.iter().map(resolve_ring);
    let outer = rings.next()??;
    let holes: Vec<Vec<Coordinate>> = rings.flatten().collect();
    Some(LandPolygon::new(outer, holes, name))
}

fn resolve_ring(ring: &Ring) -> Option<Vec<Coordinate>> {
    let mut points: Vec<Coordinate> = ring
        .iter()
        .filter(|p| p.len() >= 2 && p[0].is_finite() && p[1].is_finite())
        .map(|p| Coordinate::new(p[0], p[1]))
        .collect();

    if !is_closed_ring(&points)
        && let Some(&first) = points.first()
    {
        points.push(first);
    }

    if points.len() < 4 {
        return None;
    }
    Some(points)
}

fn is_closed_ring(points: &[Coordinate]) -> bool {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() >= 2 => {
            (first.lon - last.lon).abs() < 1e-9 && (first.lat - last.lat).abs() < 1e-9
        }
        _ => false,
    }
}
