//! Geometry translation.
//!
//! Geometries are described by GeoJSON-shaped objects, but with positions in
//! `[lat, lng]` order:
//!
//! ```json
//! { "type": "Point", "coordinates": [27.7, 85.3] }
//! ```

use maplibre_style::{Geometry, LatLng, Polygon};
use serde_json::{Value, json};
use tracing::debug;

use crate::geojson;

/// Build a geometry from its description.
///
/// Malformed positions are skipped, while geometries without any valid
/// position or with an unknown type are rejected entirely.
pub fn build(value: &Value, keep_holes: bool) -> Option<Geometry> {
    let kind = value.get("type")?.as_str()?;
    let coordinates = value.get("coordinates")?;

    let geometry = match kind {
        "Point" => Geometry::Point(position(coordinates)?),
        "LineString" => Geometry::LineString(positions(coordinates)?),
        "MultiPoint" => Geometry::MultiPoint(positions(coordinates)?),
        "Polygon" => Geometry::Polygon(polygon(coordinates, keep_holes)?),
        "MultiLineString" => {
            let lines: Vec<_> = coordinates.as_array()?.iter().filter_map(positions).collect();
            Geometry::MultiLineString(non_empty(lines)?)
        },
        "MultiPolygon" => {
            let groups = coordinates.as_array()?.iter();
            let polygons: Vec<_> = groups.filter_map(|group| polygon(group, true)).collect();
            Geometry::MultiPolygon(non_empty(polygons)?)
        },
        _ => {
            debug!("Ignoring unknown geometry type {kind:?}");
            return None;
        },
    };

    Some(geometry)
}

/// Describe a geometry using `[lat, lng]` positions.
pub fn to_value(geometry: &Geometry) -> Value {
    let coordinates = match geometry {
        Geometry::Point(point) => json!(lat_lng(point)),
        Geometry::LineString(points) | Geometry::MultiPoint(points) => json!(lat_lngs(points)),
        Geometry::Polygon(polygon) => json!(polygon_lat_lngs(polygon)),
        Geometry::MultiLineString(lines) => {
            json!(lines.iter().map(|line| lat_lngs(line)).collect::<Vec<_>>())
        },
        Geometry::MultiPolygon(polygons) => {
            json!(polygons.iter().map(polygon_lat_lngs).collect::<Vec<_>>())
        },
    };

    json!({ "type": geometry.type_name(), "coordinates": coordinates })
}

/// Convert a geometry to GeoJSON with `[lng, lat]` positions.
pub fn to_geojson(geometry: &Geometry) -> geojson::Geometry {
    let position = |point: &LatLng| point.to_position().to_vec();
    let line = |points: &[LatLng]| points.iter().map(position).collect::<Vec<_>>();
    let rings = |polygon: &Polygon| polygon.rings().map(|ring| line(ring)).collect::<Vec<_>>();

    match geometry {
        Geometry::Point(point) => geojson::Geometry::Point(position(point).into()),
        Geometry::LineString(points) => geojson::Geometry::LineString(line(points).into()),
        Geometry::MultiPoint(points) => geojson::Geometry::MultiPoint(line(points).into()),
        Geometry::Polygon(polygon) => geojson::Geometry::Polygon(rings(polygon).into()),
        Geometry::MultiLineString(lines) => {
            let lines = lines.iter().map(|points| line(points)).collect::<Vec<_>>();
            geojson::Geometry::MultiLineString(lines.into())
        },
        Geometry::MultiPolygon(polygons) => {
            let polygons = polygons.iter().map(rings).collect::<Vec<_>>();
            geojson::Geometry::MultiPolygon(polygons.into())
        },
    }
}

/// Parse a `[lat, lng]` position, ignoring additional values.
fn position(value: &Value) -> Option<LatLng> {
    match value.as_array()?.as_slice() {
        [lat, lng, ..] => Some(LatLng::new(lat.as_f64()?, lng.as_f64()?)),
        _ => None,
    }
}

/// Parse a list of positions, skipping malformed ones.
fn positions(value: &Value) -> Option<Vec<LatLng>> {
    let values = value.as_array()?;
    let points: Vec<_> = values.iter().filter_map(position).collect();

    let skipped = values.len() - points.len();
    if skipped > 0 {
        debug!("Skipped {skipped} malformed positions");
    }

    non_empty(points)
}

/// Parse polygon rings.
///
/// The first well-formed ring is used as exterior, all others are holes.
fn polygon(value: &Value, keep_holes: bool) -> Option<Polygon> {
    let mut rings = value.as_array()?.iter().filter_map(positions);
    let exterior = rings.next()?;

    let holes = if keep_holes { rings.collect() } else { Vec::new() };

    Some(Polygon::new(exterior, holes))
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    (!items.is_empty()).then_some(items)
}

fn lat_lng(point: &LatLng) -> [f64; 2] {
    [point.latitude, point.longitude]
}

fn lat_lngs(points: &[LatLng]) -> Vec<[f64; 2]> {
    points.iter().map(lat_lng).collect()
}

fn polygon_lat_lngs(polygon: &Polygon) -> Vec<Vec<[f64; 2]>> {
    polygon.rings().map(|ring| lat_lngs(ring)).collect()
}
