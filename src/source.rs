//! Source translation.
//!
//! Sources are described by their type and a `details` object:
//!
//! ```json
//! { "type": "geojson", "details": { "id": "route", "url": "https://example.org/route.json" } }
//! ```

use maplibre_style::{
    DemEncoding, GeoJsonData, GeoJsonOptions, GeoJsonSource, ImageSource, LatLng, LatLngQuad,
    RasterDemSource, Source, StyleEnum, TileLocator, TileOptions, TileScheme, TileSet, TileSource,
};
use serde_json::{Value, json};
use tracing::debug;

use crate::config::{SourceDefaults, Target};
use crate::geojson::GeoJson;
use crate::{Error, optional, required_str};

/// Source types.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum SourceKind {
    GeoJson,
    Vector,
    Raster,
    RasterDem,
    Image,
}

impl TryFrom<&str> for SourceKind {
    type Error = Error;

    fn try_from(kind: &str) -> Result<Self, Error> {
        match kind {
            "geojson" => Ok(Self::GeoJson),
            "vector" => Ok(Self::Vector),
            "raster" => Ok(Self::Raster),
            "raster-dem" => Ok(Self::RasterDem),
            "image" => Ok(Self::Image),
            _ => Err(Error::UnknownSourceType(kind.into())),
        }
    }
}

/// Build a source from its description.
pub fn build(
    descriptor: &Value,
    defaults: &SourceDefaults,
    target: Target,
) -> Result<Source, Error> {
    let kind = SourceKind::try_from(required_str(descriptor, "type")?)?;
    let details = optional(descriptor, "details").ok_or(Error::MissingField("details"))?;
    let id = required_str(details, "id")?;

    let source = match kind {
        SourceKind::GeoJson => Source::GeoJson(geojson(id, details)?),
        SourceKind::Vector => Source::Vector(tiles(id, details, defaults, target)?),
        SourceKind::Raster => Source::Raster(tiles(id, details, defaults, target)?),
        SourceKind::RasterDem => {
            let tiles = tiles(id, details, defaults, target)?;
            let encoding = match optional(details, "encoding").and_then(Value::as_str) {
                Some(encoding) => DemEncoding::from_style_str(encoding).unwrap_or_else(|| {
                    debug!("Unknown DEM encoding {encoding:?} for {id:?}, using mapbox");
                    DemEncoding::Mapbox
                }),
                None => DemEncoding::Mapbox,
            };
            Source::RasterDem(RasterDemSource { tiles, encoding })
        },
        SourceKind::Image => Source::Image(image(id, details)?),
    };

    Ok(source)
}

/// Summarize a source for introspection.
pub fn extract(source: &Source) -> Value {
    let zoom_range = source.zoom_range();
    let mut summary = json!({
        "id": source.id(),
        "type": source.type_name(),
        "minzoom": zoom_range.map(|(min_zoom, _)| min_zoom),
        "maxzoom": zoom_range.map(|(_, max_zoom)| max_zoom),
    });

    if let Some(url) = source.url() {
        summary["url"] = url.into();
    }
    if let Some(attribution) = source.attribution() {
        summary["attribution"] = attribution.into();
    }

    summary
}

fn geojson(id: &str, details: &Value) -> Result<GeoJsonSource, Error> {
    let data = match (optional(details, "url"), optional(details, "data")) {
        (Some(url), None) => {
            let url = url.as_str().ok_or(Error::InvalidField("url"))?;
            GeoJsonData::Url(url.into())
        },
        (None, Some(data)) => GeoJsonData::Inline(inline_geojson(id, data)?),
        (Some(_), Some(_)) => return Err(Error::ConflictingLocator(id.into(), "url and data")),
        (None, None) => return Err(Error::MissingLocator(id.into(), "url or data")),
    };

    let options = GeoJsonOptions {
        max_zoom: number(details, "maxzoom"),
        buffer: integer(details, "buffer"),
        tolerance: number(details, "tolerance"),
        line_metrics: flag(details, "lineMetrics"),
        attribution: string(details, "attribution"),
        cluster: flag(details, "cluster"),
        cluster_radius: integer(details, "clusterRadius"),
        cluster_max_zoom: number(details, "clusterMaxZoom"),
    };

    Ok(GeoJsonSource { id: id.into(), data, options })
}

/// Validate inline GeoJSON, provided either as text or as JSON object.
///
/// The data is stored as sent, so foreign members survive validation.
fn inline_geojson(id: &str, data: &Value) -> Result<String, Error> {
    let (validated, text) = match data {
        Value::String(text) => (GeoJson::parse(text), text.clone()),
        data => (GeoJson::from_value(data), data.to_string()),
    };
    validated.map_err(|err| Error::InvalidGeoJson(id.into(), err))?;

    Ok(text)
}

/// Tile set fields which are only used together with `tiles` templates.
const TILE_SET_FIELDS: [&str; 5] = ["bounds", "attribution", "minzoom", "maxzoom", "scheme"];

fn tiles(
    id: &str,
    details: &Value,
    defaults: &SourceDefaults,
    target: Target,
) -> Result<TileSource, Error> {
    let templates = match optional(details, "tiles") {
        Some(tiles) => {
            let tiles = tiles.as_array().ok_or(Error::InvalidField("tiles"))?;
            let templates = tiles.iter().map(|template| template.as_str().map(String::from));
            templates.collect::<Option<Vec<_>>>().ok_or(Error::InvalidField("tiles"))?
        },
        None => Vec::new(),
    };

    let locator = match (optional(details, "url"), templates.is_empty()) {
        (Some(url), true) => {
            let url = url.as_str().ok_or(Error::InvalidField("url"))?;

            // TileJSON documents carry their own tile set metadata.
            for field in TILE_SET_FIELDS {
                if optional(details, field).is_some() {
                    debug!("Ignoring {field} for {id:?}, it is read from the TileJSON at {url:?}");
                }
            }

            TileLocator::Url(url.into())
        },
        (None, false) => {
            let mut tile_set = TileSet::new(templates);
            tile_set.bounds = optional(details, "bounds").and_then(bounds);
            tile_set.attribution = string(details, "attribution");
            tile_set.min_zoom = number(details, "minzoom").unwrap_or(defaults.min_zoom);
            tile_set.max_zoom = number(details, "maxzoom").unwrap_or(defaults.max_zoom);
            tile_set.scheme = match optional(details, "scheme").and_then(Value::as_str) {
                Some(scheme) => TileScheme::from_style_str(scheme).unwrap_or_else(|| {
                    debug!("Unknown tile scheme {scheme:?} for {id:?}, using xyz");
                    TileScheme::Xyz
                }),
                None => TileScheme::Xyz,
            };
            TileLocator::Tiles(tile_set)
        },
        (Some(_), false) => return Err(Error::ConflictingLocator(id.into(), "url and tiles")),
        (None, true) => return Err(Error::MissingLocator(id.into(), "url or tiles")),
    };

    let tile_size = integer(details, "tileSize").unwrap_or(defaults.tile_size);
    let options = tile_options(id, details, target);

    Ok(TileSource { id: id.into(), locator, tile_size, options })
}

/// Parse platform-specific tile loading knobs.
///
/// Unsupported knobs are accepted, but not applied.
fn tile_options(id: &str, details: &Value, target: Target) -> TileOptions {
    let options = TileOptions {
        volatile: optional(details, "volatile").and_then(Value::as_bool),
        prefetch_zoom_delta: integer(details, "prefetchZoomDelta"),
        minimum_tile_update_interval: integer(details, "minimumTileUpdateInterval"),
        max_overscale_factor_for_parent_tiles: integer(details, "maxOverscaleFactorForParentTiles"),
    };

    if target.supports_tile_tuning() || options == TileOptions::default() {
        return options;
    }

    debug!("Dropping tile options unsupported on {target} for {id:?}");
    TileOptions::default()
}

fn image(id: &str, details: &Value) -> Result<ImageSource, Error> {
    let url = required_str(details, "url")?;

    let coordinates = optional(details, "coordinates")
        .and_then(corners)
        .ok_or_else(|| Error::InvalidCoordinates(id.into()))?;

    Ok(ImageSource { id: id.into(), url: url.into(), coordinates })
}

/// Parse the four `[lat, lng]` image corners.
///
/// Corners are accepted either as list in clockwise order starting at the top
/// left corner, or as object with one key per corner.
fn corners(value: &Value) -> Option<LatLngQuad> {
    let [top_left, top_right, bottom_right, bottom_left] = match value {
        Value::Array(corners) => <&[Value; 4]>::try_from(corners.as_slice()).ok()?.each_ref(),
        Value::Object(corners) => [
            corners.get("top_left")?,
            corners.get("top_right")?,
            corners.get("bottom_right")?,
            corners.get("bottom_left")?,
        ],
        _ => return None,
    };

    Some(LatLngQuad {
        top_left: corner(top_left)?,
        top_right: corner(top_right)?,
        bottom_right: corner(bottom_right)?,
        bottom_left: corner(bottom_left)?,
    })
}

/// Parse a strict `[lat, lng]` pair.
fn corner(value: &Value) -> Option<LatLng> {
    match value.as_array()?.as_slice() {
        [lat, lng] => Some(LatLng::new(lat.as_f64()?, lng.as_f64()?)),
        _ => None,
    }
}

fn bounds(value: &Value) -> Option<[f64; 4]> {
    let bounds = value.as_array()?.iter().map(Value::as_f64).collect::<Option<Vec<_>>>()?;
    bounds.try_into().ok()
}

fn number(details: &Value, field: &str) -> Option<f64> {
    optional(details, field).and_then(Value::as_f64)
}

fn integer<T: TryFrom<u64>>(details: &Value, field: &str) -> Option<T> {
    let value = optional(details, field)?.as_u64()?;
    T::try_from(value).ok()
}

fn flag(details: &Value, field: &str) -> bool {
    optional(details, field).and_then(Value::as_bool).unwrap_or(false)
}

fn string(details: &Value, field: &str) -> Option<String> {
    optional(details, field).and_then(Value::as_str).map(String::from)
}

#[cfg(test)]
mod tests {
    use rstest::*;
    use similar_asserts::assert_eq;

    use super::*;

    fn build_default(descriptor: &Value) -> Result<Source, Error> {
        build(descriptor, &SourceDefaults::default(), Target::Android)
    }

    #[test]
    fn geojson_locator() {
        let missing = json!({ "type": "geojson", "details": { "id": "s1" } });
        assert!(matches!(build_default(&missing), Err(Error::MissingLocator(..))));

        let url = json!({ "type": "geojson", "details": { "id": "s1", "url": "https://x/y.json" } });
        let source = build_default(&url).unwrap();
        assert_eq!(source.url(), Some("https://x/y.json"));

        let both = json!({
            "type": "geojson",
            "details": { "id": "s1", "url": "https://x/y.json", "data": "{}" },
        });
        assert!(matches!(build_default(&both), Err(Error::ConflictingLocator(..))));
    }

    #[test]
    fn geojson_inline() {
        let data = r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[85.3,27.7]},"properties":null}"#;
        let descriptor = json!({
            "type": "geojson",
            "details": { "id": "s1", "data": data, "cluster": true, "clusterRadius": 40 },
        });
        let Source::GeoJson(source) = build_default(&descriptor).unwrap() else {
            panic!("expected geojson source");
        };

        assert_eq!(source.data, GeoJsonData::Inline(data.into()));
        assert!(source.options.cluster);
        assert_eq!(source.options.cluster_radius, Some(40));

        let object = json!({
            "type": "geojson",
            "details": { "id": "s1", "data": { "type": "FeatureCollection", "features": [] } },
        });
        assert!(build_default(&object).is_ok());

        let invalid = json!({ "type": "geojson", "details": { "id": "s1", "data": "{\"type\":" } });
        assert!(matches!(build_default(&invalid), Err(Error::InvalidGeoJson(..))));
    }

    #[test]
    fn geojson_options() {
        let descriptor = json!({
            "type": "geojson",
            "details": {
                "id": "trails",
                "url": "https://x/trails.json",
                "maxzoom": 16,
                "buffer": 64,
                "tolerance": 0.5,
                "lineMetrics": true,
                "attribution": "© Trail Club",
            },
        });
        let Source::GeoJson(source) = build_default(&descriptor).unwrap() else {
            panic!("expected geojson source");
        };

        let expected = GeoJsonOptions {
            max_zoom: Some(16.),
            buffer: Some(64),
            tolerance: Some(0.5),
            line_metrics: true,
            attribution: Some("© Trail Club".into()),
            ..GeoJsonOptions::default()
        };
        assert_eq!(source.options, expected);
    }

    #[test]
    fn geojson_inline_kept_verbatim() {
        let data = r#"{"type":"FeatureCollection","name":"roads","features":[{"type":"Feature","id":18446744073709551615,"geometry":null,"properties":{}}]}"#;
        let descriptor = json!({ "type": "geojson", "details": { "id": "roads", "data": data } });
        let Source::GeoJson(source) = build_default(&descriptor).unwrap() else {
            panic!("expected geojson source");
        };
        assert_eq!(source.data, GeoJsonData::Inline(data.into()));

        let object: Value = serde_json::from_str(data).unwrap();
        let descriptor = json!({ "type": "geojson", "details": { "id": "roads", "data": object } });
        let Source::GeoJson(source) = build_default(&descriptor).unwrap() else {
            panic!("expected geojson source");
        };
        let GeoJsonData::Inline(stored) = source.data else { panic!("expected inline data") };

        let stored: Value = serde_json::from_str(&stored).unwrap();
        assert_eq!(stored["name"], json!("roads"));
        assert_eq!(stored["features"][0]["id"].as_u64(), Some(u64::MAX));
    }

    #[test]
    fn tile_json_ignores_tile_set_fields() {
        let descriptor = json!({
            "type": "raster",
            "details": { "id": "sat", "url": "https://x/sat.json", "minzoom": 3, "scheme": "tms" },
        });
        let source = build_default(&descriptor).unwrap();

        assert_eq!(source.url(), Some("https://x/sat.json"));
        assert_eq!(source.zoom_range(), None);
    }

    #[rstest]
    #[case("vector")]
    #[case("raster")]
    #[case("raster-dem")]
    fn tiled_locator(#[case] kind: &str) {
        let missing = json!({ "type": kind, "details": { "id": "tiles" } });
        assert!(matches!(build_default(&missing), Err(Error::MissingLocator(..))));

        let empty = json!({ "type": kind, "details": { "id": "tiles", "tiles": [] } });
        assert!(matches!(build_default(&empty), Err(Error::MissingLocator(..))));

        let url = json!({ "type": kind, "details": { "id": "tiles", "url": "https://x/t.json" } });
        assert_eq!(build_default(&url).unwrap().type_name(), kind);

        let both = json!({
            "type": kind,
            "details": { "id": "tiles", "url": "https://x/t.json", "tiles": ["https://x/{z}"] },
        });
        assert!(matches!(build_default(&both), Err(Error::ConflictingLocator(..))));
    }

    #[test]
    fn tile_set_defaults() {
        let descriptor = json!({
            "type": "vector",
            "details": {
                "id": "osm",
                "tiles": ["https://example.org/{z}/{x}/{y}.pbf"],
                "bounds": [-180, -85, 180, 85],
                "scheme": "tms",
                "maxzoom": 14,
                "attribution": "© OpenStreetMap",
            },
        });
        let Source::Vector(source) = build_default(&descriptor).unwrap() else {
            panic!("expected vector source");
        };

        let TileLocator::Tiles(tile_set) = &source.locator else { panic!("expected tile set") };
        assert_eq!(tile_set.bounds, Some([-180., -85., 180., 85.]));
        assert_eq!(tile_set.scheme, TileScheme::Tms);
        assert_eq!(tile_set.min_zoom, 0.);
        assert_eq!(tile_set.max_zoom, 14.);
        assert_eq!(source.tile_size, 256);

        let expected = json!({
            "id": "osm",
            "type": "vector",
            "minzoom": 0.,
            "maxzoom": 14.,
            "attribution": "© OpenStreetMap",
        });
        assert_eq!(extract(&Source::Vector(source)), expected);
    }

    #[test]
    fn platform_knobs() {
        let descriptor = json!({
            "type": "raster",
            "details": {
                "id": "imagery",
                "url": "https://example.org/tiles.json",
                "volatile": true,
                "prefetchZoomDelta": 2,
                "minimumTileUpdateInterval": 500,
                "maxOverscaleFactorForParentTiles": 3,
            },
        });

        let Source::Raster(android) = build_default(&descriptor).unwrap() else {
            panic!("expected raster source");
        };
        let expected = TileOptions {
            volatile: Some(true),
            prefetch_zoom_delta: Some(2),
            minimum_tile_update_interval: Some(500),
            max_overscale_factor_for_parent_tiles: Some(3),
        };
        assert_eq!(android.options, expected);

        let ios = build(&descriptor, &SourceDefaults::default(), Target::Ios).unwrap();
        let Source::Raster(ios) = ios else { panic!("expected raster source") };
        assert_eq!(ios.options, TileOptions::default());
    }

    #[test]
    fn dem_encoding() {
        let descriptor = json!({
            "type": "raster-dem",
            "details": { "id": "dem", "url": "https://x/dem.json", "encoding": "terrarium" },
        });
        let Source::RasterDem(source) = build_default(&descriptor).unwrap() else {
            panic!("expected raster-dem source");
        };
        assert_eq!(source.encoding, DemEncoding::Terrarium);

        let descriptor = json!({
            "type": "raster-dem",
            "details": { "id": "dem", "url": "https://x/dem.json", "encoding": "lerc" },
        });
        let Source::RasterDem(source) = build_default(&descriptor).unwrap() else {
            panic!("expected raster-dem source");
        };
        assert_eq!(source.encoding, DemEncoding::Mapbox);
    }

    #[test]
    fn image_corners() {
        let descriptor = json!({
            "type": "image",
            "details": {
                "id": "overlay",
                "url": "https://example.org/overlay.png",
                "coordinates": [[46.0, 8.0], [46.0, 9.0], [45.0, 9.0], [45.0, 8.0]],
            },
        });
        let Source::Image(source) = build_default(&descriptor).unwrap() else {
            panic!("expected image source");
        };
        assert_eq!(source.coordinates.top_left, LatLng::new(46., 8.));
        assert_eq!(source.coordinates.bottom_left, LatLng::new(45., 8.));

        let descriptor = json!({
            "type": "image",
            "details": {
                "id": "overlay",
                "url": "https://example.org/overlay.png",
                "coordinates": {
                    "top_left": [46.0, 8.0],
                    "top_right": [46.0, 9.0],
                    "bottom_right": [45.0, 9.0],
                    "bottom_left": [45.0, 8.0],
                },
            },
        });
        assert!(build_default(&descriptor).is_ok());
    }

    #[rstest]
    #[case(json!([[46.0, 8.0], [46.0, 9.0], [45.0, 9.0]]))]
    #[case(json!([[46.0, 8.0], [46.0, 9.0], [45.0, 9.0], [45.0, 8.0], [44.0, 8.0]]))]
    #[case(json!([[46.0, 8.0], [46.0, 9.0], [45.0, 9.0], [45.0, 8.0, 1.0]]))]
    #[case(json!({ "top_left": [46.0, 8.0] }))]
    #[case(json!(null))]
    fn invalid_corners(#[case] coordinates: Value) {
        let descriptor = json!({
            "type": "image",
            "details": { "id": "overlay", "url": "https://x/o.png", "coordinates": coordinates },
        });
        assert!(matches!(build_default(&descriptor), Err(Error::InvalidCoordinates(_))));
    }

    #[test]
    fn structural_errors() {
        let unknown = json!({ "type": "video", "details": { "id": "v" } });
        assert!(matches!(build_default(&unknown), Err(Error::UnknownSourceType(_))));

        let no_details = json!({ "type": "vector" });
        assert!(matches!(build_default(&no_details), Err(Error::MissingField("details"))));

        let no_id = json!({ "type": "vector", "details": {} });
        assert!(matches!(build_default(&no_id), Err(Error::MissingField("id"))));

        let no_url = json!({ "type": "image", "details": { "id": "overlay" } });
        assert!(matches!(build_default(&no_url), Err(Error::MissingField("url"))));
    }
}
