//! GeoJSON model.
//!
//! See <https://datatracker.ietf.org/doc/html/rfc7946>.
//!
//! All positions use the GeoJSON `[lng, lat]` order.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// GeoJSON root object.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(tag = "type")]
pub enum GeoJson<P = Map<String, Value>> {
    FeatureCollection(FeatureCollection<P>),
    Feature(Feature<P>),
    #[serde(untagged)]
    Geometry(Geometry),
}

impl GeoJson {
    /// Parse and validate GeoJSON text.
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Parse and validate a GeoJSON value.
    pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(value)
    }
}

/// GeoJSON feature collection.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(bound(serialize = "P: Serialize"))]
pub struct FeatureCollection<P = Map<String, Value>> {
    #[serde(serialize_with = "serialize_features")]
    pub features: Vec<Feature<P>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bbox: Vec<f64>,
}

impl<P> FeatureCollection<P> {
    pub fn new(features: Vec<Feature<P>>) -> Self {
        Self { features, bbox: Vec::new() }
    }
}

/// GeoJSON feature.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct Feature<P = Map<String, Value>> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<FeatureId>,
    pub geometry: Option<Geometry>,
    pub properties: Option<P>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bbox: Vec<f64>,
}

impl<P> Feature<P> {
    pub fn new(geometry: Geometry, properties: P) -> Self {
        Self { geometry: Some(geometry), properties: Some(properties), id: None, bbox: Vec::new() }
    }
}

/// Serialize features with their `"type": "Feature"` member.
fn serialize_features<S, P>(features: &[Feature<P>], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    P: Serialize,
{
    #[derive(Serialize)]
    #[serde(tag = "type")]
    enum Tagged<'a, P> {
        Feature(&'a Feature<P>),
    }

    serializer.collect_seq(features.iter().map(Tagged::Feature))
}

/// GeoJSON feature ID.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(untagged)]
pub enum FeatureId {
    String(String),
    Integer(i64),
    Float(f64),
}

/// GeoJSON geometry.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(tag = "type")]
pub enum Geometry {
    GeometryCollection(GeometryCollection),
    Point(Coordinate1),
    MultiPoint(Coordinate2),
    LineString(Coordinate2),
    MultiLineString(Coordinate3),
    Polygon(Coordinate3),
    MultiPolygon(Coordinate4),
}

/// GeoJSON geometry collection.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct GeometryCollection {
    pub geometries: Vec<Geometry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bbox: Vec<f64>,
}

/// GeoJSON coordinate point.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct Coordinate1 {
    pub coordinates: Vec<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bbox: Vec<f64>,
}

/// GeoJSON list of coordinate points.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct Coordinate2 {
    pub coordinates: Vec<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bbox: Vec<f64>,
}

/// GeoJSON list of lists of coordinate points.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct Coordinate3 {
    pub coordinates: Vec<Vec<Vec<f64>>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bbox: Vec<f64>,
}

/// GeoJSON list of lists of lists of coordinate points.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct Coordinate4 {
    pub coordinates: Vec<Vec<Vec<Vec<f64>>>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bbox: Vec<f64>,
}

macro_rules! coordinates_from {
    ($($name:ident($coordinates:ty)),+) => {
        $(
            impl From<$coordinates> for $name {
                fn from(coordinates: $coordinates) -> Self {
                    Self { coordinates, bbox: Vec::new() }
                }
            }
        )+
    };
}

coordinates_from!(
    Coordinate1(Vec<f64>),
    Coordinate2(Vec<Vec<f64>>),
    Coordinate3(Vec<Vec<Vec<f64>>>),
    Coordinate4(Vec<Vec<Vec<Vec<f64>>>>)
);

#[cfg(test)]
mod tests {
    use serde_json::json;
    use similar_asserts::assert_eq;

    use super::*;

    #[test]
    fn parse_feature_collection() {
        let text = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "id": 7,
                "geometry": { "type": "Point", "coordinates": [85.3, 27.7] },
                "properties": { "name": "Kathmandu" }
            }]
        }"#;

        let GeoJson::FeatureCollection(collection) = GeoJson::parse(text).unwrap() else {
            panic!("expected feature collection");
        };

        let feature = &collection.features[0];
        assert_eq!(feature.id, Some(FeatureId::Integer(7)));
        assert_eq!(feature.geometry, Some(Geometry::Point(vec![85.3, 27.7].into())));
        assert_eq!(feature.properties.as_ref().unwrap()["name"], json!("Kathmandu"));
    }

    #[test]
    fn parse_bare_geometry() {
        let value = json!({ "type": "LineString", "coordinates": [[0, 0], [1, 1]] });
        let geojson = GeoJson::from_value(&value).unwrap();

        let expected = Geometry::LineString(vec![vec![0., 0.], vec![1., 1.]].into());
        assert_eq!(geojson, GeoJson::Geometry(expected));
    }

    #[test]
    fn reject_invalid() {
        assert!(GeoJson::parse("{").is_err());
        assert!(GeoJson::parse(r#"{ "type": "Circle", "radius": 3 }"#).is_err());
        assert!(GeoJson::parse(r#"{ "type": "Point", "coordinates": "here" }"#).is_err());
    }

    #[test]
    fn serialize_feature() {
        let mut properties = Map::new();
        properties.insert("draggable".into(), json!(true));
        let feature = Feature::new(Geometry::Point(vec![85.3, 27.7].into()), properties);
        let collection = GeoJson::FeatureCollection(FeatureCollection::new(vec![feature]));

        let expected = json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [85.3, 27.7] },
                "properties": { "draggable": true },
            }],
        });
        assert_eq!(serde_json::to_value(&collection).unwrap(), expected);
    }
}
