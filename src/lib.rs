//! MapLibre Native style translation.
//!
//! Translates loosely typed JSON descriptions of layers, sources, geometries
//! and annotations into the typed style objects of [`maplibre_style`], and
//! typed objects back into JSON for introspection.
//!
//! Structural problems like missing identifiers abort a translation with an
//! [`Error`], while individual properties which cannot be translated are
//! skipped without failing the whole object.

pub mod annotation;
pub mod channel;
pub mod coerce;
pub mod config;
pub mod geojson;
pub mod geometry;
pub mod layer;
pub mod source;
pub mod transition;

pub use maplibre_style;
use serde_json::Value;

/// Get a required string field.
pub(crate) fn required_str<'a>(bag: &'a Value, field: &'static str) -> Result<&'a str, Error> {
    match bag.get(field) {
        None | Some(Value::Null) => Err(Error::MissingField(field)),
        Some(value) => value.as_str().ok_or(Error::InvalidField(field)),
    }
}

/// Get an optional field, treating `null` as absent.
pub(crate) fn optional<'a>(bag: &'a Value, field: &str) -> Option<&'a Value> {
    bag.get(field).filter(|value| !value.is_null())
}

/// Fatal translation error.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Style(#[from] maplibre_style::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required field {0:?}")]
    MissingField(&'static str),
    #[error("Field {0:?} has an invalid value")]
    InvalidField(&'static str),
    #[error("Unknown layer type {0:?}")]
    UnknownLayerType(String),
    #[error("Unknown source type {0:?}")]
    UnknownSourceType(String),
    #[error("Unknown annotation type {0:?}")]
    UnknownAnnotationType(String),
    #[error("Source {0:?} requires {1}")]
    MissingLocator(String, &'static str),
    #[error("Source {0:?} has conflicting {1}")]
    ConflictingLocator(String, &'static str),
    #[error("Source {0:?} has invalid GeoJSON data: {1}")]
    InvalidGeoJson(String, #[source] serde_json::Error),
    #[error("Source {0:?} requires exactly four [lat, lng] corner coordinates")]
    InvalidCoordinates(String),
    #[error("No annotation with ID {0}")]
    AnnotationNotFound(u64),
    #[error("Annotation {0} already exists")]
    DuplicateAnnotation(u64),
    #[error("Method {0:?} is not implemented")]
    UnknownMethod(String),
}

impl Error {
    /// Stable error label reported across the channel.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Style(maplibre_style::Error::DuplicateLayer(_)) => "duplicateLayer",
            Self::Style(maplibre_style::Error::DuplicateSource(_)) => "duplicateSource",
            Self::Style(maplibre_style::Error::MissingLayer(_)) => "layerNotFound",
            Self::Style(maplibre_style::Error::MissingSource(_)) => "sourceNotFound",
            Self::Style(maplibre_style::Error::SourceInUse(..)) => "sourceInUse",
            Self::Json(_) => "invalidJson",
            Self::MissingField(_) => "missingField",
            Self::InvalidField(_) => "invalidField",
            Self::UnknownLayerType(_) => "unknownLayerType",
            Self::UnknownSourceType(_) => "unknownSourceType",
            Self::UnknownAnnotationType(_) => "unknownAnnotationType",
            Self::MissingLocator(..) => "missingLocator",
            Self::ConflictingLocator(..) => "conflictingLocator",
            Self::InvalidGeoJson(..) => "invalidGeoJson",
            Self::InvalidCoordinates(_) => "invalidCoordinates",
            Self::AnnotationNotFound(_) => "annotationNotFound",
            Self::DuplicateAnnotation(_) => "duplicateAnnotation",
            Self::UnknownMethod(_) => "notImplemented",
        }
    }
}
