//! Annotations.
//!
//! An annotation bundles one generated layer and one generated GeoJSON source
//! with drag and user data metadata. The layer and source IDs are derived from
//! the annotation ID, so the same ID always addresses the same style objects.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use indexmap::IndexMap;
use maplibre_style::{
    GeoJsonData, GeoJsonSource, Geometry, Layer, LayerKind, Source, Style, TimeUnit,
};
use serde_json::{Map, Value, json};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::geojson::{Feature, FeatureCollection, GeoJson};
use crate::{Error, geometry, layer, optional, required_str};

/// Prefix of generated annotation layer IDs.
pub const LAYER_ID_PREFIX: &str = "libre_annotation_layer_";

/// Prefix of generated annotation source IDs.
pub const SOURCE_ID_PREFIX: &str = "libre_annotation_source_";

/// Annotation types.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum AnnotationKind {
    Symbol,
    Polygon,
    Polyline,
    Circle,
}

impl AnnotationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Symbol => "symbol",
            Self::Polygon => "polygon",
            Self::Polyline => "polyline",
            Self::Circle => "circle",
        }
    }

    /// Layer type used to render this annotation.
    pub fn layer_kind(&self) -> LayerKind {
        match self {
            Self::Symbol => LayerKind::Symbol,
            Self::Polygon => LayerKind::Fill,
            Self::Polyline => LayerKind::Line,
            Self::Circle => LayerKind::Circle,
        }
    }
}

/// Case-insensitive annotation type parsing.
impl FromStr for AnnotationKind {
    type Err = ();

    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        match kind.to_ascii_lowercase().as_str() {
            "symbol" => Ok(Self::Symbol),
            "polygon" => Ok(Self::Polygon),
            "polyline" => Ok(Self::Polyline),
            "circle" => Ok(Self::Circle),
            _ => Err(()),
        }
    }
}

impl Display for AnnotationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Layer ID of an annotation.
pub fn layer_id(id: u64) -> String {
    format!("{LAYER_ID_PREFIX}{id}")
}

/// Source ID of an annotation.
pub fn source_id(id: u64) -> String {
    format!("{SOURCE_ID_PREFIX}{id}")
}

/// Generate a random annotation ID.
///
/// IDs are a random 5-digit number followed by a random 4-digit number.
pub fn generate_id() -> u64 {
    let head = fastrand::u64(10_000..100_000);
    let tail = fastrand::u64(1_000..10_000);
    head * 10_000 + tail
}

/// Annotation state.
#[derive(PartialEq, Clone, Debug)]
pub struct Annotation {
    pub id: u64,
    pub kind: AnnotationKind,
    pub layer: Layer,
    pub geometry: Option<Geometry>,
    pub draggable: bool,
    pub data: Map<String, Value>,
}

impl Annotation {
    pub fn layer_id(&self) -> String {
        layer_id(self.id)
    }

    pub fn source_id(&self) -> String {
        source_id(self.id)
    }

    /// Get the GeoJSON source holding this annotation's geometry.
    ///
    /// The geometry is stored as a single feature with the annotation's data
    /// as properties.
    pub fn source(&self) -> Result<Source, Error> {
        let geojson = match &self.geometry {
            Some(geometry) => {
                let geometry = geometry::to_geojson(geometry);
                GeoJson::Feature(Feature::new(geometry, self.data.clone()))
            },
            None => GeoJson::FeatureCollection(FeatureCollection::new(Vec::new())),
        };

        Ok(Source::GeoJson(GeoJsonSource {
            id: self.source_id(),
            data: GeoJsonData::Inline(serde_json::to_string(&geojson)?),
            options: Default::default(),
        }))
    }

    /// Describe the annotation for the channel.
    pub fn to_value(&self) -> Value {
        json!({
            "id": self.id,
            "type": self.kind.as_str(),
            "layerId": self.layer_id(),
            "sourceId": self.source_id(),
            "layer": layer::extract(&self.layer),
            "geometry": self.geometry.as_ref().map(geometry::to_value),
            "data": self.data,
            "draggable": self.draggable,
        })
    }

    /// Merge new options into this annotation.
    fn update(&mut self, options: &Value, unit: TimeUnit, keep_holes: bool) {
        layer::apply_properties(&mut self.layer, options, unit);
        self.apply_options(options, keep_holes);
    }

    /// Apply everything except layer properties from the options.
    fn apply_options(&mut self, options: &Value, keep_holes: bool) {
        // The top-level icon always wins over the layout bag.
        if let Some(icon_image) = optional(options, "icon-image") {
            match self.kind {
                AnnotationKind::Symbol => {
                    layer::set_layout(&mut self.layer, "icon-image", icon_image);
                },
                _ => debug!("Ignoring icon-image for {} annotation {}", self.kind, self.id),
            }
        }

        if let Some(draggable) = optional(options, "draggable") {
            match draggable.as_bool() {
                Some(draggable) => self.draggable = draggable,
                None => debug!("Ignoring non-boolean draggable for annotation {}", self.id),
            }
        }

        if let Some(data) = optional(options, "data") {
            match data.as_object() {
                Some(data) => self.data.extend(data.clone()),
                None => debug!("Ignoring non-object data for annotation {}", self.id),
            }
        }

        if let Some(value) = optional(options, "geometry") {
            match geometry::build(value, keep_holes) {
                Some(geometry) => self.geometry = Some(geometry),
                None => debug!("Ignoring invalid geometry for annotation {}: {value}", self.id),
            }
        }
    }
}

/// Build an annotation, generating an ID if none was requested.
pub fn build(descriptor: &Value, config: &Config) -> Result<Annotation, Error> {
    let id = requested_id(descriptor)?.unwrap_or_else(generate_id);
    assemble(descriptor, id, config)
}

/// Get the caller-supplied annotation ID.
fn requested_id(descriptor: &Value) -> Result<Option<u64>, Error> {
    match optional(descriptor, "id") {
        Some(id) => id.as_u64().map(Some).ok_or(Error::InvalidField("id")),
        None => Ok(None),
    }
}

/// Build an annotation with a known ID.
fn assemble(descriptor: &Value, id: u64, config: &Config) -> Result<Annotation, Error> {
    let kind_name = required_str(descriptor, "type")?;
    let kind = kind_name
        .parse::<AnnotationKind>()
        .map_err(|_| Error::UnknownAnnotationType(kind_name.into()))?;

    let unit = config.platform.target.time_unit();
    let bag = json!({ "layerId": layer_id(id), "sourceId": source_id(id) });
    let layer = layer::build(kind.layer_kind(), &bag, unit)?;

    let mut annotation =
        Annotation { id, kind, layer, geometry: None, draggable: false, data: Map::new() };

    if let Some(options) = optional(descriptor, "options") {
        annotation.update(options, unit, config.geometry.polygon_holes);
    }

    Ok(annotation)
}

/// Live annotations and their style objects.
#[derive(Default, Debug)]
pub struct AnnotationManager {
    annotations: IndexMap<u64, Annotation>,
}

impl AnnotationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new annotation and its layer and source to the style.
    pub fn add(
        &mut self,
        style: &mut Style,
        descriptor: &Value,
        config: &Config,
    ) -> Result<&Annotation, Error> {
        let id = match requested_id(descriptor)? {
            Some(id) if self.annotations.contains_key(&id) => {
                return Err(Error::DuplicateAnnotation(id));
            },
            Some(id) => id,
            None => self.generate_id(config.annotation.unique_ids),
        };

        let annotation = assemble(descriptor, id, config)?;

        // Insert source first, since the layer depends on it.
        style.add_source(annotation.source()?)?;
        if let Err(err) = style.add_layer(annotation.layer.clone()) {
            if let Err(err) = style.remove_source(&annotation.source_id()) {
                warn!("Failed to roll back source of annotation {id}: {err}");
            }
            return Err(err.into());
        }

        info!("Added {} annotation {id}", annotation.kind);

        let (index, _) = self.annotations.insert_full(id, annotation);
        Ok(&self.annotations[index])
    }

    /// Merge new options into an existing annotation.
    pub fn update(
        &mut self,
        style: &mut Style,
        descriptor: &Value,
        config: &Config,
    ) -> Result<&Annotation, Error> {
        let id = requested_id(descriptor)?.ok_or(Error::MissingField("id"))?;
        let annotation = self.annotations.get_mut(&id).ok_or(Error::AnnotationNotFound(id))?;

        // Stored state only changes once the style accepted the update.
        let mut updated = annotation.clone();
        if let Some(options) = optional(descriptor, "options") {
            let unit = config.platform.target.time_unit();
            updated.update(options, unit, config.geometry.polygon_holes);
        }

        let source = updated.source()?;
        let previous_layer = style.replace_layer(updated.layer.clone())?;
        if let Err(err) = style.replace_source(source) {
            if let Err(err) = style.replace_layer(previous_layer) {
                warn!("Failed to restore layer of annotation {id}: {err}");
            }
            return Err(err.into());
        }

        *annotation = updated;

        info!("Updated {} annotation {id}", annotation.kind);

        Ok(annotation)
    }

    /// Remove an annotation and its style objects.
    pub fn remove(&mut self, style: &mut Style, id: u64) -> Result<Annotation, Error> {
        let annotation = self.annotations.shift_remove(&id).ok_or(Error::AnnotationNotFound(id))?;

        if let Err(err) = style.remove_layer(&annotation.layer_id()) {
            warn!("Failed to remove layer of annotation {id}: {err}");
        }
        if let Err(err) = style.remove_source(&annotation.source_id()) {
            warn!("Failed to remove source of annotation {id}: {err}");
        }

        info!("Removed {} annotation {id}", annotation.kind);

        Ok(annotation)
    }

    pub fn get(&self, id: u64) -> Option<&Annotation> {
        self.annotations.get(&id)
    }

    /// Iterate over all annotations in insertion order.
    pub fn annotations(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations.values()
    }

    /// Generate an annotation ID.
    fn generate_id(&self, unique: bool) -> u64 {
        loop {
            let id = generate_id();
            if !unique || !self.annotations.contains_key(&id) {
                return id;
            }
            debug!("Generated annotation ID {id} is taken, retrying");
        }
    }
}
