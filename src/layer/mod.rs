//! Layer property translation.
//!
//! A layer is described by a property bag:
//!
//! ```json
//! {
//!     "layerId": "route",
//!     "sourceId": "route-source",
//!     "minzoom": 4,
//!     "filter": "[\"==\", \"class\", \"primary\"]",
//!     "properties": {
//!         "layout": { "line-cap": "round" },
//!         "paint": { "line-color": "#ff0000" },
//!         "transition": { "line-color-transition": { "delay": 0, "duration": 300 } }
//!     }
//! }
//! ```

use maplibre_style::{Expression, Layer, LayerKind, PropertyValue, TimeUnit, Visibility};
use serde_json::{Map, Value, json};
use tracing::debug;

use crate::coerce::{self, StyleValue};
use crate::{Error, optional, required_str, transition};

mod background;
mod circle;
mod fill;
mod fill_extrusion;
mod heatmap;
mod hillshade;
mod line;
mod raster;
mod symbol;

/// Result of setting a single property.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Assignment {
    /// Property was translated and set.
    Applied,
    /// Property is known, but its value could not be translated.
    Skipped,
    /// Property has no typed setter.
    Unknown,
}

/// Typed property setters of a layer kind.
pub trait LayerProperties {
    /// Set a layout property by its style specification name.
    fn set_layout(&mut self, _name: &str, _value: &Value) -> Assignment {
        Assignment::Unknown
    }

    /// Set a paint property by its style specification name.
    fn set_paint(&mut self, name: &str, value: &Value) -> Assignment;
}

/// Store a coerced value in its property slot.
///
/// Properties which failed to coerce leave the previous value untouched.
fn assign<T>(slot: &mut Option<PropertyValue<T>>, value: Option<PropertyValue<T>>) -> Assignment {
    match value {
        Some(value) => {
            *slot = Some(value);
            Assignment::Applied
        },
        None => Assignment::Skipped,
    }
}

/// Build a layer from a descriptor carrying its `type`.
pub fn from_descriptor(descriptor: &Value, unit: TimeUnit) -> Result<Layer, Error> {
    let kind_name = required_str(descriptor, "type")?;
    let kind = kind_name.parse().map_err(|_| Error::UnknownLayerType(kind_name.into()))?;
    build(kind, descriptor, unit)
}

/// Build a typed layer from its property bag.
pub fn build(kind: LayerKind, bag: &Value, unit: TimeUnit) -> Result<Layer, Error> {
    let layer_id = required_str(bag, "layerId")?;
    let source_id = match kind {
        LayerKind::Background => None,
        _ => Some(required_str(bag, "sourceId")?.to_owned()),
    };

    let mut layer = Layer::new(kind, layer_id, source_id);
    apply_metadata(&mut layer, bag);

    if let Some(properties) = optional(bag, "properties") {
        apply_properties(&mut layer, properties, unit);
    }

    Ok(layer)
}

/// Apply the layer-level `filter`, `minzoom`, `maxzoom` and `source-layer`.
pub fn apply_metadata(layer: &mut Layer, bag: &Value) {
    let feature_layer = layer.kind().is_some_and(|kind| kind.is_feature_layer());
    let meta = layer.meta_mut();

    if let Some(filter) = optional(bag, "filter") {
        match coerce::coerce(filter) {
            StyleValue::Expression(expression) => meta.filter = Some(expression),
            // Filters are always expressions, even when sent as JSON lists.
            StyleValue::Literal(list @ Value::Array(_)) => {
                meta.filter = Some(Expression::new(list.to_string()));
            },
            StyleValue::Literal(_) => debug!("Ignoring invalid filter for {:?}: {filter}", meta.id),
        }
    }

    match optional(bag, "minzoom").map(Value::as_f64) {
        Some(Some(min_zoom)) => meta.min_zoom = min_zoom,
        Some(None) => debug!("Ignoring non-numeric minzoom for {:?}", meta.id),
        None => (),
    }

    match optional(bag, "maxzoom").map(Value::as_f64) {
        Some(Some(max_zoom)) => meta.max_zoom = max_zoom,
        Some(None) => debug!("Ignoring non-numeric maxzoom for {:?}", meta.id),
        None => (),
    }

    if let Some(source_layer) = optional(bag, "source-layer") {
        match source_layer.as_str() {
            Some(source_layer) if feature_layer => meta.source_layer = Some(source_layer.into()),
            _ => debug!("Ignoring source-layer for {:?}", meta.id),
        }
    }
}

/// Apply the `layout`, `paint` and `transition` bags to a layer.
///
/// This is used both for new layers and for updating existing ones.
pub fn apply_properties(layer: &mut Layer, properties: &Value, unit: TimeUnit) {
    for (name, value) in category(properties, "layout") {
        set_layout(layer, name, value);
    }

    for (name, value) in category(properties, "paint") {
        set_paint(layer, name, value);
    }

    for (key, entry) in category(properties, "transition") {
        set_transition(layer, key, entry, unit);
    }
}

/// Set a single layout property.
pub fn set_layout(layer: &mut Layer, name: &str, value: &Value) -> Assignment {
    let assignment = if name == "visibility" {
        let visibility = coerce::enum_property(name, value, Visibility::Visible);
        assign(&mut layer.meta_mut().visibility, visibility)
    } else {
        match properties_mut(layer) {
            Some(properties) => properties.set_layout(name, value),
            None => Assignment::Unknown,
        }
    };

    match assignment {
        Assignment::Skipped => debug!("Skipping invalid {name} value for {:?}: {value}", layer.id()),
        Assignment::Unknown => {
            let value = passthrough(name, value);
            layer.meta_mut().extra_layout.insert(name.into(), value);
        },
        Assignment::Applied => (),
    }

    assignment
}

/// Set a single paint property.
pub fn set_paint(layer: &mut Layer, name: &str, value: &Value) -> Assignment {
    let assignment = match properties_mut(layer) {
        Some(properties) => properties.set_paint(name, value),
        None => Assignment::Unknown,
    };

    match assignment {
        Assignment::Skipped => debug!("Skipping invalid {name} value for {:?}: {value}", layer.id()),
        Assignment::Unknown => {
            let value = passthrough(name, value);
            layer.meta_mut().extra_paint.insert(name.into(), value);
        },
        Assignment::Applied => (),
    }

    assignment
}

/// Attach a `*-transition` entry to its paint property.
pub fn set_transition(layer: &mut Layer, key: &str, entry: &Value, unit: TimeUnit) -> bool {
    let Some(property) = transition::target_property(key) else {
        debug!("Ignoring unknown transition key {key:?}");
        return false;
    };

    let Some(timing) = transition::decode(entry) else {
        debug!("Dropping incomplete transition {key:?}: {entry}");
        return false;
    };

    let applied = layer.set_transition(property, transition::encode(timing, unit));
    if !applied {
        debug!("Ignoring transition for unsupported property {property:?} on {:?}", layer.id());
    }
    applied
}

/// Summarize a layer for introspection.
///
/// Only identity fields are reported, paint and layout state is not.
pub fn extract(layer: &Layer) -> Value {
    let meta = layer.meta();
    json!({
        "id": meta.id,
        "type": layer.type_name(),
        "min_zoom": meta.min_zoom,
        "max_zoom": meta.max_zoom,
        "sourceId": meta.source_id,
        "sourceLayer": meta.source_layer,
    })
}

/// Get the typed property setters of a layer.
fn properties_mut(layer: &mut Layer) -> Option<&mut dyn LayerProperties> {
    match layer {
        Layer::Symbol(layer) => Some(layer),
        Layer::Fill(layer) => Some(layer),
        Layer::Line(layer) => Some(layer),
        Layer::Circle(layer) => Some(layer),
        Layer::Raster(layer) => Some(layer),
        Layer::FillExtrusion(layer) => Some(layer),
        Layer::Heatmap(layer) => Some(layer),
        Layer::Hillshade(layer) => Some(layer),
        Layer::Background(layer) => Some(layer),
        Layer::Unknown(_) => None,
    }
}

/// Iterate over one category of the `properties` bag.
fn category<'a>(properties: &'a Value, name: &str) -> impl Iterator<Item = (&'a str, &'a Value)> {
    let entries = match optional(properties, name) {
        Some(Value::Object(entries)) => Some(entries),
        Some(value) => {
            debug!("Ignoring non-object {name} properties: {value}");
            None
        },
        None => None,
    };

    entries.into_iter().flat_map(Map::iter).map(|(key, value)| (key.as_str(), value))
}

/// Convert a property without typed setter.
///
/// Colors are normalized to hex strings, everything else is forwarded as-is.
fn passthrough(name: &str, value: &Value) -> PropertyValue<Value> {
    match coerce::coerce(value) {
        StyleValue::Expression(expression) => PropertyValue::Expression(expression),
        StyleValue::Literal(literal) if coerce::is_color_property(name) => {
            match coerce::property::<maplibre_style::Color>(literal) {
                Some(PropertyValue::Constant(color)) => {
                    PropertyValue::Constant(Value::String(color.to_string()))
                },
                _ => PropertyValue::Constant(literal.clone()),
            }
        },
        StyleValue::Literal(literal) => PropertyValue::Constant(literal.clone()),
    }
}
