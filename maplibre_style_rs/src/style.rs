//! Style container.

use indexmap::IndexMap;

use crate::Error;
use crate::layer::Layer;
use crate::source::Source;

/// Ordered collection of layers and sources.
///
/// Layers are stored in render order, from bottom to top.
#[derive(Default, Debug)]
pub struct Style {
    layers: IndexMap<String, Layer>,
    sources: IndexMap<String, Source>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a layer on top of all existing layers.
    pub fn add_layer(&mut self, layer: Layer) -> Result<(), Error> {
        if self.layers.contains_key(layer.id()) {
            return Err(Error::DuplicateLayer(layer.id().into()));
        }

        self.layers.insert(layer.id().into(), layer);

        Ok(())
    }

    /// Add a layer directly below another layer.
    pub fn add_layer_below(&mut self, layer: Layer, below: &str) -> Result<(), Error> {
        if self.layers.contains_key(layer.id()) {
            return Err(Error::DuplicateLayer(layer.id().into()));
        }

        let index = match self.layers.get_index_of(below) {
            Some(index) => index,
            None => return Err(Error::MissingLayer(below.into())),
        };
        self.layers.shift_insert(index, layer.id().into(), layer);

        Ok(())
    }

    /// Replace an existing layer, keeping its position.
    pub fn replace_layer(&mut self, layer: Layer) -> Result<Layer, Error> {
        match self.layers.get_mut(layer.id()) {
            Some(old) => Ok(std::mem::replace(old, layer)),
            None => Err(Error::MissingLayer(layer.id().into())),
        }
    }

    pub fn remove_layer(&mut self, id: &str) -> Result<Layer, Error> {
        self.layers.shift_remove(id).ok_or_else(|| Error::MissingLayer(id.into()))
    }

    pub fn layer(&self, id: &str) -> Option<&Layer> {
        self.layers.get(id)
    }

    /// Iterate over all layers from bottom to top.
    pub fn layers(&self) -> impl Iterator<Item = &Layer> {
        self.layers.values()
    }

    pub fn add_source(&mut self, source: Source) -> Result<(), Error> {
        if self.sources.contains_key(source.id()) {
            return Err(Error::DuplicateSource(source.id().into()));
        }

        self.sources.insert(source.id().into(), source);

        Ok(())
    }

    /// Replace an existing source's data.
    pub fn replace_source(&mut self, source: Source) -> Result<Source, Error> {
        match self.sources.get_mut(source.id()) {
            Some(old) => Ok(std::mem::replace(old, source)),
            None => Err(Error::MissingSource(source.id().into())),
        }
    }

    /// Remove a source which is not referenced by any layer.
    pub fn remove_source(&mut self, id: &str) -> Result<Source, Error> {
        let user = self.layers().find(|layer| layer.meta().source_id.as_deref() == Some(id));
        if let Some(layer) = user {
            return Err(Error::SourceInUse(id.into(), layer.id().into()));
        }

        self.sources.shift_remove(id).ok_or_else(|| Error::MissingSource(id.into()))
    }

    pub fn source(&self, id: &str) -> Option<&Source> {
        self.sources.get(id)
    }

    /// Iterate over all sources in insertion order.
    pub fn sources(&self) -> impl Iterator<Item = &Source> {
        self.sources.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::{BackgroundLayer, FillLayer, LineLayer};
    use crate::source::{GeoJsonData, GeoJsonSource};

    fn geojson_source(id: &str) -> Source {
        Source::GeoJson(GeoJsonSource {
            id: id.into(),
            data: GeoJsonData::Url("https://example.org/data.json".into()),
            options: Default::default(),
        })
    }

    fn layer_ids(style: &Style) -> Vec<&str> {
        style.layers().map(Layer::id).collect()
    }

    #[test]
    fn layer_order() {
        let mut style = Style::new();
        style.add_layer(BackgroundLayer::new("bg").into()).unwrap();
        style.add_layer(LineLayer::new("roads", "osm").into()).unwrap();
        style.add_layer_below(FillLayer::new("water", "osm").into(), "roads").unwrap();

        assert_eq!(layer_ids(&style), ["bg", "water", "roads"]);

        style.remove_layer("water").unwrap();
        assert_eq!(layer_ids(&style), ["bg", "roads"]);
    }

    #[test]
    fn duplicate_layer() {
        let mut style = Style::new();
        style.add_layer(BackgroundLayer::new("bg").into()).unwrap();

        let result = style.add_layer(BackgroundLayer::new("bg").into());
        assert_eq!(result, Err(Error::DuplicateLayer("bg".into())));

        let result = style.add_layer_below(FillLayer::new("water", "osm").into(), "missing");
        assert_eq!(result, Err(Error::MissingLayer("missing".into())));
    }

    #[test]
    fn replace_keeps_position() {
        let mut style = Style::new();
        style.add_layer(FillLayer::new("water", "osm").into()).unwrap();
        style.add_layer(LineLayer::new("roads", "osm").into()).unwrap();

        let mut water = FillLayer::new("water", "osm");
        water.meta.min_zoom = 5.;
        let old = style.replace_layer(water.into()).unwrap();

        assert_eq!(old.meta().min_zoom, 0.);
        assert_eq!(layer_ids(&style), ["water", "roads"]);
        assert_eq!(style.layer("water").map(|layer| layer.meta().min_zoom), Some(5.));
    }

    #[test]
    fn source_in_use() {
        let mut style = Style::new();
        style.add_source(geojson_source("osm")).unwrap();
        style.add_layer(LineLayer::new("roads", "osm").into()).unwrap();

        let result = style.remove_source("osm");
        assert_eq!(result, Err(Error::SourceInUse("osm".into(), "roads".into())));

        style.remove_layer("roads").unwrap();
        assert!(style.remove_source("osm").is_ok());
        assert!(style.source("osm").is_none());
    }
}
