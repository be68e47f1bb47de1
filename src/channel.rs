//! Method channel dispatch.
//!
//! Every call names a method like `layer#add` and carries its arguments as a
//! JSON value. Replies are either `{"result": ...}` or
//! `{"error": {"code": ..., "message": ...}}`.

use maplibre_style::Style;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::annotation::{Annotation, AnnotationManager};
use crate::config::Config;
use crate::{Error, geometry, layer, optional, required_str, source};

/// Incoming method call.
#[derive(Deserialize, Clone, Debug)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub arguments: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, arguments: Value) -> Self {
        Self { method: method.into(), arguments }
    }
}

/// Method call reply.
#[derive(Serialize, PartialEq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Reply {
    Result(Value),
    Error(ErrorReply),
}

impl From<&Error> for Reply {
    fn from(err: &Error) -> Self {
        Self::Error(ErrorReply { code: err.code(), message: err.to_string() })
    }
}

/// Failed method call details.
#[derive(Serialize, PartialEq, Debug)]
pub struct ErrorReply {
    pub code: &'static str,
    pub message: String,
}

/// Translation bridge state.
#[derive(Default, Debug)]
pub struct Bridge {
    style: Style,
    annotations: AnnotationManager,
    config: Config,
}

impl Bridge {
    pub fn new(config: Config) -> Self {
        Self { config, ..Default::default() }
    }

    /// Update the active configuration.
    ///
    /// Only objects translated after the update are affected.
    pub fn set_config(&mut self, config: Config) {
        info!("Updated configuration, platform target is {}", config.platform.target);
        self.config = config;
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Handle a method call.
    pub fn handle(&mut self, call: &MethodCall) -> Reply {
        match self.dispatch(&call.method, &call.arguments) {
            Ok(result) => Reply::Result(result),
            Err(err) => {
                warn!("Rejected {:?} call: {err}", call.method);
                Reply::from(&err)
            },
        }
    }

    fn dispatch(&mut self, method: &str, arguments: &Value) -> Result<Value, Error> {
        let unit = self.config.platform.target.time_unit();

        match method {
            "layer#add" => {
                let layer = layer::from_descriptor(arguments, unit)?;
                let summary = layer::extract(&layer);

                match optional(arguments, "belowLayerId") {
                    Some(below) => {
                        let below = below.as_str().ok_or(Error::InvalidField("belowLayerId"))?;
                        self.style.add_layer_below(layer, below)?;
                    },
                    None => self.style.add_layer(layer)?,
                }

                info!("Added layer {}", summary["id"]);

                Ok(summary)
            },
            "layer#remove" => {
                let id = required_str(arguments, "layerId")?;
                let layer = self.style.remove_layer(id)?;

                info!("Removed layer {id:?}");

                Ok(layer::extract(&layer))
            },
            "layer#list" => Ok(self.style.layers().map(layer::extract).collect()),
            "source#add" => {
                let target = self.config.platform.target;
                let source = source::build(arguments, &self.config.source, target)?;
                let summary = source::extract(&source);

                self.style.add_source(source)?;

                info!("Added source {}", summary["id"]);

                Ok(summary)
            },
            "source#remove" => {
                let id = required_str(arguments, "sourceId")?;
                let source = self.style.remove_source(id)?;

                info!("Removed source {id:?}");

                Ok(source::extract(&source))
            },
            "source#list" => Ok(self.style.sources().map(source::extract).collect()),
            "annotation#add" => {
                let annotation = self.annotations.add(&mut self.style, arguments, &self.config)?;
                Ok(annotation.to_value())
            },
            "annotation#update" => {
                let annotation =
                    self.annotations.update(&mut self.style, arguments, &self.config)?;
                Ok(annotation.to_value())
            },
            "annotation#remove" => {
                let id = match optional(arguments, "id") {
                    Some(id) => id.as_u64().ok_or(Error::InvalidField("id"))?,
                    None => return Err(Error::MissingField("id")),
                };
                let annotation = self.annotations.remove(&mut self.style, id)?;
                Ok(annotation.to_value())
            },
            "annotation#list" => Ok(self.annotations.annotations().map(Annotation::to_value).collect()),
            "geometry#parse" => {
                let geometry = geometry::build(arguments, self.config.geometry.polygon_holes);
                Ok(geometry.as_ref().map_or(Value::Null, geometry::to_value))
            },
            _ => Err(Error::UnknownMethod(method.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use similar_asserts::assert_eq;

    use super::*;

    fn call(bridge: &mut Bridge, method: &str, arguments: Value) -> Reply {
        bridge.handle(&MethodCall::new(method, arguments))
    }

    fn error_code(reply: Reply) -> &'static str {
        match reply {
            Reply::Error(error) => error.code,
            Reply::Result(result) => panic!("expected error, got {result}"),
        }
    }

    #[test]
    fn parse_call() {
        let call: MethodCall = serde_json::from_str(r#"{ "method": "layer#list" }"#).unwrap();
        assert_eq!(call.method, "layer#list");
        assert_eq!(call.arguments, Value::Null);
    }

    #[test]
    fn reply_format() {
        let reply = Reply::Result(json!([1, 2]));
        assert_eq!(serde_json::to_value(&reply).unwrap(), json!({ "result": [1, 2] }));

        let reply = Reply::from(&Error::MissingField("layerId"));
        let expected = json!({
            "error": { "code": "missingField", "message": "Missing required field \"layerId\"" },
        });
        assert_eq!(serde_json::to_value(&reply).unwrap(), expected);
    }

    #[test]
    fn layer_lifecycle() {
        let mut bridge = Bridge::default();

        let reply = call(&mut bridge, "layer#add", json!({
            "type": "background",
            "layerId": "bg",
            "properties": { "paint": { "background-color": "#202020" } },
        }));
        assert!(matches!(reply, Reply::Result(_)));

        let reply = call(&mut bridge, "layer#add", json!({
            "type": "line",
            "layerId": "roads",
            "sourceId": "osm",
            "belowLayerId": "bg",
        }));
        assert!(matches!(reply, Reply::Result(_)));

        let Reply::Result(layers) = call(&mut bridge, "layer#list", Value::Null) else {
            panic!("expected layer list");
        };
        let ids: Vec<_> = layers.as_array().unwrap().iter().map(|layer| layer["id"].clone()).collect();
        assert_eq!(ids, vec![json!("roads"), json!("bg")]);

        let reply = call(&mut bridge, "layer#add", json!({ "type": "background", "layerId": "bg" }));
        assert_eq!(error_code(reply), "duplicateLayer");

        let reply = call(&mut bridge, "layer#remove", json!({ "layerId": "roads" }));
        assert!(matches!(reply, Reply::Result(_)));
        assert!(bridge.style().layer("roads").is_none());

        let reply = call(&mut bridge, "layer#remove", json!({ "layerId": "roads" }));
        assert_eq!(error_code(reply), "layerNotFound");
    }

    #[test]
    fn layer_errors() {
        let mut bridge = Bridge::default();

        let reply = call(&mut bridge, "layer#add", json!({ "type": "sky", "layerId": "sky" }));
        assert_eq!(error_code(reply), "unknownLayerType");

        let reply = call(&mut bridge, "layer#add", json!({ "type": "fill", "layerId": "water" }));
        assert_eq!(error_code(reply), "missingField");
    }

    #[test]
    fn source_lifecycle() {
        let mut bridge = Bridge::default();

        let reply = call(&mut bridge, "source#add", json!({
            "type": "vector",
            "details": { "id": "osm", "url": "https://tiles.example.org/osm.json" },
        }));
        assert!(matches!(reply, Reply::Result(_)));

        let Reply::Result(sources) = call(&mut bridge, "source#list", Value::Null) else {
            panic!("expected source list");
        };
        let expected = json!([{
            "id": "osm",
            "type": "vector",
            "minzoom": null,
            "maxzoom": null,
            "url": "https://tiles.example.org/osm.json",
        }]);
        assert_eq!(sources, expected);

        let reply = call(&mut bridge, "source#add", json!({ "type": "video", "details": { "id": "v" } }));
        assert_eq!(error_code(reply), "unknownSourceType");

        let reply = call(&mut bridge, "source#remove", json!({ "sourceId": "osm" }));
        assert!(matches!(reply, Reply::Result(_)));
        assert_eq!(bridge.style().sources().count(), 0);
    }

    #[test]
    fn annotation_lifecycle() {
        let mut bridge = Bridge::default();

        let reply = call(&mut bridge, "annotation#add", json!({
            "type": "Circle",
            "id": 77,
            "options": { "paint": { "circle-radius": 4 }, "draggable": true },
        }));
        let Reply::Result(annotation) = reply else { panic!("expected annotation") };
        assert_eq!(annotation["layerId"], json!("libre_annotation_layer_77"));
        assert_eq!(annotation["draggable"], json!(true));

        let reply = call(&mut bridge, "annotation#update", json!({
            "id": 77,
            "options": { "draggable": false },
        }));
        let Reply::Result(annotation) = reply else { panic!("expected annotation") };
        assert_eq!(annotation["draggable"], json!(false));

        let Reply::Result(annotations) = call(&mut bridge, "annotation#list", Value::Null) else {
            panic!("expected annotation list");
        };
        assert_eq!(annotations.as_array().map(Vec::len), Some(1));

        let reply = call(&mut bridge, "annotation#remove", json!({ "id": 77 }));
        assert!(matches!(reply, Reply::Result(_)));

        let reply = call(&mut bridge, "annotation#remove", json!({ "id": 77 }));
        assert_eq!(error_code(reply), "annotationNotFound");

        let reply = call(&mut bridge, "annotation#remove", json!({}));
        assert_eq!(error_code(reply), "missingField");
    }

    #[test]
    fn parse_geometry() {
        let mut bridge = Bridge::default();

        let geometry = json!({ "type": "Point", "coordinates": [27.7, 85.3] });
        let reply = call(&mut bridge, "geometry#parse", geometry.clone());
        assert_eq!(reply, Reply::Result(geometry));

        let reply = call(&mut bridge, "geometry#parse", json!({ "type": "Point" }));
        assert_eq!(reply, Reply::Result(Value::Null));
    }

    #[test]
    fn unknown_method() {
        let mut bridge = Bridge::default();
        let reply = call(&mut bridge, "camera#move", Value::Null);
        assert_eq!(error_code(reply), "notImplemented");
    }
}
