//! Background layer properties.

use maplibre_style::BackgroundLayer;
use serde_json::Value;

use crate::coerce::property;
use crate::layer::{Assignment, LayerProperties, assign};

impl LayerProperties for BackgroundLayer {
    fn set_paint(&mut self, name: &str, value: &Value) -> Assignment {
        let paint = &mut self.paint;
        match name {
            "background-color" => assign(&mut paint.background_color, property(value)),
            "background-pattern" => assign(&mut paint.background_pattern, property(value)),
            "background-opacity" => assign(&mut paint.background_opacity, property(value)),
            _ => Assignment::Unknown,
        }
    }
}
