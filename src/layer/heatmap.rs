//! Heatmap layer properties.

use maplibre_style::HeatmapLayer;
use serde_json::Value;

use crate::coerce::property;
use crate::layer::{Assignment, LayerProperties, assign};

impl LayerProperties for HeatmapLayer {
    fn set_paint(&mut self, name: &str, value: &Value) -> Assignment {
        let paint = &mut self.paint;
        match name {
            "heatmap-radius" => assign(&mut paint.heatmap_radius, property(value)),
            "heatmap-weight" => assign(&mut paint.heatmap_weight, property(value)),
            "heatmap-intensity" => assign(&mut paint.heatmap_intensity, property(value)),
            "heatmap-color" => assign(&mut paint.heatmap_color, property(value)),
            "heatmap-opacity" => assign(&mut paint.heatmap_opacity, property(value)),
            _ => Assignment::Unknown,
        }
    }
}
