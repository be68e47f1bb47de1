//! Fill layer properties.

use maplibre_style::{FillLayer, TranslateAnchor};
use serde_json::Value;

use crate::coerce::{enum_property, property};
use crate::layer::{Assignment, LayerProperties, assign};

impl LayerProperties for FillLayer {
    fn set_layout(&mut self, name: &str, value: &Value) -> Assignment {
        match name {
            "fill-sort-key" => assign(&mut self.layout.fill_sort_key, property(value)),
            _ => Assignment::Unknown,
        }
    }

    fn set_paint(&mut self, name: &str, value: &Value) -> Assignment {
        let paint = &mut self.paint;
        match name {
            "fill-antialias" => assign(&mut paint.fill_antialias, property(value)),
            "fill-opacity" => assign(&mut paint.fill_opacity, property(value)),
            "fill-color" => assign(&mut paint.fill_color, property(value)),
            "fill-outline-color" => assign(&mut paint.fill_outline_color, property(value)),
            "fill-translate" => assign(&mut paint.fill_translate, property(value)),
            "fill-translate-anchor" => {
                let anchor = enum_property(name, value, TranslateAnchor::Map);
                assign(&mut paint.fill_translate_anchor, anchor)
            },
            "fill-pattern" => assign(&mut paint.fill_pattern, property(value)),
            _ => Assignment::Unknown,
        }
    }
}
