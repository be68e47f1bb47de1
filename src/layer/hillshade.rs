//! Hillshade layer properties.

use maplibre_style::{HillshadeLayer, IlluminationAnchor};
use serde_json::Value;

use crate::coerce::{enum_property, property};
use crate::layer::{Assignment, LayerProperties, assign};

impl LayerProperties for HillshadeLayer {
    fn set_paint(&mut self, name: &str, value: &Value) -> Assignment {
        let paint = &mut self.paint;
        match name {
            "hillshade-illumination-direction" => {
                assign(&mut paint.hillshade_illumination_direction, property(value))
            },
            "hillshade-illumination-anchor" => {
                let anchor = enum_property(name, value, IlluminationAnchor::Viewport);
                assign(&mut paint.hillshade_illumination_anchor, anchor)
            },
            "hillshade-exaggeration" => assign(&mut paint.hillshade_exaggeration, property(value)),
            "hillshade-shadow-color" => assign(&mut paint.hillshade_shadow_color, property(value)),
            "hillshade-highlight-color" => {
                assign(&mut paint.hillshade_highlight_color, property(value))
            },
            "hillshade-accent-color" => assign(&mut paint.hillshade_accent_color, property(value)),
            _ => Assignment::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use maplibre_style::PropertyValue;
    use serde_json::json;

    use super::*;

    #[test]
    fn illumination_anchor_fallback() {
        let mut hillshade = HillshadeLayer::new("terrain", "dem");

        hillshade.set_paint("hillshade-illumination-anchor", &json!("sun"));
        let expected = PropertyValue::Constant(IlluminationAnchor::Viewport);
        assert_eq!(hillshade.paint.hillshade_illumination_anchor, Some(expected));
    }
}
