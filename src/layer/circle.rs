//! Circle layer properties.

use maplibre_style::{Alignment, CircleLayer, PitchScale, TranslateAnchor};
use serde_json::Value;

use crate::coerce::{enum_property, property};
use crate::layer::{Assignment, LayerProperties, assign};

impl LayerProperties for CircleLayer {
    fn set_layout(&mut self, name: &str, value: &Value) -> Assignment {
        match name {
            "circle-sort-key" => assign(&mut self.layout.circle_sort_key, property(value)),
            _ => Assignment::Unknown,
        }
    }

    fn set_paint(&mut self, name: &str, value: &Value) -> Assignment {
        let paint = &mut self.paint;
        match name {
            "circle-radius" => assign(&mut paint.circle_radius, property(value)),
            "circle-color" => assign(&mut paint.circle_color, property(value)),
            "circle-blur" => assign(&mut paint.circle_blur, property(value)),
            "circle-opacity" => assign(&mut paint.circle_opacity, property(value)),
            "circle-translate" => assign(&mut paint.circle_translate, property(value)),
            "circle-translate-anchor" => {
                let anchor = enum_property(name, value, TranslateAnchor::Map);
                assign(&mut paint.circle_translate_anchor, anchor)
            },
            "circle-pitch-scale" => {
                let scale = enum_property(name, value, PitchScale::Map);
                assign(&mut paint.circle_pitch_scale, scale)
            },
            "circle-pitch-alignment" => {
                let alignment = enum_property(name, value, Alignment::Viewport);
                assign(&mut paint.circle_pitch_alignment, alignment)
            },
            "circle-stroke-width" => assign(&mut paint.circle_stroke_width, property(value)),
            "circle-stroke-color" => assign(&mut paint.circle_stroke_color, property(value)),
            "circle-stroke-opacity" => assign(&mut paint.circle_stroke_opacity, property(value)),
            _ => Assignment::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use maplibre_style::{Color, PropertyValue};
    use rstest::*;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case("map", Alignment::Map)]
    #[case("viewport", Alignment::Viewport)]
    #[case("auto", Alignment::Auto)]
    #[case("sideways", Alignment::Viewport)]
    fn pitch_alignment(#[case] raw: &str, #[case] expected: Alignment) {
        let mut circle = CircleLayer::new("poi", "osm");
        assert_eq!(circle.set_paint("circle-pitch-alignment", &json!(raw)), Assignment::Applied);
        assert_eq!(circle.paint.circle_pitch_alignment, Some(PropertyValue::Constant(expected)));
    }

    #[test]
    fn argb_stroke() {
        let mut circle = CircleLayer::new("poi", "osm");
        circle.set_paint("circle-stroke-color", &json!(0xff00ff00_u32));

        let expected = PropertyValue::Constant(Color::new(0, 255, 0, 255));
        assert_eq!(circle.paint.circle_stroke_color, Some(expected));
    }
}
