//! Fill extrusion layer properties.

use maplibre_style::{FillExtrusionLayer, TranslateAnchor};
use serde_json::Value;

use crate::coerce::{enum_property, property};
use crate::layer::{Assignment, LayerProperties, assign};

impl LayerProperties for FillExtrusionLayer {
    fn set_paint(&mut self, name: &str, value: &Value) -> Assignment {
        let paint = &mut self.paint;
        match name {
            "fill-extrusion-opacity" => assign(&mut paint.fill_extrusion_opacity, property(value)),
            "fill-extrusion-color" => assign(&mut paint.fill_extrusion_color, property(value)),
            "fill-extrusion-translate" => {
                assign(&mut paint.fill_extrusion_translate, property(value))
            },
            "fill-extrusion-translate-anchor" => {
                let anchor = enum_property(name, value, TranslateAnchor::Map);
                assign(&mut paint.fill_extrusion_translate_anchor, anchor)
            },
            "fill-extrusion-pattern" => assign(&mut paint.fill_extrusion_pattern, property(value)),
            "fill-extrusion-height" => assign(&mut paint.fill_extrusion_height, property(value)),
            "fill-extrusion-base" => assign(&mut paint.fill_extrusion_base, property(value)),
            "fill-extrusion-vertical-gradient" => {
                assign(&mut paint.fill_extrusion_vertical_gradient, property(value))
            },
            _ => Assignment::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use maplibre_style::{Expression, PropertyValue};
    use serde_json::json;

    use super::*;

    #[test]
    fn translate_anchor() {
        let mut extrusion = FillExtrusionLayer::new("buildings", "osm");

        extrusion.set_paint("fill-extrusion-translate-anchor", &json!("viewport"));
        let expected = PropertyValue::Constant(TranslateAnchor::Viewport);
        assert_eq!(extrusion.paint.fill_extrusion_translate_anchor, Some(expected));

        extrusion.set_paint("fill-extrusion-translate-anchor", &json!("screen"));
        let expected = PropertyValue::Constant(TranslateAnchor::Map);
        assert_eq!(extrusion.paint.fill_extrusion_translate_anchor, Some(expected));
    }

    #[test]
    fn height_expression() {
        let mut extrusion = FillExtrusionLayer::new("buildings", "osm");

        extrusion.set_paint("fill-extrusion-height", &json!("[\"get\", \"height\"]"));
        extrusion.set_paint("fill-extrusion-vertical-gradient", &json!(false));

        let expected = PropertyValue::Expression(Expression::new("[\"get\", \"height\"]"));
        assert_eq!(extrusion.paint.fill_extrusion_height, Some(expected));
        let expected = PropertyValue::Constant(false);
        assert_eq!(extrusion.paint.fill_extrusion_vertical_gradient, Some(expected));
    }
}
