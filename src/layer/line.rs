//! Line layer properties.

use maplibre_style::{LineCap, LineJoin, LineLayer, TranslateAnchor};
use serde_json::Value;

use crate::coerce::{enum_property, property};
use crate::layer::{Assignment, LayerProperties, assign};

impl LayerProperties for LineLayer {
    fn set_layout(&mut self, name: &str, value: &Value) -> Assignment {
        let layout = &mut self.layout;
        match name {
            "line-cap" => assign(&mut layout.line_cap, enum_property(name, value, LineCap::Butt)),
            "line-join" => {
                assign(&mut layout.line_join, enum_property(name, value, LineJoin::Miter))
            },
            "line-miter-limit" => assign(&mut layout.line_miter_limit, property(value)),
            "line-round-limit" => assign(&mut layout.line_round_limit, property(value)),
            "line-sort-key" => assign(&mut layout.line_sort_key, property(value)),
            _ => Assignment::Unknown,
        }
    }

    fn set_paint(&mut self, name: &str, value: &Value) -> Assignment {
        let paint = &mut self.paint;
        match name {
            "line-opacity" => assign(&mut paint.line_opacity, property(value)),
            "line-color" => assign(&mut paint.line_color, property(value)),
            "line-translate" => assign(&mut paint.line_translate, property(value)),
            "line-translate-anchor" => {
                let anchor = enum_property(name, value, TranslateAnchor::Map);
                assign(&mut paint.line_translate_anchor, anchor)
            },
            "line-width" => assign(&mut paint.line_width, property(value)),
            "line-gap-width" => assign(&mut paint.line_gap_width, property(value)),
            "line-offset" => assign(&mut paint.line_offset, property(value)),
            "line-blur" => assign(&mut paint.line_blur, property(value)),
            "line-dasharray" => assign(&mut paint.line_dasharray, property(value)),
            "line-pattern" => assign(&mut paint.line_pattern, property(value)),
            "line-gradient" => assign(&mut paint.line_gradient, property(value)),
            _ => Assignment::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use maplibre_style::{Color, Expression, PropertyValue};
    use serde_json::json;

    use super::*;

    #[test]
    fn dasharray() {
        let mut line = LineLayer::new("route", "osm");

        assert_eq!(line.set_paint("line-dasharray", &json!([2, 1.5])), Assignment::Applied);
        assert_eq!(line.paint.line_dasharray, Some(PropertyValue::Constant(vec![2., 1.5])));

        assert_eq!(line.set_paint("line-dasharray", &json!(["a"])), Assignment::Skipped);
        assert_eq!(line.paint.line_dasharray, Some(PropertyValue::Constant(vec![2., 1.5])));
    }

    #[test]
    fn gradient_expression() {
        let mut line = LineLayer::new("route", "osm");

        let gradient = r#"["interpolate",["linear"],["line-progress"],0,"blue",1,"red"]"#;
        line.set_paint("line-gradient", &json!(gradient));
        line.set_paint("line-color", &json!("#336699"));

        let expected = PropertyValue::Expression(Expression::new(gradient));
        assert_eq!(line.paint.line_gradient, Some(expected));
        assert_eq!(line.paint.line_color, Some(PropertyValue::Constant(Color::new(51, 102, 153, 255))));
    }

    #[test]
    fn join_fallback() {
        let mut line = LineLayer::new("route", "osm");

        line.set_layout("line-join", &json!("curved"));
        assert_eq!(line.layout.line_join, Some(PropertyValue::Constant(LineJoin::Miter)));

        line.set_layout("line-join", &json!("round"));
        assert_eq!(line.layout.line_join, Some(PropertyValue::Constant(LineJoin::Round)));
    }
}
