//! Symbol layer properties.

use maplibre_style::{
    Alignment, Anchor, IconTextFit, SymbolLayer, SymbolPlacement, SymbolZOrder, TextJustify,
    TextTransform, TranslateAnchor,
};
use serde_json::Value;

use crate::coerce::{enum_property, property};
use crate::layer::{Assignment, LayerProperties, assign};

impl LayerProperties for SymbolLayer {
    fn set_layout(&mut self, name: &str, value: &Value) -> Assignment {
        let layout = &mut self.layout;
        match name {
            "symbol-placement" => {
                let placement = enum_property(name, value, SymbolPlacement::Point);
                assign(&mut layout.symbol_placement, placement)
            },
            "symbol-spacing" => assign(&mut layout.symbol_spacing, property(value)),
            "symbol-avoid-edges" => assign(&mut layout.symbol_avoid_edges, property(value)),
            "symbol-sort-key" => assign(&mut layout.symbol_sort_key, property(value)),
            "symbol-z-order" => {
                let z_order = enum_property(name, value, SymbolZOrder::Auto);
                assign(&mut layout.symbol_z_order, z_order)
            },

            "icon-allow-overlap" => assign(&mut layout.icon_allow_overlap, property(value)),
            "icon-ignore-placement" => assign(&mut layout.icon_ignore_placement, property(value)),
            "icon-optional" => assign(&mut layout.icon_optional, property(value)),
            "icon-rotation-alignment" => {
                let alignment = enum_property(name, value, Alignment::Auto);
                assign(&mut layout.icon_rotation_alignment, alignment)
            },
            "icon-size" => assign(&mut layout.icon_size, property(value)),
            "icon-text-fit" => {
                let fit = enum_property(name, value, IconTextFit::None);
                assign(&mut layout.icon_text_fit, fit)
            },
            "icon-text-fit-padding" => assign(&mut layout.icon_text_fit_padding, property(value)),
            "icon-image" => assign(&mut layout.icon_image, property(value)),
            "icon-rotate" => assign(&mut layout.icon_rotate, property(value)),
            "icon-padding" => assign(&mut layout.icon_padding, property(value)),
            "icon-keep-upright" => assign(&mut layout.icon_keep_upright, property(value)),
            "icon-offset" => assign(&mut layout.icon_offset, property(value)),
            "icon-anchor" => {
                assign(&mut layout.icon_anchor, enum_property(name, value, Anchor::Center))
            },
            "icon-pitch-alignment" => {
                let alignment = enum_property(name, value, Alignment::Auto);
                assign(&mut layout.icon_pitch_alignment, alignment)
            },

            "text-pitch-alignment" => {
                let alignment = enum_property(name, value, Alignment::Auto);
                assign(&mut layout.text_pitch_alignment, alignment)
            },
            "text-rotation-alignment" => {
                let alignment = enum_property(name, value, Alignment::Auto);
                assign(&mut layout.text_rotation_alignment, alignment)
            },
            "text-field" => assign(&mut layout.text_field, property(value)),
            "text-font" => assign(&mut layout.text_font, property(value)),
            "text-size" => assign(&mut layout.text_size, property(value)),
            "text-max-width" => assign(&mut layout.text_max_width, property(value)),
            "text-line-height" => assign(&mut layout.text_line_height, property(value)),
            "text-letter-spacing" => assign(&mut layout.text_letter_spacing, property(value)),
            "text-justify" => {
                let justify = enum_property(name, value, TextJustify::Center);
                assign(&mut layout.text_justify, justify)
            },
            "text-radial-offset" => assign(&mut layout.text_radial_offset, property(value)),
            "text-variable-anchor" => assign(&mut layout.text_variable_anchor, property(value)),
            "text-anchor" => {
                assign(&mut layout.text_anchor, enum_property(name, value, Anchor::Center))
            },
            "text-max-angle" => assign(&mut layout.text_max_angle, property(value)),
            "text-writing-mode" => assign(&mut layout.text_writing_mode, property(value)),
            "text-rotate" => assign(&mut layout.text_rotate, property(value)),
            "text-padding" => assign(&mut layout.text_padding, property(value)),
            "text-keep-upright" => assign(&mut layout.text_keep_upright, property(value)),
            "text-transform" => {
                let transform = enum_property(name, value, TextTransform::None);
                assign(&mut layout.text_transform, transform)
            },
            "text-offset" => assign(&mut layout.text_offset, property(value)),
            "text-allow-overlap" => assign(&mut layout.text_allow_overlap, property(value)),
            "text-ignore-placement" => assign(&mut layout.text_ignore_placement, property(value)),
            "text-optional" => assign(&mut layout.text_optional, property(value)),
            _ => Assignment::Unknown,
        }
    }

    fn set_paint(&mut self, name: &str, value: &Value) -> Assignment {
        let paint = &mut self.paint;
        match name {
            "icon-opacity" => assign(&mut paint.icon_opacity, property(value)),
            "icon-color" => assign(&mut paint.icon_color, property(value)),
            "icon-halo-color" => assign(&mut paint.icon_halo_color, property(value)),
            "icon-halo-width" => assign(&mut paint.icon_halo_width, property(value)),
            "icon-halo-blur" => assign(&mut paint.icon_halo_blur, property(value)),
            "icon-translate" => assign(&mut paint.icon_translate, property(value)),
            "icon-translate-anchor" => {
                let anchor = enum_property(name, value, TranslateAnchor::Map);
                assign(&mut paint.icon_translate_anchor, anchor)
            },

            "text-opacity" => assign(&mut paint.text_opacity, property(value)),
            "text-color" => assign(&mut paint.text_color, property(value)),
            "text-halo-color" => assign(&mut paint.text_halo_color, property(value)),
            "text-halo-width" => assign(&mut paint.text_halo_width, property(value)),
            "text-halo-blur" => assign(&mut paint.text_halo_blur, property(value)),
            "text-translate" => assign(&mut paint.text_translate, property(value)),
            "text-translate-anchor" => {
                let anchor = enum_property(name, value, TranslateAnchor::Map);
                assign(&mut paint.text_translate_anchor, anchor)
            },
            _ => Assignment::Unknown,
        }
    }
}
