//! Raster layer properties.

use maplibre_style::{RasterLayer, RasterResampling};
use serde_json::Value;

use crate::coerce::{enum_property, property};
use crate::layer::{Assignment, LayerProperties, assign};

impl LayerProperties for RasterLayer {
    fn set_paint(&mut self, name: &str, value: &Value) -> Assignment {
        let paint = &mut self.paint;
        match name {
            "raster-opacity" => assign(&mut paint.raster_opacity, property(value)),
            "raster-hue-rotate" => assign(&mut paint.raster_hue_rotate, property(value)),
            "raster-brightness-min" => assign(&mut paint.raster_brightness_min, property(value)),
            "raster-brightness-max" => assign(&mut paint.raster_brightness_max, property(value)),
            "raster-saturation" => assign(&mut paint.raster_saturation, property(value)),
            "raster-contrast" => assign(&mut paint.raster_contrast, property(value)),
            "raster-resampling" => {
                let resampling = enum_property(name, value, RasterResampling::Linear);
                assign(&mut paint.raster_resampling, resampling)
            },
            "raster-fade-duration" => assign(&mut paint.raster_fade_duration, property(value)),
            _ => Assignment::Unknown,
        }
    }
}
