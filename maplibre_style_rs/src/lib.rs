//! Rust model of the MapLibre Native style object API.
//!
//! MapLibre Native exposes its style as a set of strongly typed objects:
//! layers with one setter per style property, sources with one constructor
//! per source kind, and geometries for GeoJSON features. This crate mirrors
//! that surface so translators can target it without depending on a
//! particular platform binding.
//!
//! All property and enum names follow the [MapLibre style specification].
//!
//! [MapLibre style specification]: https://maplibre.org/maplibre-style-spec/
//!
//! # Examples
//!
//! ```
//! use maplibre_style::{Layer, LineCap, LineLayer, PropertyValue, Style};
//!
//! let mut line = LineLayer::new("route", "route-source");
//! line.layout.line_cap = Some(PropertyValue::Constant(LineCap::Round));
//!
//! let mut style = Style::new();
//! style.add_layer(Layer::Line(line)).unwrap();
//!
//! assert_eq!(style.layer("route").map(Layer::type_name), Some("line"));
//! ```

/// Define a closed style enum backed by its style specification strings.
macro_rules! style_enum {
    ($(#[$attr:meta])* $name:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$attr])*
        #[derive(Hash, PartialEq, Eq, Copy, Clone, Debug)]
        pub enum $name {
            $($variant),+
        }

        impl $crate::value::StyleEnum for $name {
            fn from_style_str(value: &str) -> Option<Self> {
                match value {
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }

            fn as_style_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }
    };
}

pub mod geometry;
pub mod layer;
pub mod source;
pub mod style;
pub mod value;

pub use geometry::{Geometry, LatLng, Polygon};
pub use layer::*;
pub use source::*;
pub use style::Style;
pub use value::{Color, Expression, PropertyValue, StyleEnum, TimeUnit, TransitionOptions};

/// Style container error.
#[derive(thiserror::Error, PartialEq, Eq, Debug)]
pub enum Error {
    /// A layer with the same ID is already part of the style.
    #[error("Layer {0:?} already exists")]
    DuplicateLayer(String),
    /// A source with the same ID is already part of the style.
    #[error("Source {0:?} already exists")]
    DuplicateSource(String),
    /// No layer with this ID is part of the style.
    #[error("Layer {0:?} does not exist")]
    MissingLayer(String),
    /// No source with this ID is part of the style.
    #[error("Source {0:?} does not exist")]
    MissingSource(String),
    /// The source is still referenced by at least one layer.
    #[error("Source {0:?} is still in use by layer {1:?}")]
    SourceInUse(String, String),
}
