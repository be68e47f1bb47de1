//! Typed style layers.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use indexmap::IndexMap;
use serde_json::Value;

use crate::value::{Color, Expression, PropertyValue, TransitionOptions};

/// Default minimum zoom of a newly created layer.
pub const DEFAULT_MIN_ZOOM: f64 = 0.;

/// Default maximum zoom of a newly created layer.
pub const DEFAULT_MAX_ZOOM: f64 = 24.;

style_enum!(
    /// Whether a layer is rendered.
    Visibility { Visible => "visible", None => "none" }
);

style_enum!(
    /// Display of line endings.
    LineCap { Butt => "butt", Round => "round", Square => "square" }
);

style_enum!(
    /// Display of joined lines.
    LineJoin { Bevel => "bevel", Round => "round", Miter => "miter" }
);

style_enum!(
    /// Frame of reference for translations.
    TranslateAnchor { Map => "map", Viewport => "viewport" }
);

style_enum!(
    /// Orientation of icons, text and circles relative to the map.
    Alignment { Map => "map", Viewport => "viewport", Auto => "auto" }
);

style_enum!(
    /// Scaling of circles when the map is pitched.
    PitchScale { Map => "map", Viewport => "viewport" }
);

style_enum!(
    /// Frame of reference for hillshade light direction.
    IlluminationAnchor { Map => "map", Viewport => "viewport" }
);

style_enum!(
    /// Placement of symbols relative to their geometry.
    SymbolPlacement { Point => "point", Line => "line", LineCenter => "line-center" }
);

style_enum!(
    /// Ordering of overlapping symbols.
    SymbolZOrder { Auto => "auto", ViewportY => "viewport-y", Source => "source" }
);

style_enum!(
    /// Scaling of icons to fit their text.
    IconTextFit { None => "none", Width => "width", Height => "height", Both => "both" }
);

style_enum!(
    /// Part of an icon or text placed closest to the anchor.
    Anchor {
        Center => "center",
        Left => "left",
        Right => "right",
        Top => "top",
        Bottom => "bottom",
        TopLeft => "top-left",
        TopRight => "top-right",
        BottomLeft => "bottom-left",
        BottomRight => "bottom-right",
    }
);

style_enum!(
    /// Text justification.
    TextJustify { Auto => "auto", Left => "left", Center => "center", Right => "right" }
);

style_enum!(
    /// Text capitalization.
    TextTransform { None => "none", Uppercase => "uppercase", Lowercase => "lowercase" }
);

style_enum!(
    /// Writing direction for text placement.
    TextWritingMode { Horizontal => "horizontal", Vertical => "vertical" }
);

style_enum!(
    /// Raster tile resampling.
    RasterResampling { Linear => "linear", Nearest => "nearest" }
);

/// Style layer types.
#[derive(Hash, PartialEq, Eq, Copy, Clone, Debug)]
pub enum LayerKind {
    Symbol,
    Fill,
    Line,
    Circle,
    Raster,
    FillExtrusion,
    Heatmap,
    Hillshade,
    Background,
}

impl LayerKind {
    /// All layer kinds.
    pub const ALL: [LayerKind; 9] = [
        Self::Symbol,
        Self::Fill,
        Self::Line,
        Self::Circle,
        Self::Raster,
        Self::FillExtrusion,
        Self::Heatmap,
        Self::Hillshade,
        Self::Background,
    ];

    /// Style specification name of the layer type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Symbol => "symbol",
            Self::Fill => "fill",
            Self::Line => "line",
            Self::Circle => "circle",
            Self::Raster => "raster",
            Self::FillExtrusion => "fill-extrusion",
            Self::Heatmap => "heatmap",
            Self::Hillshade => "hillshade",
            Self::Background => "background",
        }
    }

    /// Check if this layer renders individual source features.
    ///
    /// Only feature layers support filters and source layers.
    pub fn is_feature_layer(&self) -> bool {
        !matches!(self, Self::Raster | Self::Hillshade | Self::Background)
    }

    /// Paint properties which support transitions.
    pub fn transitionable(&self) -> &'static [&'static str] {
        match self {
            Self::Symbol => SymbolLayer::TRANSITIONABLE,
            Self::Fill => FillLayer::TRANSITIONABLE,
            Self::Line => LineLayer::TRANSITIONABLE,
            Self::Circle => CircleLayer::TRANSITIONABLE,
            Self::Raster => RasterLayer::TRANSITIONABLE,
            Self::FillExtrusion => FillExtrusionLayer::TRANSITIONABLE,
            Self::Heatmap => HeatmapLayer::TRANSITIONABLE,
            Self::Hillshade => HillshadeLayer::TRANSITIONABLE,
            Self::Background => BackgroundLayer::TRANSITIONABLE,
        }
    }
}

impl FromStr for LayerKind {
    type Err = ();

    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        match kind {
            "symbol" => Ok(Self::Symbol),
            "fill" => Ok(Self::Fill),
            "line" => Ok(Self::Line),
            "circle" => Ok(Self::Circle),
            "raster" => Ok(Self::Raster),
            "fill-extrusion" => Ok(Self::FillExtrusion),
            "heatmap" => Ok(Self::Heatmap),
            "hillshade" => Ok(Self::Hillshade),
            "background" => Ok(Self::Background),
            _ => Err(()),
        }
    }
}

impl Display for LayerKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Properties shared by all layer types.
#[derive(PartialEq, Clone, Debug)]
pub struct LayerMeta {
    pub id: String,
    /// Source feeding this layer, `None` for background layers.
    pub source_id: Option<String>,
    /// Layer inside a vector tile source.
    pub source_layer: Option<String>,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub filter: Option<Expression>,
    pub visibility: Option<PropertyValue<Visibility>>,

    /// Transitions by paint property name.
    pub transitions: IndexMap<String, TransitionOptions>,

    /// Layout properties without a typed setter.
    pub extra_layout: IndexMap<String, PropertyValue<Value>>,
    /// Paint properties without a typed setter.
    pub extra_paint: IndexMap<String, PropertyValue<Value>>,
}

impl LayerMeta {
    pub fn new(id: impl Into<String>, source_id: Option<String>) -> Self {
        Self {
            source_id,
            id: id.into(),
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            source_layer: Default::default(),
            visibility: Default::default(),
            filter: Default::default(),
            transitions: Default::default(),
            extra_layout: Default::default(),
            extra_paint: Default::default(),
        }
    }
}

/// Any style layer.
#[derive(PartialEq, Clone, Debug)]
pub enum Layer {
    Symbol(SymbolLayer),
    Fill(FillLayer),
    Line(LineLayer),
    Circle(CircleLayer),
    Raster(RasterLayer),
    FillExtrusion(FillExtrusionLayer),
    Heatmap(HeatmapLayer),
    Hillshade(HillshadeLayer),
    Background(BackgroundLayer),
    /// Layer type without a typed representation, like custom layers.
    Unknown(LayerMeta),
}

impl Layer {
    /// Create an empty layer of the requested type.
    ///
    /// The source ID is ignored for background layers.
    pub fn new(kind: LayerKind, id: impl Into<String>, source_id: Option<String>) -> Self {
        let source_id = if kind == LayerKind::Background { None } else { source_id };
        let meta = LayerMeta::new(id, source_id);
        match kind {
            LayerKind::Symbol => Self::Symbol(SymbolLayer::with_meta(meta)),
            LayerKind::Fill => Self::Fill(FillLayer::with_meta(meta)),
            LayerKind::Line => Self::Line(LineLayer::with_meta(meta)),
            LayerKind::Circle => Self::Circle(CircleLayer::with_meta(meta)),
            LayerKind::Raster => Self::Raster(RasterLayer::with_meta(meta)),
            LayerKind::FillExtrusion => Self::FillExtrusion(FillExtrusionLayer::with_meta(meta)),
            LayerKind::Heatmap => Self::Heatmap(HeatmapLayer::with_meta(meta)),
            LayerKind::Hillshade => Self::Hillshade(HillshadeLayer::with_meta(meta)),
            LayerKind::Background => Self::Background(BackgroundLayer::with_meta(meta)),
        }
    }

    /// Get the layer's type, `None` for unknown layers.
    pub fn kind(&self) -> Option<LayerKind> {
        match self {
            Self::Symbol(_) => Some(LayerKind::Symbol),
            Self::Fill(_) => Some(LayerKind::Fill),
            Self::Line(_) => Some(LayerKind::Line),
            Self::Circle(_) => Some(LayerKind::Circle),
            Self::Raster(_) => Some(LayerKind::Raster),
            Self::FillExtrusion(_) => Some(LayerKind::FillExtrusion),
            Self::Heatmap(_) => Some(LayerKind::Heatmap),
            Self::Hillshade(_) => Some(LayerKind::Hillshade),
            Self::Background(_) => Some(LayerKind::Background),
            Self::Unknown(_) => None,
        }
    }

    /// Style specification name of the layer type.
    pub fn type_name(&self) -> &'static str {
        self.kind().map_or("unknown", |kind| kind.as_str())
    }

    pub fn meta(&self) -> &LayerMeta {
        match self {
            Self::Symbol(layer) => &layer.meta,
            Self::Fill(layer) => &layer.meta,
            Self::Line(layer) => &layer.meta,
            Self::Circle(layer) => &layer.meta,
            Self::Raster(layer) => &layer.meta,
            Self::FillExtrusion(layer) => &layer.meta,
            Self::Heatmap(layer) => &layer.meta,
            Self::Hillshade(layer) => &layer.meta,
            Self::Background(layer) => &layer.meta,
            Self::Unknown(meta) => meta,
        }
    }

    pub fn meta_mut(&mut self) -> &mut LayerMeta {
        match self {
            Self::Symbol(layer) => &mut layer.meta,
            Self::Fill(layer) => &mut layer.meta,
            Self::Line(layer) => &mut layer.meta,
            Self::Circle(layer) => &mut layer.meta,
            Self::Raster(layer) => &mut layer.meta,
            Self::FillExtrusion(layer) => &mut layer.meta,
            Self::Heatmap(layer) => &mut layer.meta,
            Self::Hillshade(layer) => &mut layer.meta,
            Self::Background(layer) => &mut layer.meta,
            Self::Unknown(meta) => meta,
        }
    }

    pub fn id(&self) -> &str {
        &self.meta().id
    }

    /// Attach a transition to a paint property.
    ///
    /// Returns `false` without modifying the layer if the property does not
    /// support transitions.
    pub fn set_transition(&mut self, property: &str, transition: TransitionOptions) -> bool {
        let supported = self.kind().is_some_and(|kind| kind.transitionable().contains(&property));
        if supported {
            self.meta_mut().transitions.insert(property.into(), transition);
        }
        supported
    }
}

/// Symbol layer.
#[derive(PartialEq, Clone, Debug)]
pub struct SymbolLayer {
    pub meta: LayerMeta,
    pub layout: SymbolLayout,
    pub paint: SymbolPaint,
}

impl SymbolLayer {
    pub const TRANSITIONABLE: &'static [&'static str] = &[
        "icon-opacity",
        "icon-color",
        "icon-halo-color",
        "icon-halo-width",
        "icon-halo-blur",
        "icon-translate",
        "text-opacity",
        "text-color",
        "text-halo-color",
        "text-halo-width",
        "text-halo-blur",
        "text-translate",
    ];

    pub fn new(id: impl Into<String>, source_id: impl Into<String>) -> Self {
        Self::with_meta(LayerMeta::new(id, Some(source_id.into())))
    }

    fn with_meta(meta: LayerMeta) -> Self {
        Self { meta, layout: Default::default(), paint: Default::default() }
    }
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct SymbolLayout {
    pub symbol_placement: Option<PropertyValue<SymbolPlacement>>,
    pub symbol_spacing: Option<PropertyValue<f64>>,
    pub symbol_avoid_edges: Option<PropertyValue<bool>>,
    pub symbol_sort_key: Option<PropertyValue<f64>>,
    pub symbol_z_order: Option<PropertyValue<SymbolZOrder>>,

    pub icon_allow_overlap: Option<PropertyValue<bool>>,
    pub icon_ignore_placement: Option<PropertyValue<bool>>,
    pub icon_optional: Option<PropertyValue<bool>>,
    pub icon_rotation_alignment: Option<PropertyValue<Alignment>>,
    pub icon_size: Option<PropertyValue<f64>>,
    pub icon_text_fit: Option<PropertyValue<IconTextFit>>,
    /// Padding in `[top, right, bottom, left]` order.
    pub icon_text_fit_padding: Option<PropertyValue<[f64; 4]>>,
    pub icon_image: Option<PropertyValue<String>>,
    pub icon_rotate: Option<PropertyValue<f64>>,
    pub icon_padding: Option<PropertyValue<f64>>,
    pub icon_keep_upright: Option<PropertyValue<bool>>,
    pub icon_offset: Option<PropertyValue<[f64; 2]>>,
    pub icon_anchor: Option<PropertyValue<Anchor>>,
    pub icon_pitch_alignment: Option<PropertyValue<Alignment>>,

    pub text_pitch_alignment: Option<PropertyValue<Alignment>>,
    pub text_rotation_alignment: Option<PropertyValue<Alignment>>,
    pub text_field: Option<PropertyValue<String>>,
    pub text_font: Option<PropertyValue<Vec<String>>>,
    pub text_size: Option<PropertyValue<f64>>,
    pub text_max_width: Option<PropertyValue<f64>>,
    pub text_line_height: Option<PropertyValue<f64>>,
    pub text_letter_spacing: Option<PropertyValue<f64>>,
    pub text_justify: Option<PropertyValue<TextJustify>>,
    pub text_radial_offset: Option<PropertyValue<f64>>,
    pub text_variable_anchor: Option<PropertyValue<Vec<Anchor>>>,
    pub text_anchor: Option<PropertyValue<Anchor>>,
    pub text_max_angle: Option<PropertyValue<f64>>,
    pub text_writing_mode: Option<PropertyValue<Vec<TextWritingMode>>>,
    pub text_rotate: Option<PropertyValue<f64>>,
    pub text_padding: Option<PropertyValue<f64>>,
    pub text_keep_upright: Option<PropertyValue<bool>>,
    pub text_transform: Option<PropertyValue<TextTransform>>,
    pub text_offset: Option<PropertyValue<[f64; 2]>>,
    pub text_allow_overlap: Option<PropertyValue<bool>>,
    pub text_ignore_placement: Option<PropertyValue<bool>>,
    pub text_optional: Option<PropertyValue<bool>>,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct SymbolPaint {
    pub icon_opacity: Option<PropertyValue<f64>>,
    pub icon_color: Option<PropertyValue<Color>>,
    pub icon_halo_color: Option<PropertyValue<Color>>,
    pub icon_halo_width: Option<PropertyValue<f64>>,
    pub icon_halo_blur: Option<PropertyValue<f64>>,
    pub icon_translate: Option<PropertyValue<[f64; 2]>>,
    pub icon_translate_anchor: Option<PropertyValue<TranslateAnchor>>,

    pub text_opacity: Option<PropertyValue<f64>>,
    pub text_color: Option<PropertyValue<Color>>,
    pub text_halo_color: Option<PropertyValue<Color>>,
    pub text_halo_width: Option<PropertyValue<f64>>,
    pub text_halo_blur: Option<PropertyValue<f64>>,
    pub text_translate: Option<PropertyValue<[f64; 2]>>,
    pub text_translate_anchor: Option<PropertyValue<TranslateAnchor>>,
}

/// Fill layer.
#[derive(PartialEq, Clone, Debug)]
pub struct FillLayer {
    pub meta: LayerMeta,
    pub layout: FillLayout,
    pub paint: FillPaint,
}

impl FillLayer {
    pub const TRANSITIONABLE: &'static [&'static str] =
        &["fill-opacity", "fill-color", "fill-outline-color", "fill-translate", "fill-pattern"];

    pub fn new(id: impl Into<String>, source_id: impl Into<String>) -> Self {
        Self::with_meta(LayerMeta::new(id, Some(source_id.into())))
    }

    fn with_meta(meta: LayerMeta) -> Self {
        Self { meta, layout: Default::default(), paint: Default::default() }
    }
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct FillLayout {
    pub fill_sort_key: Option<PropertyValue<f64>>,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct FillPaint {
    pub fill_antialias: Option<PropertyValue<bool>>,
    pub fill_opacity: Option<PropertyValue<f64>>,
    pub fill_color: Option<PropertyValue<Color>>,
    pub fill_outline_color: Option<PropertyValue<Color>>,
    pub fill_translate: Option<PropertyValue<[f64; 2]>>,
    pub fill_translate_anchor: Option<PropertyValue<TranslateAnchor>>,
    pub fill_pattern: Option<PropertyValue<String>>,
}

/// Line layer.
#[derive(PartialEq, Clone, Debug)]
pub struct LineLayer {
    pub meta: LayerMeta,
    pub layout: LineLayout,
    pub paint: LinePaint,
}

impl LineLayer {
    pub const TRANSITIONABLE: &'static [&'static str] = &[
        "line-opacity",
        "line-color",
        "line-translate",
        "line-width",
        "line-gap-width",
        "line-offset",
        "line-blur",
        "line-dasharray",
        "line-pattern",
    ];

    pub fn new(id: impl Into<String>, source_id: impl Into<String>) -> Self {
        Self::with_meta(LayerMeta::new(id, Some(source_id.into())))
    }

    fn with_meta(meta: LayerMeta) -> Self {
        Self { meta, layout: Default::default(), paint: Default::default() }
    }
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct LineLayout {
    pub line_cap: Option<PropertyValue<LineCap>>,
    pub line_join: Option<PropertyValue<LineJoin>>,
    pub line_miter_limit: Option<PropertyValue<f64>>,
    pub line_round_limit: Option<PropertyValue<f64>>,
    pub line_sort_key: Option<PropertyValue<f64>>,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct LinePaint {
    pub line_opacity: Option<PropertyValue<f64>>,
    pub line_color: Option<PropertyValue<Color>>,
    pub line_translate: Option<PropertyValue<[f64; 2]>>,
    pub line_translate_anchor: Option<PropertyValue<TranslateAnchor>>,
    pub line_width: Option<PropertyValue<f64>>,
    pub line_gap_width: Option<PropertyValue<f64>>,
    pub line_offset: Option<PropertyValue<f64>>,
    pub line_blur: Option<PropertyValue<f64>>,
    pub line_dasharray: Option<PropertyValue<Vec<f64>>>,
    pub line_pattern: Option<PropertyValue<String>>,
    /// Only meaningful as a `line-progress` expression.
    pub line_gradient: Option<PropertyValue<Color>>,
}

/// Circle layer.
#[derive(PartialEq, Clone, Debug)]
pub struct CircleLayer {
    pub meta: LayerMeta,
    pub layout: CircleLayout,
    pub paint: CirclePaint,
}

impl CircleLayer {
    pub const TRANSITIONABLE: &'static [&'static str] = &[
        "circle-radius",
        "circle-color",
        "circle-blur",
        "circle-opacity",
        "circle-translate",
        "circle-stroke-width",
        "circle-stroke-color",
        "circle-stroke-opacity",
    ];

    pub fn new(id: impl Into<String>, source_id: impl Into<String>) -> Self {
        Self::with_meta(LayerMeta::new(id, Some(source_id.into())))
    }

    fn with_meta(meta: LayerMeta) -> Self {
        Self { meta, layout: Default::default(), paint: Default::default() }
    }
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct CircleLayout {
    pub circle_sort_key: Option<PropertyValue<f64>>,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct CirclePaint {
    pub circle_radius: Option<PropertyValue<f64>>,
    pub circle_color: Option<PropertyValue<Color>>,
    pub circle_blur: Option<PropertyValue<f64>>,
    pub circle_opacity: Option<PropertyValue<f64>>,
    pub circle_translate: Option<PropertyValue<[f64; 2]>>,
    pub circle_translate_anchor: Option<PropertyValue<TranslateAnchor>>,
    pub circle_pitch_scale: Option<PropertyValue<PitchScale>>,
    pub circle_pitch_alignment: Option<PropertyValue<Alignment>>,
    pub circle_stroke_width: Option<PropertyValue<f64>>,
    pub circle_stroke_color: Option<PropertyValue<Color>>,
    pub circle_stroke_opacity: Option<PropertyValue<f64>>,
}

/// Raster layer.
#[derive(PartialEq, Clone, Debug)]
pub struct RasterLayer {
    pub meta: LayerMeta,
    pub paint: RasterPaint,
}

impl RasterLayer {
    pub const TRANSITIONABLE: &'static [&'static str] = &[
        "raster-opacity",
        "raster-hue-rotate",
        "raster-brightness-min",
        "raster-brightness-max",
        "raster-saturation",
        "raster-contrast",
    ];

    pub fn new(id: impl Into<String>, source_id: impl Into<String>) -> Self {
        Self::with_meta(LayerMeta::new(id, Some(source_id.into())))
    }

    fn with_meta(meta: LayerMeta) -> Self {
        Self { meta, paint: Default::default() }
    }
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct RasterPaint {
    pub raster_opacity: Option<PropertyValue<f64>>,
    pub raster_hue_rotate: Option<PropertyValue<f64>>,
    pub raster_brightness_min: Option<PropertyValue<f64>>,
    pub raster_brightness_max: Option<PropertyValue<f64>>,
    pub raster_saturation: Option<PropertyValue<f64>>,
    pub raster_contrast: Option<PropertyValue<f64>>,
    pub raster_resampling: Option<PropertyValue<RasterResampling>>,
    pub raster_fade_duration: Option<PropertyValue<f64>>,
}

/// Fill extrusion layer.
#[derive(PartialEq, Clone, Debug)]
pub struct FillExtrusionLayer {
    pub meta: LayerMeta,
    pub paint: FillExtrusionPaint,
}

impl FillExtrusionLayer {
    pub const TRANSITIONABLE: &'static [&'static str] = &[
        "fill-extrusion-opacity",
        "fill-extrusion-color",
        "fill-extrusion-translate",
        "fill-extrusion-pattern",
        "fill-extrusion-height",
        "fill-extrusion-base",
    ];

    pub fn new(id: impl Into<String>, source_id: impl Into<String>) -> Self {
        Self::with_meta(LayerMeta::new(id, Some(source_id.into())))
    }

    fn with_meta(meta: LayerMeta) -> Self {
        Self { meta, paint: Default::default() }
    }
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct FillExtrusionPaint {
    pub fill_extrusion_opacity: Option<PropertyValue<f64>>,
    pub fill_extrusion_color: Option<PropertyValue<Color>>,
    pub fill_extrusion_translate: Option<PropertyValue<[f64; 2]>>,
    pub fill_extrusion_translate_anchor: Option<PropertyValue<TranslateAnchor>>,
    pub fill_extrusion_pattern: Option<PropertyValue<String>>,
    pub fill_extrusion_height: Option<PropertyValue<f64>>,
    pub fill_extrusion_base: Option<PropertyValue<f64>>,
    pub fill_extrusion_vertical_gradient: Option<PropertyValue<bool>>,
}

/// Heatmap layer.
#[derive(PartialEq, Clone, Debug)]
pub struct HeatmapLayer {
    pub meta: LayerMeta,
    pub paint: HeatmapPaint,
}

impl HeatmapLayer {
    pub const TRANSITIONABLE: &'static [&'static str] =
        &["heatmap-radius", "heatmap-intensity", "heatmap-opacity"];

    pub fn new(id: impl Into<String>, source_id: impl Into<String>) -> Self {
        Self::with_meta(LayerMeta::new(id, Some(source_id.into())))
    }

    fn with_meta(meta: LayerMeta) -> Self {
        Self { meta, paint: Default::default() }
    }
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct HeatmapPaint {
    pub heatmap_radius: Option<PropertyValue<f64>>,
    pub heatmap_weight: Option<PropertyValue<f64>>,
    pub heatmap_intensity: Option<PropertyValue<f64>>,
    /// Only meaningful as a `heatmap-density` expression.
    pub heatmap_color: Option<PropertyValue<Color>>,
    pub heatmap_opacity: Option<PropertyValue<f64>>,
}

/// Hillshade layer.
#[derive(PartialEq, Clone, Debug)]
pub struct HillshadeLayer {
    pub meta: LayerMeta,
    pub paint: HillshadePaint,
}

impl HillshadeLayer {
    pub const TRANSITIONABLE: &'static [&'static str] = &[
        "hillshade-exaggeration",
        "hillshade-shadow-color",
        "hillshade-highlight-color",
        "hillshade-accent-color",
    ];

    pub fn new(id: impl Into<String>, source_id: impl Into<String>) -> Self {
        Self::with_meta(LayerMeta::new(id, Some(source_id.into())))
    }

    fn with_meta(meta: LayerMeta) -> Self {
        Self { meta, paint: Default::default() }
    }
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct HillshadePaint {
    pub hillshade_illumination_direction: Option<PropertyValue<f64>>,
    pub hillshade_illumination_anchor: Option<PropertyValue<IlluminationAnchor>>,
    pub hillshade_exaggeration: Option<PropertyValue<f64>>,
    pub hillshade_shadow_color: Option<PropertyValue<Color>>,
    pub hillshade_highlight_color: Option<PropertyValue<Color>>,
    pub hillshade_accent_color: Option<PropertyValue<Color>>,
}

/// Background layer.
#[derive(PartialEq, Clone, Debug)]
pub struct BackgroundLayer {
    pub meta: LayerMeta,
    pub paint: BackgroundPaint,
}

impl BackgroundLayer {
    pub const TRANSITIONABLE: &'static [&'static str] =
        &["background-color", "background-pattern", "background-opacity"];

    pub fn new(id: impl Into<String>) -> Self {
        Self::with_meta(LayerMeta::new(id, None))
    }

    fn with_meta(meta: LayerMeta) -> Self {
        Self { meta, paint: Default::default() }
    }
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct BackgroundPaint {
    pub background_color: Option<PropertyValue<Color>>,
    pub background_pattern: Option<PropertyValue<String>>,
    pub background_opacity: Option<PropertyValue<f64>>,
}

macro_rules! impl_from_layer {
    ($($variant:ident($layer:ty)),+) => {
        $(
            impl From<$layer> for Layer {
                fn from(layer: $layer) -> Self {
                    Self::$variant(layer)
                }
            }
        )+
    };
}

impl_from_layer!(
    Symbol(SymbolLayer),
    Fill(FillLayer),
    Line(LineLayer),
    Circle(CircleLayer),
    Raster(RasterLayer),
    FillExtrusion(FillExtrusionLayer),
    Heatmap(HeatmapLayer),
    Hillshade(HillshadeLayer),
    Background(BackgroundLayer)
);
