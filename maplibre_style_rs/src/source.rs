//! Style sources.

use crate::geometry::LatLng;

/// Default tile size in pixels.
pub const DEFAULT_TILE_SIZE: u16 = 256;

/// Default minimum zoom of tiled sources.
pub const DEFAULT_SOURCE_MIN_ZOOM: f64 = 0.;

/// Default maximum zoom of tiled sources.
pub const DEFAULT_SOURCE_MAX_ZOOM: f64 = 22.;

style_enum!(
    /// Tile coordinate scheme.
    TileScheme { Xyz => "xyz", Tms => "tms" }
);

style_enum!(
    /// Elevation encoding of raster DEM tiles.
    DemEncoding { Mapbox => "mapbox", Terrarium => "terrarium" }
);

/// Any style source.
#[derive(PartialEq, Clone, Debug)]
pub enum Source {
    GeoJson(GeoJsonSource),
    Vector(TileSource),
    Raster(TileSource),
    RasterDem(RasterDemSource),
    Image(ImageSource),
}

impl Source {
    pub fn id(&self) -> &str {
        match self {
            Self::GeoJson(source) => &source.id,
            Self::Vector(source) | Self::Raster(source) => &source.id,
            Self::RasterDem(source) => &source.tiles.id,
            Self::Image(source) => &source.id,
        }
    }

    /// Style specification name of the source type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::GeoJson(_) => "geojson",
            Self::Vector(_) => "vector",
            Self::Raster(_) => "raster",
            Self::RasterDem(_) => "raster-dem",
            Self::Image(_) => "image",
        }
    }

    /// Zoom range in which the source provides data.
    pub fn zoom_range(&self) -> Option<(f64, f64)> {
        let tiles = match self {
            Self::Vector(source) | Self::Raster(source) => source,
            Self::RasterDem(source) => &source.tiles,
            Self::GeoJson(source) => {
                return Some((DEFAULT_SOURCE_MIN_ZOOM, source.options.max_zoom?));
            },
            Self::Image(_) => return None,
        };

        match &tiles.locator {
            TileLocator::Url(_) => None,
            TileLocator::Tiles(tile_set) => Some((tile_set.min_zoom, tile_set.max_zoom)),
        }
    }

    /// Resource URL of the source, if it is not defined inline.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::GeoJson(GeoJsonSource { data: GeoJsonData::Url(url), .. }) => Some(url),
            Self::GeoJson(_) => None,
            Self::Vector(source) | Self::Raster(source) => source.locator.url(),
            Self::RasterDem(source) => source.tiles.locator.url(),
            Self::Image(source) => Some(&source.url),
        }
    }

    /// Attribution HTML shown for this source.
    pub fn attribution(&self) -> Option<&str> {
        match self {
            Self::GeoJson(source) => source.options.attribution.as_deref(),
            Self::Vector(source) | Self::Raster(source) => source.locator.attribution(),
            Self::RasterDem(source) => source.tiles.locator.attribution(),
            Self::Image(_) => None,
        }
    }
}

/// GeoJSON source.
#[derive(PartialEq, Clone, Debug)]
pub struct GeoJsonSource {
    pub id: String,
    pub data: GeoJsonData,
    pub options: GeoJsonOptions,
}

/// GeoJSON source contents.
#[derive(PartialEq, Clone, Debug)]
pub enum GeoJsonData {
    /// Remote GeoJSON document.
    Url(String),
    /// Validated GeoJSON text.
    Inline(String),
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct GeoJsonOptions {
    pub max_zoom: Option<f64>,
    pub buffer: Option<u16>,
    pub tolerance: Option<f64>,
    pub line_metrics: bool,
    pub attribution: Option<String>,

    pub cluster: bool,
    pub cluster_radius: Option<u16>,
    pub cluster_max_zoom: Option<f64>,
}

/// Vector or raster tile source.
#[derive(PartialEq, Clone, Debug)]
pub struct TileSource {
    pub id: String,
    pub locator: TileLocator,
    pub tile_size: u16,
    pub options: TileOptions,
}

/// Raster DEM tile source.
#[derive(PartialEq, Clone, Debug)]
pub struct RasterDemSource {
    pub tiles: TileSource,
    pub encoding: DemEncoding,
}

/// Location of a source's tiles.
#[derive(PartialEq, Clone, Debug)]
pub enum TileLocator {
    /// TileJSON document URL.
    Url(String),
    /// Inline TileJSON.
    Tiles(TileSet),
}

impl TileLocator {
    fn url(&self) -> Option<&str> {
        match self {
            Self::Url(url) => Some(url),
            Self::Tiles(_) => None,
        }
    }

    fn attribution(&self) -> Option<&str> {
        match self {
            Self::Tiles(tile_set) => tile_set.attribution.as_deref(),
            Self::Url(_) => None,
        }
    }
}

/// Inline TileJSON description.
#[derive(PartialEq, Clone, Debug)]
pub struct TileSet {
    /// Tile URL templates, never empty.
    pub tiles: Vec<String>,
    /// Bounds as `[west, south, east, north]`.
    pub bounds: Option<[f64; 4]>,
    pub attribution: Option<String>,
    pub scheme: TileScheme,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl TileSet {
    pub fn new(tiles: Vec<String>) -> Self {
        Self {
            tiles,
            min_zoom: DEFAULT_SOURCE_MIN_ZOOM,
            max_zoom: DEFAULT_SOURCE_MAX_ZOOM,
            scheme: TileScheme::Xyz,
            attribution: None,
            bounds: None,
        }
    }
}

/// Tile loading knobs only supported by some platforms.
#[derive(PartialEq, Clone, Default, Debug)]
pub struct TileOptions {
    pub volatile: Option<bool>,
    pub prefetch_zoom_delta: Option<u8>,
    /// Minimum tile update interval in milliseconds.
    pub minimum_tile_update_interval: Option<u64>,
    pub max_overscale_factor_for_parent_tiles: Option<u8>,
}

/// Georeferenced image source.
#[derive(PartialEq, Clone, Debug)]
pub struct ImageSource {
    pub id: String,
    pub url: String,
    pub coordinates: LatLngQuad,
}

/// Image corners.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct LatLngQuad {
    pub top_left: LatLng,
    pub top_right: LatLng,
    pub bottom_right: LatLng,
    pub bottom_left: LatLng,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile_source(locator: TileLocator) -> TileSource {
        TileSource {
            locator,
            id: "tiles".into(),
            tile_size: DEFAULT_TILE_SIZE,
            options: Default::default(),
        }
    }

    #[test]
    fn tile_set_zoom_range() {
        let mut tile_set = TileSet::new(vec!["https://example.org/{z}/{x}/{y}.pbf".into()]);
        tile_set.attribution = Some("OSM".into());
        let source = Source::Vector(tile_source(TileLocator::Tiles(tile_set)));

        assert_eq!(source.zoom_range(), Some((0., 22.)));
        assert_eq!(source.attribution(), Some("OSM"));
        assert_eq!(source.url(), None);
    }

    #[test]
    fn url_locator() {
        let locator = TileLocator::Url("https://example.org/tiles.json".into());
        let source = Source::RasterDem(RasterDemSource {
            tiles: tile_source(locator),
            encoding: DemEncoding::Terrarium,
        });

        assert_eq!(source.id(), "tiles");
        assert_eq!(source.type_name(), "raster-dem");
        assert_eq!(source.zoom_range(), None);
        assert_eq!(source.url(), Some("https://example.org/tiles.json"));
    }
}
