//! Configuration options.

use std::fmt::{self, Display, Formatter};
use std::sync::mpsc::Sender;

use configory::EventHandler;
use configory::docgen::{DocType, Docgen, Leaf};
use maplibre_style::TimeUnit;
use serde::de::Visitor;
use serde::{Deserialize, Deserializer};
use tracing::{error, info};

/// # libre-bridge
///
/// ## Syntax
///
/// libre-bridge's configuration file uses the TOML format. The format's
/// specification can be found at _https://toml.io/en/v1.0.0_.
///
/// ## Location
///
/// libre-bridge doesn't create the configuration file for you, but it looks
/// for one at <br>
/// `${XDG_CONFIG_HOME:-$HOME/.config}/libre-bridge/libre-bridge.toml`.
///
/// ## Fields
#[derive(Docgen, Deserialize, Default, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// This section documents the `[platform]` table.
    pub platform: Platform,
    /// This section documents the `[annotation]` table.
    pub annotation: Annotation,
    /// This section documents the `[geometry]` table.
    pub geometry: GeometryConfig,
    /// This section documents the `[source]` table.
    pub source: SourceDefaults,
}

/// Native platform configuration.
#[derive(Docgen, Deserialize, Default, Copy, Clone, PartialEq, Eq, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct Platform {
    /// Native SDK receiving the translated style objects.
    pub target: Target,
}

/// Annotation configuration.
#[derive(Docgen, Deserialize, Copy, Clone, PartialEq, Eq, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct Annotation {
    /// Generate a new ID when a random ID collides with an existing annotation.
    pub unique_ids: bool,
}

impl Default for Annotation {
    fn default() -> Self {
        Self { unique_ids: true }
    }
}

/// Geometry configuration.
#[derive(Docgen, Deserialize, Copy, Clone, PartialEq, Eq, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct GeometryConfig {
    /// Keep interior rings of polygons.
    ///
    /// When disabled, only the exterior ring of a polygon is used.
    pub polygon_holes: bool,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self { polygon_holes: true }
    }
}

/// Defaults for tiled sources.
#[derive(Docgen, Deserialize, Copy, Clone, PartialEq, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct SourceDefaults {
    /// Tile size in pixels.
    pub tile_size: u16,
    /// Minimum zoom level with available tiles.
    pub min_zoom: f64,
    /// Maximum zoom level with available tiles.
    pub max_zoom: f64,
}

impl Default for SourceDefaults {
    fn default() -> Self {
        Self { tile_size: 256, min_zoom: 0., max_zoom: 22. }
    }
}

/// Native mapping SDK platform.
#[derive(Default, Copy, Clone, Hash, PartialEq, Eq, Debug)]
pub enum Target {
    #[default]
    Android,
    Ios,
}

impl Target {
    /// Time unit of the platform's transition API.
    pub fn time_unit(&self) -> TimeUnit {
        match self {
            Self::Android => TimeUnit::Milliseconds,
            Self::Ios => TimeUnit::Seconds,
        }
    }

    /// Check if the platform supports tile loading knobs.
    pub fn supports_tile_tuning(&self) -> bool {
        match self {
            Self::Android => true,
            Self::Ios => false,
        }
    }
}

impl Docgen for Target {
    fn doc_type() -> DocType {
        DocType::Leaf(Leaf::new("\"android\" | \"ios\""))
    }

    fn format(&self) -> String {
        format!("\"{self}\"")
    }
}

/// Deserialize the target from its lowercase name.
impl<'de> Deserialize<'de> for Target {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TargetVisitor;

        impl Visitor<'_> for TargetVisitor {
            type Value = Target;

            fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.write_str("platform name like \"android\"")
            }

            fn visit_str<E>(self, value: &str) -> Result<Target, E>
            where
                E: serde::de::Error,
            {
                match value {
                    "android" => Ok(Target::Android),
                    "ios" => Ok(Target::Ios),
                    _ => Err(E::custom(format!("unknown platform {value:?}"))),
                }
            }
        }

        deserializer.deserialize_str(TargetVisitor)
    }
}

impl Display for Target {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Android => f.write_str("android"),
            Self::Ios => f.write_str("ios"),
        }
    }
}

/// Event handler for configuration manager updates.
pub struct ConfigEventHandler {
    tx: Sender<Config>,
}

impl ConfigEventHandler {
    pub fn new(tx: Sender<Config>) -> Self {
        Self { tx }
    }

    /// Reload the configuration file.
    fn reload_config(&self, config: &configory::Config) {
        info!("Reloading configuration file");

        // Parse config or fall back to the default.
        let parsed = config
            .get::<&str, Config>(&[])
            .inspect_err(|err| error!("Config error: {err}"))
            .ok()
            .flatten()
            .unwrap_or_default();

        // Update the config.
        if let Err(err) = self.tx.send(parsed) {
            error!("Failed to send on config channel: {err}");
        }
    }
}

impl EventHandler for ConfigEventHandler {
    type MessageData = ();

    fn file_changed(&self, config: &configory::Config) {
        self.reload_config(config);
    }

    fn ipc_changed(&self, config: &configory::Config) {
        self.reload_config(config);
    }

    fn file_error(&self, _config: &configory::Config, err: configory::Error) {
        error!("Configuration file error: {err}");
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.platform.target, Target::Android);
        assert!(config.annotation.unique_ids);
        assert!(config.geometry.polygon_holes);
        assert_eq!(config.source, SourceDefaults { tile_size: 256, min_zoom: 0., max_zoom: 22. });
    }

    #[test]
    fn partial_sections() {
        let value = json!({
            "platform": { "target": "ios" },
            "source": { "tile_size": 512 },
        });
        let config = Config::deserialize(&value).unwrap();

        assert_eq!(config.platform.target, Target::Ios);
        assert_eq!(config.platform.target.time_unit(), TimeUnit::Seconds);
        assert!(!config.platform.target.supports_tile_tuning());
        assert_eq!(config.source.tile_size, 512);
        assert_eq!(config.source.max_zoom, 22.);
    }

    #[test]
    fn reject_unknown() {
        assert!(Config::deserialize(&json!({ "platform": { "target": "web" } })).is_err());
        assert!(Config::deserialize(&json!({ "tiles": {} })).is_err());
    }

    #[test]
    fn target_docs() {
        assert_eq!(Target::Ios.format(), "\"ios\"");
    }
}
