//! Configuration management for clubmap.
//!
//! Configuration is loaded with figment from defaults, an optional TOML file,
//! and environment variables. With no file and no environment the tool reads
//! `data/raw/gaa_clubs.csv` and writes `outputs/maps/gaa_clubs_map.html`.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name, looked up in the working directory.
const CONFIG_FILE_NAME: &str = "clubmap.toml";

/// Environment variable prefix; nested keys are separated by `__`.
const ENV_PREFIX: &str = "CLUBMAP_";

const DEFAULT_INPUT: &str = "data/raw/gaa_clubs.csv";
const DEFAULT_OUTPUT: &str = "outputs/maps/gaa_clubs_map.html";

const OSM_TILES: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Highest zoom level the default tile server provides.
pub const MAX_ZOOM: u8 = 19;

/// Application configuration.
///
/// Loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `CLUBMAP_`)
/// 2. TOML config file (`clubmap.toml` or `--config`)
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input and output locations.
    pub paths: PathsConfig,
    /// Map rendering settings.
    pub map: MapSettings,
}

/// Input and output file locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Club CSV to read.
    pub input: PathBuf,
    /// HTML file to write.
    pub output: PathBuf,
}

/// Map rendering settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    /// Initial zoom level.
    pub zoom_start: u8,
    /// Tile URL template with `{z}`, `{x}`, `{y}` placeholders.
    pub tiles: String,
    /// Attribution shown for the tile layer (HTML).
    pub attribution: String,
    /// Maximum popup width in pixels.
    pub popup_max_width: u32,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            zoom_start: 7,
            tiles: OSM_TILES.to_string(),
            attribution: OSM_ATTRIBUTION.to_string(),
            popup_max_width: 320,
        }
    }
}

impl Config {
    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing, or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.map.zoom_start > MAX_ZOOM {
            return Err(Error::ConfigValidation {
                message: format!(
                    "zoom_start ({}) cannot be greater than {MAX_ZOOM}",
                    self.map.zoom_start
                ),
            });
        }

        if self.map.popup_max_width == 0 {
            return Err(Error::ConfigValidation {
                message: "popup_max_width must be greater than 0".to_string(),
            });
        }

        if self.map.tiles.trim().is_empty() {
            return Err(Error::ConfigValidation {
                message: "tiles must not be empty".to_string(),
            });
        }

        if self.paths.input.as_os_str().is_empty() || self.paths.output.as_os_str().is_empty() {
            return Err(Error::ConfigValidation {
                message: "input and output paths must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Serialize the effective configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
