//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::settings::OrrerySettings;

/// File name of the persisted configuration inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

/// Top-level orrery configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Camera choreography and interactive control settings.
    pub camera: CameraConfig,
    /// Simulation speed, view preset, and frame pacing.
    pub simulation: SimulationConfig,
    /// Body catalog source.
    pub catalog: CatalogConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Camera configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Duration of a camera transition in seconds.
    pub transition_seconds: f32,
    /// Radians of rotation per pixel of drag.
    pub rotate_speed: f32,
    /// Zoom factor per scroll line.
    pub zoom_speed: f32,
    /// World units of pan per pixel of drag.
    pub pan_speed: f32,
    /// Closest the interactive control may zoom to its target.
    pub min_distance: f32,
    /// Farthest the interactive control may zoom from its target.
    pub max_distance: f32,
    /// Vertical field of view in degrees, passed to the renderer.
    pub fov_degrees: f32,
}

/// Simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Speed and view presets applied at startup.
    pub settings: OrrerySettings,
    /// Frames per second the headless driver simulates.
    pub target_fps: u32,
    /// Number of frames the headless driver runs per scripted step.
    pub frames_per_step: u32,
}

/// Body catalog configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// RON catalog to load instead of the built-in solar system.
    pub path: Option<PathBuf>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Write JSON logs to `log_dir` in debug builds.
    pub file_logging: bool,
    /// Directory for JSON log files.
    pub log_dir: Option<PathBuf>,
}

// --- Default implementations ---

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            transition_seconds: 1.5,
            rotate_speed: 0.005,
            zoom_speed: 0.7,
            pan_speed: 0.05,
            min_distance: 3.0,
            max_distance: 100.0,
            fov_degrees: 50.0,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            settings: OrrerySettings::default(),
            target_fps: 60,
            frames_per_step: 120,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            file_logging: false,
            log_dir: None,
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Platform config directory for the orrery (e.g. `~/.config/orrery`).
    pub fn default_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("orrery"))
    }

    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::Read)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::Parse)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::Write)?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::Write)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::Read)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::Parse)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
