//! Configuration system for the orrery.
//!
//! Runtime settings persist to disk as RON and accept CLI overrides via clap.
//! The speed and view presets live here as the single settings type shared
//! by the motion driver, the camera, and the session.

mod cli;
mod config;
mod error;
mod settings;

pub use cli::CliArgs;
pub use config::{
    CONFIG_FILE_NAME, CameraConfig, CatalogConfig, Config, DebugConfig, SimulationConfig,
};
pub use error::ConfigError;
pub use settings::{OrrerySettings, SpeedMode, ViewMode};
