use orrery_bodies::RegistryError;
use orrery_config::ConfigError;
use thiserror::Error;

/// Startup failures of the `orrery` binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("no config directory available; pass --config")]
    NoConfigDir,
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("body catalog error: {0}")]
    Registry(#[from] RegistryError),
}
