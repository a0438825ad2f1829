//! Errors raised while persisting orrery settings.

use std::io;

/// Failure to load or store `config.ron`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read orrery config.ron: {0}")]
    Read(#[source] io::Error),

    /// The config directory or `config.ron` could not be created or written.
    #[error("cannot write orrery config.ron: {0}")]
    Write(#[source] io::Error),

    /// `config.ron` exists but does not describe a valid orrery configuration.
    #[error("invalid orrery config.ron: {0}")]
    Parse(#[source] ron::error::SpannedError),

    #[error("cannot encode orrery settings as RON: {0}")]
    Serialize(#[source] ron::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_parse_error_names_the_config_file() {
        let err = ron::from_str::<u32>("speed_mode: fast").unwrap_err();
        let err = ConfigError::Parse(err);
        assert!(err.to_string().starts_with("invalid orrery config.ron: "));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_io_errors_keep_their_cause() {
        let err = ConfigError::Read(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert_eq!(err.to_string(), "cannot read orrery config.ron: denied");
        let err = ConfigError::Write(io::Error::other("disk full"));
        assert_eq!(err.source().map(ToString::to_string), Some("disk full".to_string()));
    }
}
