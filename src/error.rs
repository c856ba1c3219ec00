use std::path::PathBuf;

/// A marker given as text that is neither X nor O.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid marker '{0}' (expected X or O)")]
pub struct ParseMarkerError(pub String);

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
