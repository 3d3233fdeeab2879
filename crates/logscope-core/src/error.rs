//! Error types for LogScope

use std::path::PathBuf;

/// LogScope error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Server not found: {0}")]
    ServerNotFound(String),

    #[error("Duplicate server: {0}")]
    DuplicateServer(String),

    #[error("Invalid server name: {0}")]
    InvalidServerName(String),

    #[error("Invalid server type: {0}")]
    InvalidServerClass(String),

    #[error("Invalid resolution policy: {0}")]
    InvalidPolicy(String),

    #[error("No log file for {server} on {date}")]
    LogNotFound { server: String, date: String },

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Result type alias for LogScope
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::ConfigError(msg.into())
    }

    pub fn log_not_found(server: impl Into<String>, date: impl Into<String>) -> Self {
        Error::LogNotFound {
            server: server.into(),
            date: date.into(),
        }
    }

    /// True for the "nothing on disk" outcomes that callers may render as a
    /// placeholder instead of a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::LogNotFound { .. })
    }
}
