//! Error types for iconlint

use thiserror::Error;

/// The main error type for iconlint operations
///
/// Analysis itself never fails; these errors come from loading resource
/// trees, configuration files and manifests.
#[derive(Debug, Error)]
pub enum IconLintError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("XML parse error in {path}: {message}")]
    XmlParseError { path: String, message: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unknown issue id: {0}")]
    UnknownIssue(String),

    #[error("Unknown density: {0}")]
    UnknownDensity(String),

    #[error("Invalid resource root: {0}")]
    InvalidResourceRoot(String),
}

/// Result type alias for iconlint operations
pub type Result<T> = std::result::Result<T, IconLintError>;

impl From<toml::de::Error> for IconLintError {
    fn from(err: toml::de::Error) -> Self {
        IconLintError::TomlParseError(err.to_string())
    }
}
