//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading the issue structure or validating
/// run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("Failed to parse YAML in '{path}': {source}")]
    YamlError {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse TOML in '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Missing required file.
    #[error("Missing required file: {path}")]
    MissingFile { path: String },

    /// Repository identifier is not in `owner/name` form.
    #[error("Invalid repository '{value}': expected 'owner/name'")]
    InvalidRepository { value: String },

    /// API base URL could not be parsed.
    #[error("Invalid API URL '{value}': {source}")]
    InvalidApiUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
}
