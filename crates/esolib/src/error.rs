//! Error types for esolib.

use thiserror::Error;

/// Errors that can occur while resolving and loading addons.
///
/// None of these cross the Lua boundary: the registered functions turn them
/// into a `false` return value and a log line.
#[derive(Error, Debug)]
pub enum EsoError {
    /// The current working directory could not be determined.
    #[error("Failed to get current working directory: {0}")]
    PathResolution(#[source] std::io::Error),

    /// The manifest file could not be opened.
    #[error("Failed to open manifest file '{path}': {source}")]
    ManifestNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A single Lua file failed to load or run.
    #[error("Failed to load Lua file '{path}': {message}")]
    EntryLoad { path: String, message: String },

    /// The file name does not carry the `.lua` suffix.
    #[error("Not a Lua file: {0}")]
    NotLuaFile(String),

    /// Configuration could not be parsed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] toml::de::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for esolib operations.
pub type EsoResult<T> = std::result::Result<T, EsoError>;
