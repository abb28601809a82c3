//! Custom error types for the map build

use std::fmt;
use std::io;

/// Build-specific error types
#[derive(Debug)]
pub enum BuildError {
    /// I/O error
    IoError(io::Error),
    /// JSON (de)serialization error
    JsonError(serde_json::Error),
    /// GeoJSON structure or geometry conversion error
    GeoJsonError(geojson::Error),
    /// A source layer is missing or unusable
    InvalidLayer(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::IoError(e) => write!(f, "I/O error: {}", e),
            BuildError::JsonError(e) => write!(f, "JSON error: {}", e),
            BuildError::GeoJsonError(e) => write!(f, "GeoJSON error: {}", e),
            BuildError::InvalidLayer(msg) => write!(f, "Invalid source layer: {}", msg),
            BuildError::GenericError(msg) => write!(f, "Build error: {}", msg),
        }
    }
}

impl std::error::Error for BuildError {}

impl From<io::Error> for BuildError {
    fn from(error: io::Error) -> Self {
        BuildError::IoError(error)
    }
}

impl From<serde_json::Error> for BuildError {
    fn from(error: serde_json::Error) -> Self {
        BuildError::JsonError(error)
    }
}

impl From<geojson::Error> for BuildError {
    fn from(error: geojson::Error) -> Self {
        BuildError::GeoJsonError(error)
    }
}

impl From<String> for BuildError {
    fn from(msg: String) -> Self {
        BuildError::GenericError(msg)
    }
}

/// Result type for build operations
pub type BuildResult<T> = Result<T, BuildError>;
