//! Error types for camera export.

// others
use thiserror::Error;
// lux
use crate::core::camera::WorldQuery;
use crate::core::lux::Float;

/// Failure of a single world space query on the host camera.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    /// The host has no value for this query (e.g. a camera without an
    /// aim point).
    #[error("{0} is not available")]
    Unavailable(WorldQuery),

    /// The host API reported an error.
    #[error("host error: {0}")]
    Host(String),
}

/// Errors raised while loading or validating export settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// A required key is missing from the settings node.
    #[error("missing setting '{0}'")]
    MissingKey(String),

    /// A setting has a value outside its domain.
    #[error("invalid value '{value}' for setting '{key}'")]
    InvalidValue { key: String, value: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The main error type for camera export.
#[derive(Error, Debug)]
pub enum ExportError {
    /// One of the required world space queries failed. The look-at
    /// block was not written.
    #[error("failed to get {query}: {source}")]
    WorldQuery {
        query: WorldQuery,
        #[source]
        source: QueryError,
    },

    /// Width and height must both be positive.
    #[error("invalid output resolution {width}x{height}")]
    InvalidResolution { width: i32, height: i32 },

    /// The realistic camera needs a lens specification file.
    #[error("realistic camera requires a lens specification file (realistic_specfile)")]
    MissingSpecFile,

    /// The realistic camera is focused at its own focal length, there
    /// is no finite film distance.
    #[error("no film distance for focus distance {focus_distance} and focal length {focal_length}")]
    FilmDistance {
        focus_distance: Float,
        focal_length: Float,
    },

    /// Settings could not be loaded.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error while reading a camera snapshot.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExportError {
    /// The failed world space query, if that is what went wrong.
    pub fn failed_query(&self) -> Option<WorldQuery> {
        match self {
            ExportError::WorldQuery { query, .. } => Some(*query),
            _ => None,
        }
    }
}

/// A specialized Result type for camera export.
pub type Result<T> = std::result::Result<T, ExportError>;
