use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, CarteError>;

/// Error type covering the different failure cases that can occur while the
/// tool loads, resolves, or renders data.
#[derive(Debug, Error)]
pub enum CarteError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when CSV parsing or deserialization fails.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Raised when JSON parsing fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Raised when the base map cannot be parsed as GeoJSON.
    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),

    /// Raised when the base map parses but does not follow the expected
    /// conventions.
    #[error("invalid base map: {0}")]
    InvalidBasemap(String),

    /// Errors bubbled up from the plotting backend.
    #[error("render error: {0}")]
    Render(String),

    /// Raised when the user provides a path that does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
