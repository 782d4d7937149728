//! Error types for the ui-detect-eval library.

use thiserror::Error;

/// Result type for ui-detect-eval operations.
pub type Result<T> = std::result::Result<T, EvalError>;

/// Error types that can occur while loading annotations or scoring them.
#[derive(Error, Debug)]
pub enum EvalError {
    /// Error during JSON parsing or serialization.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error during I/O operations.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// A file could not be parsed as an annotation document.
    #[error("Invalid annotation file {file}: {source}")]
    InvalidAnnotationFile {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// Invalid annotation data.
    #[error("Invalid annotation: {0}")]
    InvalidAnnotation(String),

    /// Invalid bounding box coordinates.
    #[error("Invalid bounding box: {0}")]
    InvalidBoundingBox(String),

    /// IoU threshold outside of (0, 1].
    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),

    /// Inconsistent evaluation configuration.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// No classes to evaluate.
    #[error("Empty class set: {0}")]
    EmptyClassSet(String),
}
