use std::path::PathBuf;

/// Errors that can occur while preparing reference markers.
#[derive(Debug, thiserror::Error)]
pub enum MarkerError {
    /// I/O error reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to decode a marker image.
    #[error("Image decode error for {path}: {message}")]
    ImageDecode { path: PathBuf, message: String },

    /// Marker image fails the trackability checks (dimensions, contrast).
    #[error("Validation error for {path}: {message}")]
    Validation { path: PathBuf, message: String },

    /// Two different source files produce the same Rust identifier.
    #[error("Identifier collision: {identifier} is produced by both {path_a} and {path_b}")]
    IdentifierCollision {
        identifier: String,
        path_a: PathBuf,
        path_b: PathBuf,
    },
}
