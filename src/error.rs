//! Error types for the icon renderer

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for renderer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or writing the icon
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// No candidate font pair could be found on disk
    #[error("No usable font pair found (tried: {})", display_paths(.attempted))]
    FontNotFound { attempted: Vec<PathBuf> },

    /// A font file exists but could not be read or parsed
    #[error("Failed to load font {}: {reason}", .path.display())]
    FontLoad { path: PathBuf, reason: String },

    /// Failed to encode the flattened image
    #[error("PNG encoding failed: {0}")]
    EncodeError(#[from] image::ImageError),

    /// Failed to write an output file
    #[error("Failed to write {}: {source}", .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
