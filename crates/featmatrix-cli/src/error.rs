//! Error types for featmatrix-cli

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for featmatrix-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in featmatrix-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from featmatrix-core
    #[error("Core error: {0}")]
    Core(#[from] featmatrix_core::Error),

    /// Configuration could not be located, parsed, or written
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// I/O error on a specific file
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Writing command output failed
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// JSON rendering failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path it occurred on.
    pub fn io_with_path(source: std::io::Error, path: &Path) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
