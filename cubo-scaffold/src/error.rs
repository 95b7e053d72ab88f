//! Error types and error handling

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Scaffolding error type
///
/// Every variant is fatal to a run. A run is not atomic: files written before
/// the failing step stay on disk.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Rejected input, raised before anything touches the filesystem
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A document that must already exist is missing
    #[error("Not found: {}", .path.display())]
    NotFound {
        /// Path that was expected to exist
        path: PathBuf,
    },

    /// Filesystem failure (permissions, disk, ...)
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// Template rendering failure
    #[error("Failed to render template {template}: {source}")]
    Render {
        /// Template kind or payload being rendered
        template: String,
        /// Underlying Handlebars error
        #[source]
        source: Box<handlebars::RenderError>,
    },

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// Built-in defaults could not be serialized
    #[error("Configuration error: {0}")]
    ConfigDefaults(#[from] toml::ser::Error),
}

impl ScaffoldError {
    /// Wrap an I/O error with the path it happened on
    ///
    /// `NotFound` I/O errors are reported as [`ScaffoldError::NotFound`].
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}

impl From<figment::Error> for ScaffoldError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

/// Result alias used throughout the crate
pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;
