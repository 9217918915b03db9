//! Error handling for the `toolkit` binary.
//!
//! Library errors convert into [`CliError`] through `From`, and
//! [`cli_error_to_miette`] renders them with a hint where one helps.
//!
//! ```rust,no_run
//! use std::path::Path;
//! use toolkit_cli::error::{Result, ResultExt};
//!
//! fn read_manifest(path: &Path) -> Result<Vec<u8>> {
//!     std::fs::read(path).with_path(path)
//! }
//! ```

mod report;

use std::path::PathBuf;

use thiserror::Error;
use toolkit_bundler::{BundlerError, ManifestError};
use toolkit_config::ConfigError;

pub use report::cli_error_to_miette;

#[derive(Debug, Error)]
pub enum CliError {
    /// Project configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A block manifest could not be read, transformed or written
    #[error("Block manifest error: {0}")]
    Manifest(#[from] ManifestError),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Custom(String),
}

impl From<BundlerError> for CliError {
    fn from(err: BundlerError) -> Self {
        match err {
            BundlerError::Config(e) => CliError::Config(e),
            BundlerError::Manifest(e) => CliError::Manifest(e),
            BundlerError::Serialize(e) => CliError::Json(e),
        }
    }
}

pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Attach context to I/O results.
pub trait ResultExt<T> {
    /// Name the file an I/O error happened on.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Prefix the error with a message.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|source| {
            let path = path.as_ref().to_path_buf();
            if source.kind() == std::io::ErrorKind::NotFound {
                CliError::FileNotFound(path)
            } else {
                CliError::Io { path, source }
            }
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| CliError::Custom(format!("{msg}: {e}")))
    }
}
