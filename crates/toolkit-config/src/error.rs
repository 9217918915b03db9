//! Error types for configuration loading.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("package.json not found in {}", root.display())]
    NotFound { root: PathBuf },

    #[error("invalid package.json at {}: {message}", path.display())]
    InvalidPackageJson { path: PathBuf, message: String },

    #[error("invalid config value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
