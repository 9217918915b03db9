//! Crate-level error type.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BundlerError>;

#[derive(Debug, Error)]
pub enum BundlerError {
    #[error(transparent)]
    Config(#[from] toolkit_config::ConfigError),

    #[error(transparent)]
    Manifest(#[from] crate::manifest::ManifestError),

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}
