//! # toolkit-bundler
//!
//! Bundler configuration assembly and block manifest post-processing.
//!
//! ## Assemble a configuration
//!
//! ```no_run
//! use toolkit_bundler::config::{assemble, BuildContext};
//! use toolkit_config::{ConfigDiscovery, Mode};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let loaded = ConfigDiscovery::new(".").load()?;
//! let assembled = assemble(BuildContext::from_loaded(loaded, Mode::from_env()));
//! println!("{}", serde_json::to_string_pretty(&assembled)?);
//! # Ok(()) }
//! ```
//!
//! ## Transform a block manifest
//!
//! ```no_run
//! use std::path::Path;
//! use toolkit_bundler::manifest::transform_block_json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let path = Path::new("includes/blocks/card/block.json");
//! let transformed = transform_block_json(&std::fs::read(path)?, path)?;
//! # Ok(()) }
//! ```

pub mod blocks;
pub mod config;
pub mod error;
pub mod hash;
pub mod manifest;

pub use config::{assemble, AssembledConfig, BuildContext, BuildType, BundlerConfig};
pub use error::{BundlerError, Result};
pub use hash::{file_content_hash, Blake3Hasher, ContentHasher};
pub use manifest::{copy_block_manifests, transform_block_json, ManifestError};

use std::path::Path;

use toolkit_config::{ConfigDiscovery, Mode};

/// Load the project at `root` and assemble its bundler configuration.
pub fn assemble_project(root: impl AsRef<Path>, mode: Mode) -> Result<AssembledConfig> {
    let loaded = ConfigDiscovery::new(root).load()?;
    Ok(assemble(BuildContext::from_loaded(loaded, mode)))
}
