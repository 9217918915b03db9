pub mod build_files;
pub mod discovery;
pub mod error;
mod helpers;
pub mod mode;
pub mod package;
pub mod project;

// Re-export main types
pub use build_files::*;
pub use error::*;
pub use mode::*;
pub use package::*;
pub use project::*;

pub use discovery::{discover, ConfigDiscovery, LoadedConfig, TOOLKIT_FIELD};
