//! Command implementations.
//!
//! Each command exposes an `execute` function taking its parsed arguments.

pub mod config;
pub mod copy_blocks;
pub mod transform_block;

use toolkit_config::Mode;

use crate::cli::ModeArg;

pub use config::execute as config_execute;
pub use copy_blocks::execute as copy_blocks_execute;
pub use transform_block::execute as transform_block_execute;

/// Explicit `--mode`, else `NODE_ENV`.
pub(crate) fn resolve_mode(arg: Option<ModeArg>) -> Mode {
    arg.map(Mode::from).unwrap_or_else(Mode::from_env)
}
