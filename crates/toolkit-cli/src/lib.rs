//! Command-line interface for the block toolkit.
//!
//! - [`cli`] - argument definitions
//! - [`commands`] - one module per subcommand
//! - [`error`] - `CliError` and miette rendering
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status messages on stderr

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
