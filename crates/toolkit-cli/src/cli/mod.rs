//! Command-line interface definition.
//!
//! - `toolkit config` - print the assembled bundler configuration
//! - `toolkit transform-block` - transform one `block.json`
//! - `toolkit copy-blocks` - copy transformed block manifests to the dist directory

mod commands;
pub mod enums;

use clap::Parser;

pub use commands::{Command, ConfigArgs, CopyBlocksArgs, TransformBlockArgs};
pub use enums::ModeArg;

/// Build configuration for block themes and plugins
#[derive(Parser, Debug)]
#[command(
    name = "toolkit",
    version,
    about = "Build configuration for block themes and plugins",
    long_about = "Assembles webpack configuration from package.json settings and\n\
                  post-processes block.json manifests for compiled assets."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}
