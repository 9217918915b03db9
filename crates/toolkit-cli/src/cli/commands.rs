use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::ModeArg;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the assembled bundler configuration as JSON
    ///
    /// Prints a single object, or an array of the script and module builds
    /// when `useScriptModules` is enabled.
    Config(ConfigArgs),

    /// Transform a block.json for compiled assets
    ///
    /// Rewrites TypeScript and Sass references to their compiled names and
    /// derives `version` from style contents when none is declared.
    TransformBlock(TransformBlockArgs),

    /// Copy transformed block manifests into the dist directory
    CopyBlocks(CopyBlocksArgs),
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Project root containing package.json
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// Build mode; defaults to NODE_ENV
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,
}

#[derive(Args, Debug)]
pub struct TransformBlockArgs {
    /// Path to the block.json to transform
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Write the result here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CopyBlocksArgs {
    /// Project root containing package.json
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,
}
