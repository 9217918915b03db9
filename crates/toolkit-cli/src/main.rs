//! `toolkit` - build configuration for block themes and plugins.
//!
//! Parses arguments, installs logging, and dispatches to a command.

use clap::Parser;
use miette::Result;
use toolkit_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Config(config_args) => commands::config_execute(config_args),
        cli::Command::TransformBlock(transform_args) => {
            commands::transform_block_execute(transform_args)
        }
        cli::Command::CopyBlocks(copy_args) => commands::copy_blocks_execute(copy_args),
    };

    result.map_err(error::cli_error_to_miette)
}
