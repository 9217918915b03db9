//! `toolkit config`: print the assembled bundler configuration.

use std::io::Write;

use tracing::debug;

use crate::cli::ConfigArgs;
use crate::commands::resolve_mode;
use crate::error::{Result, ResultExt};

pub fn execute(args: ConfigArgs) -> Result<()> {
    let mode = resolve_mode(args.mode);
    debug!(root = %args.root.display(), %mode, "loading project");

    let assembled = toolkit_bundler::assemble_project(&args.root, mode)?;
    let json = assembled.to_json_pretty()?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").context("Failed to write configuration")?;
    Ok(())
}
