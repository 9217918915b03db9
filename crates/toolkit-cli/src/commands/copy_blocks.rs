//! `toolkit copy-blocks`: run the block manifest copy step on its own.
//!
//! Uses the `CopyBlockManifests` plugin from the assembled script build, so
//! the directories match what a full build would use.

use toolkit_config::Mode;
use tracing::debug;

use crate::cli::CopyBlocksArgs;
use crate::error::Result;
use crate::ui;

pub fn execute(args: CopyBlocksArgs) -> Result<()> {
    let assembled = toolkit_bundler::assemble_project(&args.root, Mode::from_env())?;

    let mut copied = Vec::new();
    let mut ran = false;
    for plugin in &assembled.script().plugins {
        if let Some(result) = plugin.copy_block_manifests() {
            debug!(plugin = plugin.name(), "running plugin");
            copied.extend(result?);
            ran = true;
        }
    }

    if !ran {
        ui::warning("Block assets are disabled for this project; nothing to copy");
        return Ok(());
    }

    ui::success(&format!(
        "Copied {} block manifest{}",
        copied.len(),
        if copied.len() == 1 { "" } else { "s" }
    ));
    Ok(())
}

