//! `toolkit transform-block`: transform a single block manifest.

use std::fs;
use std::io::Write;

use toolkit_bundler::transform_block_json;
use tracing::debug;

use crate::cli::TransformBlockArgs;
use crate::error::{Result, ResultExt};
use crate::ui;

pub fn execute(args: TransformBlockArgs) -> Result<()> {
    let content = fs::read(&args.path).with_path(&args.path)?;
    let transformed = transform_block_json(&content, &args.path)?;

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_path(parent)?;
            }
            fs::write(out, &transformed).with_path(out)?;
            debug!(from = %args.path.display(), "transformed block manifest");
            ui::info(&format!("Wrote {}", out.display()));
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{transformed}").context("Failed to write block manifest")?;
        }
    }

    Ok(())
}
