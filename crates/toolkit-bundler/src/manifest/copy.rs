use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use super::{transform_block_json, ManifestError, Result};

/// File name of block manifests
pub const BLOCK_MANIFEST: &str = "block.json";

/// Copy every `block.json` under `blocks_dir` to the same relative location
/// under `dest_dir`, transformed for the compiled assets.
///
/// Returns the written paths in walk order. A missing `blocks_dir` copies
/// nothing.
pub fn copy_block_manifests(blocks_dir: &Path, dest_dir: &Path) -> Result<Vec<PathBuf>> {
    if !blocks_dir.is_dir() {
        debug!(dir = %blocks_dir.display(), "no blocks directory");
        return Ok(Vec::new());
    }

    let mut written = Vec::new();
    for entry in WalkDir::new(blocks_dir).sort_by_file_name() {
        let entry = entry.map_err(|err| ManifestError::Io {
            path: err
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| blocks_dir.to_path_buf()),
            source: err.into(),
        })?;

        if !entry.file_type().is_file() || entry.file_name() != BLOCK_MANIFEST {
            continue;
        }

        let source = entry.path();
        let relative = source.strip_prefix(blocks_dir).unwrap_or(source);
        let target = dest_dir.join(relative);

        let content = fs::read(source).map_err(|source_err| ManifestError::Io {
            path: source.to_path_buf(),
            source: source_err,
        })?;
        let transformed = transform_block_json(&content, source)?;

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|source| ManifestError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&target, transformed).map_err(|source| ManifestError::Io {
            path: target.clone(),
            source,
        })?;

        debug!(from = %source.display(), to = %target.display(), "copied block manifest");
        written.push(target);
    }

    info!(count = written.len(), dest = %dest_dir.display(), "copied block manifests");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::file_content_hash;
    use tempfile::TempDir;

    #[test]
    fn copies_nested_manifests_transformed() {
        let src = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        let card = src.path().join("card");
        fs::create_dir_all(&card).unwrap();
        fs::write(
            card.join(BLOCK_MANIFEST),
            r#"{ "name": "acme/card", "editorScript": "file:./index.ts", "style": "file:./style.scss" }"#,
        )
        .unwrap();
        fs::write(card.join("style.scss"), ".card { color: red; }").unwrap();
        fs::write(card.join("index.ts"), "export {};").unwrap();

        let written = copy_block_manifests(src.path(), dest.path()).unwrap();

        let target = dest.path().join("card").join(BLOCK_MANIFEST);
        assert_eq!(written, [target.clone()]);

        let out: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&target).unwrap()).unwrap();
        assert_eq!(out["editorScript"], "file:./index.js");
        assert_eq!(out["style"], "file:./style.css");
        assert_eq!(
            out["version"],
            file_content_hash(&card.join("style.scss")).unwrap().as_str()
        );
        assert!(!dest.path().join("card/index.ts").exists());
    }

    #[test]
    fn missing_blocks_dir_copies_nothing() {
        let dest = TempDir::new().unwrap();
        let written =
            copy_block_manifests(&dest.path().join("nope"), dest.path()).unwrap();
        assert!(written.is_empty());
    }
}
