//! Block asset discovery.
//!
//! Every `block.json` under the blocks directory can declare local script and
//! style sources. Those sources become bundler entries named after their
//! location relative to the blocks directory (`card/index` for
//! `card/index.ts`).

use std::fs;
use std::path::{Component, Path};

use serde_json::Value;
use toolkit_config::BuildFiles;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::BuildType;
use crate::manifest::{as_list, AssetRef, BLOCK_MANIFEST};

/// Manifest fields compiled by the script build
pub const SCRIPT_BUILD_FIELDS: &[&str] = &[
    "script",
    "editorScript",
    "viewScript",
    "style",
    "editorStyle",
    "viewStyle",
];

/// Manifest fields compiled by the module build
pub const MODULE_BUILD_FIELDS: &[&str] = &["viewScriptModule", "scriptModule"];

pub fn manifest_fields(build_type: BuildType) -> &'static [&'static str] {
    match build_type {
        BuildType::Script => SCRIPT_BUILD_FIELDS,
        BuildType::Module => MODULE_BUILD_FIELDS,
    }
}

/// Collect the local sources declared by block manifests for one build type.
///
/// Discovery is best effort: unreadable manifests are logged and skipped,
/// and references to files that do not exist are ignored.
pub fn block_build_files(blocks_dir: &Path, build_type: BuildType) -> BuildFiles {
    let mut files = BuildFiles::new();
    if !blocks_dir.is_dir() {
        return files;
    }

    let manifests = WalkDir::new(blocks_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!(error = %err, "skipping unreadable blocks directory entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && entry.file_name() == BLOCK_MANIFEST);

    for manifest in manifests {
        let path = manifest.path();
        let metadata = match fs::read(path)
            .map_err(|e| e.to_string())
            .and_then(|bytes| serde_json::from_slice::<Value>(&bytes).map_err(|e| e.to_string()))
        {
            Ok(metadata) => metadata,
            Err(error) => {
                warn!(manifest = %path.display(), %error, "skipping block manifest");
                continue;
            }
        };

        let directory = path.parent().unwrap_or(blocks_dir);
        for field in manifest_fields(build_type) {
            for raw in as_list(metadata.get(*field))
                .into_iter()
                .filter_map(Value::as_str)
            {
                let Some(local) = AssetRef::parse(raw).local_path() else {
                    continue;
                };
                let source = path_clean::clean(directory.join(local));
                if !source.is_file() {
                    debug!(source = %source.display(), field, "block asset source not found");
                    continue;
                }
                if let Some(name) = chunk_name(blocks_dir, &source) {
                    files.insert(name, source);
                }
            }
        }
    }

    files
}

/// `card/index` for `<blocks_dir>/card/index.ts`, always `/`-separated.
fn chunk_name(blocks_dir: &Path, source: &Path) -> Option<String> {
    let blocks_dir = path_clean::clean(blocks_dir);
    let relative = source.strip_prefix(&blocks_dir).ok()?.with_extension("");
    let parts: Vec<_> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect();
    (!parts.is_empty()).then(|| parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write(path: PathBuf, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        let card = dir.path().join("card");
        write(
            card.join("block.json"),
            r#"{
                "editorScript": "file:./index.ts",
                "viewScriptModule": "file:./view.ts",
                "style": ["file:./style.scss", "wp-block-library"],
                "script": "file:./missing.js"
            }"#,
        );
        write(card.join("index.ts"), "");
        write(card.join("view.ts"), "");
        write(card.join("style.scss"), "");
        write(dir.path().join("broken/block.json"), "{ not json");
        dir
    }

    #[test]
    fn script_build_collects_scripts_and_styles() {
        let dir = fixture();
        let files = block_build_files(dir.path(), BuildType::Script);

        let names: Vec<_> = files.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["card/index", "card/style"]);
        assert_eq!(
            files.get("card/index"),
            Some(dir.path().join("card/index.ts").as_path())
        );
    }

    #[test]
    fn module_build_collects_module_fields_only() {
        let dir = fixture();
        let files = block_build_files(dir.path(), BuildType::Module);

        let names: Vec<_> = files.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["card/view"]);
    }

    #[test]
    fn missing_directory_yields_nothing() {
        let dir = TempDir::new().unwrap();
        assert!(block_build_files(&dir.path().join("absent"), BuildType::Script).is_empty());
    }
}
