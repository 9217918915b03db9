//! Block manifest (`block.json`) post-processing.
//!
//! Manifests reference their assets by source path (`file:./index.ts`,
//! `file:./style.scss`). After bundling those sources compile to `.js` and
//! `.css`, so the emitted manifest has to point at the compiled files. When
//! the manifest declares no `version`, one is derived from the contents of
//! its local stylesheets so cache busting follows style changes.

mod asset;
mod copy;

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::hash::{Blake3Hasher, ContentHasher};

pub use asset::{as_list, AssetKind, AssetRef, LOCAL_PREFIX, SCRIPT_FIELDS, STYLE_FIELDS};
pub use copy::{copy_block_manifests, BLOCK_MANIFEST};

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} must contain a JSON object", path.display())]
    NotAnObject { path: PathBuf },

    #[error("failed to hash style file {}: {source}", path.display())]
    Hash {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ManifestError>;

/// Transform a block manifest using BLAKE3 content hashes.
///
/// See [`transform_block_json_with`].
pub fn transform_block_json(content: &[u8], manifest_path: &Path) -> Result<String> {
    transform_block_json_with(content, manifest_path, &Blake3Hasher)
}

/// Transform a block manifest.
///
/// - Empty content is returned unchanged.
/// - Local script references ending in `.ts`/`.tsx` are rewritten to `.js`
///   and local style references ending in `.sass`/`.scss` to `.css`.
/// - Without a declared `version` key, the hashes of all local `style` files
///   (resolved against the manifest's directory, in list order) are
///   concatenated into `version`.
///
/// The result is pretty-printed with two-space indentation and key order
/// preserved. Transforming the output again yields the same text.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use toolkit_bundler::manifest::transform_block_json;
///
/// let raw = br#"{ "name": "acme/card", "editorScript": "file:./index.tsx" }"#;
/// let out = transform_block_json(raw, Path::new("/blocks/card/block.json")).unwrap();
/// assert!(out.contains(r#""editorScript": "file:./index.js""#));
/// ```
pub fn transform_block_json_with<H>(
    content: &[u8],
    manifest_path: &Path,
    hasher: &H,
) -> Result<String>
where
    H: ContentHasher + ?Sized,
{
    if content.is_empty() {
        return Ok(String::new());
    }

    let metadata = parse_manifest(content, manifest_path)?;

    let has_version = metadata.contains_key("version");
    let local_styles: Vec<&str> = as_list(metadata.get("style"))
        .into_iter()
        .filter_map(Value::as_str)
        .filter_map(|raw| AssetRef::parse(raw).local_path())
        .collect();

    let mut version = String::new();
    if !has_version && !local_styles.is_empty() {
        let directory = manifest_path.parent().unwrap_or_else(|| Path::new(""));
        for style in &local_styles {
            let path = path_clean::clean(directory.join(style));
            let hash = hasher
                .hash_file(&path)
                .map_err(|source| ManifestError::Hash {
                    path: path.clone(),
                    source,
                })?;
            version.push_str(&hash);
        }
        debug!(manifest = %manifest_path.display(), %version, "derived block version");
    }

    let mut output = metadata.clone();
    if !version.is_empty() {
        output.insert("version".to_string(), Value::String(version));
    }

    for kind in [AssetKind::Script, AssetKind::Style] {
        for field in kind.fields() {
            if let Some(value) = metadata.get(*field) {
                output.insert((*field).to_string(), kind.rewrite(value));
            }
        }
    }

    serde_json::to_string_pretty(&Value::Object(output)).map_err(|source| {
        ManifestError::Serialize {
            path: manifest_path.to_path_buf(),
            source,
        }
    })
}

fn parse_manifest(content: &[u8], manifest_path: &Path) -> Result<Map<String, Value>> {
    let value: Value =
        serde_json::from_slice(content).map_err(|source| ManifestError::Parse {
            path: manifest_path.to_path_buf(),
            source,
        })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(ManifestError::NotAnObject {
            path: manifest_path.to_path_buf(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records requested paths and answers with their file names.
    #[derive(Default)]
    struct RecordingHasher {
        calls: RefCell<Vec<PathBuf>>,
    }

    impl ContentHasher for RecordingHasher {
        fn hash_file(&self, path: &Path) -> std::io::Result<String> {
            self.calls.borrow_mut().push(path.to_path_buf());
            Ok(format!(
                "<{}>",
                path.file_name().unwrap_or_default().to_string_lossy()
            ))
        }
    }

    fn transform(raw: &str, hasher: &RecordingHasher) -> Value {
        let out =
            transform_block_json_with(raw.as_bytes(), Path::new("/b/card/block.json"), hasher)
                .unwrap();
        serde_json::from_str(&out).unwrap()
    }

    #[test]
    fn empty_content_passes_through() {
        let hasher = RecordingHasher::default();
        let out =
            transform_block_json_with(b"", Path::new("/b/block.json"), &hasher).unwrap();
        assert_eq!(out, "");
        assert!(hasher.calls.borrow().is_empty());
    }

    #[test]
    fn version_concatenates_local_style_hashes_in_order() {
        let hasher = RecordingHasher::default();
        let out = transform(
            r#"{ "style": ["file:./a.scss", "wp-components", "file:./b.css"] }"#,
            &hasher,
        );

        assert_eq!(out["version"], "<a.scss><b.css>");
        assert_eq!(out["style"], serde_json::json!(["file:./a.css", "wp-components", "file:./b.css"]));
        assert_eq!(
            *hasher.calls.borrow(),
            [PathBuf::from("/b/card/a.scss"), PathBuf::from("/b/card/b.css")]
        );
    }

    #[test]
    fn declared_version_skips_hashing() {
        let hasher = RecordingHasher::default();
        let out = transform(r#"{ "version": "1.2.3", "style": "file:./style.scss" }"#, &hasher);

        assert_eq!(out["version"], "1.2.3");
        assert_eq!(out["style"], "file:./style.css");
        assert!(hasher.calls.borrow().is_empty());
    }

    #[test]
    fn null_version_counts_as_declared() {
        let hasher = RecordingHasher::default();
        let out = transform(r#"{ "version": null, "style": "file:./style.css" }"#, &hasher);

        assert!(out["version"].is_null());
        assert!(hasher.calls.borrow().is_empty());
    }

    #[test]
    fn registered_styles_do_not_produce_a_version() {
        let hasher = RecordingHasher::default();
        let out = transform(r#"{ "style": "wp-block-library" }"#, &hasher);

        assert!(out.get("version").is_none());
        assert!(hasher.calls.borrow().is_empty());
    }

    #[test]
    fn version_is_appended_after_existing_keys() {
        let hasher = RecordingHasher::default();
        let raw = r#"{ "name": "acme/card", "style": "file:./style.css" }"#;
        let out = transform_block_json_with(raw.as_bytes(), Path::new("/b/block.json"), &hasher)
            .unwrap();

        let name = out.find("\"name\"").unwrap();
        let style = out.find("\"style\"").unwrap();
        let version = out.find("\"version\"").unwrap();
        assert!(name < style && style < version);
    }

    #[test]
    fn non_object_manifest_is_rejected() {
        let hasher = RecordingHasher::default();
        let err = transform_block_json_with(b"[1, 2]", Path::new("/b/block.json"), &hasher)
            .unwrap_err();
        assert!(matches!(err, ManifestError::NotAnObject { .. }));
    }

    #[test]
    fn hash_failure_propagates() {
        let err = transform_block_json(
            br#"{ "style": "file:./missing.css" }"#,
            Path::new("/definitely/not/here/block.json"),
        )
        .unwrap_err();
        assert!(matches!(err, ManifestError::Hash { .. }));
    }
}
