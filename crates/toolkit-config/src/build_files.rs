//! Ordered chunk-name to source-path maps.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Ordered mapping from logical chunk name to source file path.
///
/// Used both to generate bundler entries and to classify emitted chunks by
/// where their source lives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildFiles(IndexMap<String, PathBuf>);

impl BuildFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve project-relative entries against `root`.
    ///
    /// Missing sources are kept (the bundler reports them) but logged.
    pub fn resolve(root: &Path, entries: &IndexMap<String, PathBuf>) -> Self {
        let files = entries
            .iter()
            .map(|(name, relative)| {
                let path = path_clean::clean(root.join(relative));
                if !path.exists() {
                    warn!(chunk = %name, path = %path.display(), "entry source does not exist");
                }
                (name.clone(), path)
            })
            .collect();
        Self(files)
    }

    pub fn get(&self, chunk_name: &str) -> Option<&Path> {
        self.0.get(chunk_name).map(PathBuf::as_path)
    }

    /// Insert or replace a chunk. Replacing keeps the original position.
    pub fn insert(&mut self, chunk_name: impl Into<String>, source: impl Into<PathBuf>) {
        self.0.insert(chunk_name.into(), source.into());
    }

    pub fn extend(&mut self, other: BuildFiles) {
        self.0.extend(other.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.0
            .iter()
            .map(|(name, path)| (name.as_str(), path.as_path()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> IndexMap<String, PathBuf> {
        self.0
    }
}

impl FromIterator<(String, PathBuf)> for BuildFiles {
    fn from_iter<T: IntoIterator<Item = (String, PathBuf)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<IndexMap<String, PathBuf>> for BuildFiles {
    fn from(map: IndexMap<String, PathBuf>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_joins_and_cleans_paths() {
        let mut entries = IndexMap::new();
        entries.insert("admin".to_string(), PathBuf::from("./assets/js/admin.js"));
        entries.insert("frontend".to_string(), PathBuf::from("assets/../src/front.ts"));

        let files = BuildFiles::resolve(Path::new("/project"), &entries);

        assert_eq!(files.get("admin"), Some(Path::new("/project/assets/js/admin.js")));
        assert_eq!(files.get("frontend"), Some(Path::new("/project/src/front.ts")));
        assert!(files.get("missing").is_none());
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut files = BuildFiles::new();
        files.insert("a", "/a.js");
        files.insert("b", "/b.js");
        files.insert("a", "/a2.js");

        let order: Vec<_> = files.iter().map(|(name, _)| name).collect();
        assert_eq!(order, ["a", "b"]);
        assert_eq!(files.get("a"), Some(Path::new("/a2.js")));
        assert_eq!(files.len(), 2);
    }
}
