//! File content hashing for manifest versions.

use std::path::Path;

/// Hex characters kept from the BLAKE3 digest.
pub const HASH_LEN: usize = 32;

/// Produces a stable string digest of a file's contents.
pub trait ContentHasher {
    fn hash_file(&self, path: &Path) -> std::io::Result<String>;
}

/// BLAKE3 content hasher
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3Hasher;

impl ContentHasher for Blake3Hasher {
    fn hash_file(&self, path: &Path) -> std::io::Result<String> {
        file_content_hash(path)
    }
}

/// Hash the contents of the file at `path`.
pub fn file_content_hash(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(content_hash(&bytes))
}

/// Hash raw bytes to a `HASH_LEN`-character hex string.
pub fn content_hash(bytes: &[u8]) -> String {
    let hex = blake3::hash(bytes).to_hex();
    hex.as_str()[..HASH_LEN].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_stable_and_truncated() {
        let a = content_hash(b".block { color: red; }");
        let b = content_hash(b".block { color: red; }");
        assert_eq!(a, b);
        assert_eq!(a.len(), HASH_LEN);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn different_content_different_hash() {
        assert_ne!(content_hash(b"a"), content_hash(b"b"));
    }

    #[test]
    fn file_hash_matches_content_hash() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("style.css");
        std::fs::write(&path, "body {}").unwrap();

        assert_eq!(file_content_hash(&path).unwrap(), content_hash(b"body {}"));
        assert!(file_content_hash(&dir.path().join("missing.css")).is_err());
    }
}
