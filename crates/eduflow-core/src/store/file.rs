use std::path::{Path, PathBuf};

use super::KvStore;
use crate::error::StoreError;

/// Extension used for every stored key.
const FILE_EXTENSION: &str = "json";

/// File stem standing in for the empty key.
const EMPTY_KEY_STEM: &str = "%";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Result<Self, StoreError> {
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", encode_key(key), FILE_EXTENSION))
    }
}

/// Percent-encode every byte outside `[A-Za-z0-9_-]`, so a key can never
/// name a path separator or a dot entry.
fn encode_key(key: &str) -> String {
    if key.is_empty() {
        return EMPTY_KEY_STEM.to_string();
    }
    let mut stem = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-' {
            stem.push(byte as char);
        } else {
            stem.push_str(&format!("%{:02X}", byte));
        }
    }
    stem
}

/// Inverse of [`encode_key`]. Stems that `encode_key` would never produce
/// yield `None`.
fn decode_key(stem: &str) -> Option<String> {
    if stem == EMPTY_KEY_STEM {
        return Some(String::new());
    }
    let raw = stem.as_bytes();
    let mut bytes = Vec::with_capacity(raw.len());
    let mut i = 0;
    while i < raw.len() {
        if raw[i] == b'%' {
            let hex = stem.get(i + 1..i + 3)?;
            bytes.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            bytes.push(raw[i]);
            i += 1;
        }
    }
    let key = String::from_utf8(bytes).ok()?;
    (encode_key(&key) == stem).then_some(key)
}

impl KvStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(path)?))
    }

    fn write(&self, key: &str, raw: &str) -> Result<(), StoreError> {
        let path = self.key_path(key);
        std::fs::write(path, raw)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.key_path(key);
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        let mut keys = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(FILE_EXTENSION) {
                continue;
            }
            if let Some(key) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(decode_key)
            {
                keys.push(key);
            }
        }
        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> FileStore {
        let dir = std::env::temp_dir().join(format!(
            "eduflow-filestore-{}-{}",
            std::process::id(),
            name
        ));
        let _ = std::fs::remove_dir_all(&dir);
        FileStore::new(dir).unwrap()
    }

    #[test]
    fn test_read_missing_is_none() {
        let store = temp_store("missing");
        assert_eq!(store.read("eduflow_user").unwrap(), None);
    }

    #[test]
    fn test_write_read_remove() {
        let store = temp_store("roundtrip");
        store.write("progress_s1", "0.5").unwrap();
        assert_eq!(store.read("progress_s1").unwrap().as_deref(), Some("0.5"));
        assert!(store.root().join("progress_s1.json").exists());

        store.remove("progress_s1").unwrap();
        assert_eq!(store.read("progress_s1").unwrap(), None);
        // Removing again is fine
        store.remove("progress_s1").unwrap();
    }

    #[test]
    fn test_path_like_keys_stay_inside_root() {
        let store = temp_store("escape");
        store.write("../escape", "1").unwrap();
        store.write("a/b", "2").unwrap();
        assert_eq!(store.read("../escape").unwrap().as_deref(), Some("1"));
        assert_eq!(store.read("a/b").unwrap().as_deref(), Some("2"));
        assert!(store.root().join("%2E%2E%2Fescape.json").exists());
        assert!(!store.root().join("a").exists());
        assert_eq!(store.keys().unwrap(), vec!["../escape", "a/b"]);
    }

    #[test]
    fn test_arbitrary_keys_round_trip() {
        let store = temp_store("arbitrary");
        let keys = ["progress_jane.doe", "user settings", "progress_j@x.com", "ü", "", "100%"];
        for key in keys {
            store.write(key, "0.5").unwrap();
            assert_eq!(store.read(key).unwrap().as_deref(), Some("0.5"), "key {:?}", key);
        }
        let mut expected: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        expected.sort();
        assert_eq!(store.keys().unwrap(), expected);
    }

    #[test]
    fn test_encode_key() {
        assert_eq!(encode_key("progress_s-1"), "progress_s-1");
        assert_eq!(encode_key("jane.doe"), "jane%2Edoe");
        assert_eq!(encode_key("ü"), "%C3%BC");
        assert_eq!(encode_key(""), "%");
    }

    #[test]
    fn test_decode_rejects_foreign_stems() {
        assert_eq!(decode_key("jane%2Edoe").as_deref(), Some("jane.doe"));
        assert_eq!(decode_key("notes.v2"), None);
        assert_eq!(decode_key("bad%2"), None);
        assert_eq!(decode_key("lower%2edoe"), None);
    }

    #[test]
    fn test_keys_lists_json_files_only() {
        let store = temp_store("keys");
        store.write("attendance", "{}").unwrap();
        store.write("assignments", "[]").unwrap();
        std::fs::write(store.root().join("notes.txt"), "ignored").unwrap();
        assert_eq!(store.keys().unwrap(), vec!["assignments", "attendance"]);
    }
}
