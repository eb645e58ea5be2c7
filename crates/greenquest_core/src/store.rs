//! Key-value persistence store
//!
//! Both persisted aggregates (task list, history) are JSON blobs under
//! fixed string keys. Components receive the store at construction so
//! tests can swap in MemoryStore.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// String-keyed blob store consumed by the tracker.
///
/// `get` returns None for missing keys; `set` overwrites unconditionally.
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> std::io::Result<()>;
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    map: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> std::io::Result<()> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store: one `<key>.json` file per key under a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create with the default data directory.
    pub fn new() -> Self {
        Self { dir: default_data_dir() }
    }

    /// Create with a custom directory.
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)
    }
}

/// Default on-disk location: `$XDG_DATA_HOME/greenquest` (or platform
/// equivalent), falling back to a hidden directory in cwd.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("greenquest"))
        .unwrap_or_else(|| PathBuf::from(".greenquest"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_get_set() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("tasks"), None);

        store.set("tasks", "[]").unwrap();
        assert_eq!(store.get("tasks"), Some("[]".to_string()));

        store.set("tasks", "[1]").unwrap();
        assert_eq!(store.get("tasks"), Some("[1]".to_string()));
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::with_dir(dir.path().to_path_buf());

        assert_eq!(store.get("history"), None);
        store.set("history", r#"[{"date":"6/1/2024","completed":2}]"#).unwrap();
        assert_eq!(
            store.get("history"),
            Some(r#"[{"date":"6/1/2024","completed":2}]"#.to_string())
        );
    }

    #[test]
    fn test_file_store_creates_missing_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let mut store = FileStore::with_dir(nested);
        store.set("tasks", "[]").unwrap();
        assert_eq!(store.get("tasks"), Some("[]".to_string()));
    }
}
