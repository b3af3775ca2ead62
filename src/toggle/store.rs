//! Preference stores.
//!
//! A [`PreferenceStore`] is a small persistent key/value mechanism scoped to
//! one browsing context or application. Operations are infallible by
//! contract: a store that can fail internally (like [`FileStore`]) logs the
//! failure and behaves as if the key were absent or the write were dropped.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::Error;

/// Persistent string key/value storage.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &mut T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) {
        (**self).remove(key)
    }
}

/// In-memory store. Lives as long as the value does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Store persisted as a JSON object in a single file.
///
/// The file is re-read on every access, so several processes sharing the
/// file see each other's writes (last write wins). A missing file is an
/// empty store. Unreadable or malformed files are logged at `warn` and
/// treated as empty; failed writes are logged and dropped.
///
/// # Example
///
/// ```rust
/// use tailwind_config_utils::{FileStore, PreferenceStore};
///
/// let dir = tempfile::tempdir().unwrap();
/// let mut store = FileStore::new(dir.path().join("prefs.json"));
/// store.set("theme", "dark");
/// assert_eq!(store.get("theme").as_deref(), Some("dark"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, Error> {
        match fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn load_or_empty(&self) -> BTreeMap<String, String> {
        self.load().unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "preference file unreadable; treating as empty");
            BTreeMap::new()
        })
    }

    fn update(&mut self, f: impl FnOnce(&mut BTreeMap<String, String>)) {
        let mut entries = self.load_or_empty();
        f(&mut entries);
        if let Err(e) = self.save(&entries) {
            warn!(path = %self.path.display(), error = %e, "failed to persist preference");
        }
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.load_or_empty().remove(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        });
    }

    fn remove(&mut self, key: &str) {
        self.update(|entries| {
            entries.remove(key);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_set_get_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("theme"), None);
        store.set("theme", "dark");
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
        store.set("theme", "light");
        assert_eq!(store.get("theme").as_deref(), Some("light"));
        store.remove("theme");
        assert!(store.is_empty());
    }

    #[test]
    fn test_memory_store_remove_missing_is_noop() {
        let mut store = MemoryStore::with_entry("other", "x");
        store.remove("theme");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn write_dark<S: PreferenceStore>(mut store: S) {
            store.set("theme", "dark");
        }

        let mut store = MemoryStore::new();
        write_dark(&mut store);
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("absent.json"));
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let mut first = FileStore::new(&path);
        first.set("theme", "light");
        first.set("accent", "cyan");

        let mut second = FileStore::new(&path);
        assert_eq!(second.get("theme").as_deref(), Some("light"));
        second.remove("theme");

        assert_eq!(first.get("theme"), None);
        assert_eq!(first.get("accent").as_deref(), Some("cyan"));
    }

    #[test]
    fn test_file_store_malformed_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json").unwrap();

        let mut store = FileStore::new(&path);
        assert_eq!(store.get("theme"), None);

        // A write replaces the malformed content.
        store.set("theme", "dark");
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_file_store_write_failure_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        // The store path is a directory, so writing it fails.
        let mut store = FileStore::new(dir.path());
        store.set("theme", "dark");
        assert_eq!(store.get("theme"), None);
    }
}
