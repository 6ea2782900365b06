//! Durable key-value preference storage.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::debug;

/// Origin-scoped durable string storage.
///
/// Reads and writes are infallible from the caller's view: an unavailable
/// backing store reads as empty and swallows writes. The components built on
/// this never surface a storage problem to the user; they degrade to
/// session-only behavior.
pub trait PreferenceStore {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, overwriting any prior value.
    fn set(&mut self, key: &str, value: &str);

    /// Removes `key` if present.
    fn remove(&mut self, key: &str);

    /// Returns whether `key` is present at all.
    ///
    /// This is the presence test (not a value test) that decides whether an
    /// explicit preference exists.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// In-memory [`PreferenceStore`] for tests and session-only embedders.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
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

/// A [`PreferenceStore`] standing in for unavailable storage.
///
/// Every read returns `None` and every write is ignored, which is exactly
/// how the components treat a platform with persistence disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

impl PreferenceStore for NullStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, _key: &str, _value: &str) {}

    fn remove(&mut self, _key: &str) {}
}

/// File-backed [`PreferenceStore`] holding a flat JSON string map.
///
/// The file is read once at open and rewritten after each mutation. I/O
/// failures degrade silently: an unreadable file opens as an empty store and
/// a failed write keeps the in-memory value for the rest of the session.
/// Failures are logged at debug level for diagnostics only.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`, loading any existing entries.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = std::fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self { path, entries }
    }

    fn flush(&self) {
        let serialized = match serde_json::to_string_pretty(&self.entries) {
            Ok(serialized) => serialized,
            Err(err) => {
                debug!(error = %err, "preference store serialization failed");
                return;
            }
        };
        if let Err(err) = std::fs::write(&self.path, serialized) {
            debug!(path = %self.path.display(), error = %err, "preference store write failed");
        }
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush();
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.flush();
        }
    }
}
