//! Session storage slots: one string value per key.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::{Error, Result};

/// Keyed slot storage for serialized session payloads.
pub trait SessionStorage: Send + Sync {
    /// Read a slot; `None` when empty.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write a slot, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Empty a slot. Clearing an empty slot is not an error.
    fn clear(&self, key: &str) -> Result<()>;
}

impl<T: SessionStorage + ?Sized> SessionStorage for Arc<T> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }

    fn clear(&self, key: &str) -> Result<()> {
        (**self).clear(key)
    }
}

/// Process-local storage, for tests and embedding.
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemorySessionStorage {
    /// Create empty storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemorySessionStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(slots.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<()> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.remove(key);
        Ok(())
    }
}

/// One `<key>.json` file per slot under a directory.
#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    dir: PathBuf,
}

impl FileSessionStorage {
    /// Create storage rooted at `dir`; the directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the slot files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(Error::Session(format!("Invalid session key {key:?}")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl SessionStorage for FileSessionStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key)?;
        match fs_err::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::io(e, Some(path))),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        fs_err::create_dir_all(&self.dir).map_err(|e| Error::io(e, Some(self.dir.clone())))?;
        fs_err::write(&path, value).map_err(|e| Error::io(e, Some(path)))
    }

    fn clear(&self, key: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        match fs_err::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::io(e, Some(path))),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn memory_slots_round_trip() {
        let storage = MemorySessionStorage::new();
        assert_eq!(storage.read("a").unwrap(), None);
        storage.write("a", "{}").unwrap();
        assert_eq!(storage.read("a").unwrap().as_deref(), Some("{}"));
        storage.clear("a").unwrap();
        storage.clear("a").unwrap();
        assert_eq!(storage.read("a").unwrap(), None);
    }

    #[test]
    fn file_slots_live_in_directory() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileSessionStorage::new(dir.path().join("sessions"));
        assert_eq!(storage.dir(), dir.path().join("sessions").as_path());

        assert_eq!(storage.read("event_admin_session").unwrap(), None);
        storage.write("event_admin_session", r#"{"user":"a"}"#).unwrap();
        assert!(dir.path().join("sessions/event_admin_session.json").exists());
        assert_eq!(
            storage.read("event_admin_session").unwrap().as_deref(),
            Some(r#"{"user":"a"}"#)
        );

        storage.clear("event_admin_session").unwrap();
        storage.clear("event_admin_session").unwrap();
        assert_eq!(storage.read("event_admin_session").unwrap(), None);
    }

    #[test]
    fn file_keys_cannot_escape_directory() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileSessionStorage::new(dir.path());
        assert!(matches!(storage.write("../x", "{}"), Err(Error::Session(_))));
        assert!(matches!(storage.read(""), Err(Error::Session(_))));
    }
}
