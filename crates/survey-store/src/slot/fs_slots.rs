//! Filesystem slot backend: one `<key>.json` file per slot under a root

use crate::errors::{invalid_key, io_error, Result};
use crate::slot::atomic::atomic_write;
use crate::slot::SlotStorage;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Slots persisted as files, surviving process restarts
#[derive(Debug, Clone)]
pub struct FsSlots {
    root: PathBuf,
}

impl FsSlots {
    /// Use `root` as the slot directory; it is created on first write
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing `key`
    ///
    /// Keys are restricted to a filename-safe alphabet so a key can never
    /// escape the root directory.
    pub fn slot_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(invalid_key(key));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl SlotStorage for FsSlots {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            // Non-UTF-8 bytes are a corrupt payload, not an I/O failure
            Err(e) if e.kind() == ErrorKind::InvalidData => Ok(Some(String::new())),
            Err(e) => Err(io_error("read_slot", key, e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        atomic_write(key, &path, value.as_bytes())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error("remove_slot", key, e)),
        }
    }
}
