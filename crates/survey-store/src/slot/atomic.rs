//! Atomic replace of a slot file
//!
//! Writes go to a sibling temp file which is synced and then renamed over
//! the target, so readers see either the old or the new value, never a
//! prefix.

use crate::errors::{io_error, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn temp_path_for(target: &Path) -> PathBuf {
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    target.with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
}

/// Atomically replace `target` with `content`, creating parent directories
pub fn atomic_write(key: &str, target: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error("create_slot_dir", key, e))?;
    }

    let temp = temp_path_for(target);
    let write = || -> std::io::Result<()> {
        let mut file = File::create(&temp)?;
        file.write_all(content)?;
        file.sync_all()?;
        fs::rename(&temp, target)
    };

    write().map_err(|e| {
        // Best effort: a leftover temp file is harmless but untidy
        let _ = fs::remove_file(&temp);
        io_error("write_slot", key, e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_replaces_content() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("responses.json");

        atomic_write("responses", &target, b"[]").unwrap();
        atomic_write("responses", &target, b"[1]").unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"[1]");
    }

    #[test]
    fn test_atomic_write_creates_parent() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("nested").join("responses.json");

        atomic_write("responses", &target, b"[]").unwrap();

        assert!(target.exists());
    }

    #[test]
    fn test_no_temp_files_left_behind() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("responses.json");

        atomic_write("responses", &target, b"[]").unwrap();

        let leftovers = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .count();
        assert_eq!(leftovers, 0);
    }
}
