//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt the ledger on failure.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{SaldoError, SaldoResult};

/// Write bytes to a file atomically (write to temp, then rename).
///
/// This ensures that the file is either completely written or not modified
/// at all, preventing corruption on crashes or power failures. A partial
/// write never reaches the target path.
pub fn write_atomic<P: AsRef<Path>>(path: P, bytes: &[u8]) -> SaldoResult<()> {
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                SaldoError::Write(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => path.with_extension(format!("{}.tmp", ext)),
        None => path.with_extension("tmp"),
    };

    let file = File::create(&temp_path)
        .map_err(|e| SaldoError::Write(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(bytes)
        .map_err(|e| SaldoError::Write(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| SaldoError::Write(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| SaldoError::Write(format!("Failed to sync data: {}", e)))?;

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| {
        // Try to clean up temp file if rename fails
        let _ = fs::remove_file(&temp_path);
        SaldoError::Write(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_and_read_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");

        write_atomic(&path, b"hello,world\n").unwrap();
        assert!(path.exists());
        assert_eq!(fs::read(&path).unwrap(), b"hello,world\n");
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");
        let temp_path = temp_dir.path().join("ledger.csv.tmp");

        write_atomic(&path, b"data\n").unwrap();

        assert!(path.exists());
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_write_replaces_existing_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");

        write_atomic(&path, b"first\n").unwrap();
        write_atomic(&path, b"second\n").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"second\n");
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("ledger.csv");

        write_atomic(&path, b"data\n").unwrap();
        assert!(path.exists());
    }
}
