//! Raw File Storage.
//!
//! Provides basic file system operations for image and share files.
//!
//! # Security
//! - Ensures files are written atomically (write-sync-rename).
//! - Bounds reads, since whole images are processed in memory.

use super::StorageError;

#[cfg(feature = "std")]
use std::path::{Path, PathBuf};
#[cfg(feature = "std")]
use std::fs::{self, File};
#[cfg(feature = "std")]
use std::io::{Read, Write};

/// Largest file read into memory (1 GiB).
pub const MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Path of the share with x-coordinate `x`: `{prefix}_{x}.bmp`.
#[cfg(feature = "std")]
pub fn share_path<P: AsRef<Path>>(prefix: P, x: u8) -> PathBuf {
    let prefix = prefix.as_ref();
    let name = format!(
        "{}_{}.bmp",
        prefix.file_name().map(|n| n.to_string_lossy()).unwrap_or_default(),
        x
    );
    prefix.with_file_name(name)
}

/// Writes data to a file atomically.
#[cfg(feature = "std")]
pub fn write_atomic<P: AsRef<Path>>(path: P, data: &[u8]) -> Result<(), StorageError> {
    let path = path.as_ref();
    let filename = path.file_name().ok_or(StorageError::InvalidPath)?;
    let temp_path = path.with_file_name(format!("{}.tmp", filename.to_string_lossy()));

    let result = write_then_rename(&temp_path, path, data);
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

#[cfg(feature = "std")]
fn write_then_rename(temp_path: &Path, path: &Path, data: &[u8]) -> Result<(), StorageError> {
    let mut file = File::create(temp_path)?;
    file.write_all(data)?;
    file.sync_all()?;
    drop(file);

    // Rename to final path (atomic on POSIX)
    fs::rename(temp_path, path)?;
    Ok(())
}

/// Reads data from a file.
#[cfg(feature = "std")]
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, StorageError> {
    let mut file = File::open(path)?;
    let len = file.metadata()?.len();
    if len > MAX_FILE_SIZE {
        return Err(StorageError::TooLarge);
    }

    let mut buffer = Vec::with_capacity(len as usize);
    file.read_to_end(&mut buffer)?;

    Ok(buffer)
}

/// Creates `dir` and any missing parents.
#[cfg(feature = "std")]
pub fn ensure_dir<P: AsRef<Path>>(dir: P) -> Result<(), StorageError> {
    fs::create_dir_all(dir)?;
    Ok(())
}

#[cfg(feature = "std")]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atomic_write_read() {
        let dir = std::env::temp_dir().join("shamir_raster_test_storage");
        ensure_dir(&dir).unwrap();
        let path = dir.join("test_atomic.bin");

        let data = b"Hello World";
        write_atomic(&path, data).unwrap();

        assert!(path.is_file());
        assert!(!dir.join("test_atomic.bin.tmp").exists());
        let read_data = read_file(&path).unwrap();
        assert_eq!(read_data, data);

        fs::remove_file(&path).unwrap();
        let _ = fs::remove_dir(&dir);
    }

    #[test]
    fn test_failed_write_leaves_no_temp_file() {
        let dir = std::env::temp_dir().join("shamir_raster_test_failed_write");
        let _ = fs::remove_dir_all(&dir);
        ensure_dir(&dir).unwrap();

        // Renaming a file over a non-empty directory fails after the temp file is written.
        let target = dir.join("occupied");
        ensure_dir(target.join("child")).unwrap();

        assert!(write_atomic(&target, b"data").is_err());
        assert!(!dir.join("occupied.tmp").exists());
        assert!(target.is_dir());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_read_missing() {
        let path = std::env::temp_dir().join("shamir_raster_definitely_missing.bin");
        assert_eq!(read_file(path), Err(StorageError::NotFound));
    }

    #[test]
    fn test_share_path() {
        assert_eq!(share_path("out/share_I", 2), PathBuf::from("out/share_I_2.bmp"));
        assert_eq!(share_path("share", 1), PathBuf::from("share_1.bmp"));
    }
}
