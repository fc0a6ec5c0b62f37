//! Atomic JSON file operations.
//!
//! Provides a thin layer for safe access to the small JSON files the client
//! persists (token, history).

use contentai_core::ContentAiError;
use serde::{Serialize, de::DeserializeOwned};
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Errors that can occur during atomic JSON operations.
#[derive(Debug)]
pub enum AtomicJsonError {
    /// File I/O error.
    IoError(std::io::Error),
    /// JSON serialization/deserialization error.
    JsonError(serde_json::Error),
    /// File locking error.
    LockError(String),
}

impl std::fmt::Display for AtomicJsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AtomicJsonError::IoError(e) => write!(f, "I/O error: {}", e),
            AtomicJsonError::JsonError(e) => write!(f, "JSON error: {}", e),
            AtomicJsonError::LockError(e) => write!(f, "Lock error: {}", e),
        }
    }
}

impl std::error::Error for AtomicJsonError {}

impl From<std::io::Error> for AtomicJsonError {
    fn from(e: std::io::Error) -> Self {
        AtomicJsonError::IoError(e)
    }
}

impl From<serde_json::Error> for AtomicJsonError {
    fn from(e: serde_json::Error) -> Self {
        AtomicJsonError::JsonError(e)
    }
}

impl From<AtomicJsonError> for ContentAiError {
    fn from(e: AtomicJsonError) -> Self {
        match e {
            AtomicJsonError::IoError(e) => e.into(),
            AtomicJsonError::JsonError(e) => e.into(),
            AtomicJsonError::LockError(message) => ContentAiError::io(message),
        }
    }
}

/// A handle to a JSON file that is replaced atomically on every write.
///
/// Provides:
/// - **Atomicity**: writes go to a temp file which is renamed over the target
/// - **Durability**: explicit fsync before rename
/// - **Isolation**: writers hold an exclusive lock while replacing the file
pub struct AtomicJsonFile<T> {
    path: PathBuf,
    private: bool,
    _phantom: PhantomData<T>,
}

impl<T> AtomicJsonFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            private: false,
            _phantom: PhantomData,
        }
    }

    /// Restricts the file to its owner (0600) on Unix.
    pub fn private(mut self) -> Self {
        self.private = true;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and deserializes the file.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(T))`: Successfully loaded and deserialized
    /// - `Ok(None)`: File doesn't exist or is empty
    /// - `Err`: Failed to read or parse the file
    pub fn load(&self) -> Result<Option<T>, AtomicJsonError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        let data: T = serde_json::from_str(&content)?;
        Ok(Some(data))
    }

    /// Saves data to the file atomically.
    ///
    /// Concurrent writers (including other processes) are serialized by an
    /// exclusive lock on a sibling `.lock` file.
    pub fn save(&self, data: &T) -> Result<(), AtomicJsonError> {
        let _lock = FileLock::acquire(&self.path)?;

        let json = serde_json::to_string_pretty(data)?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(json.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        #[cfg(unix)]
        if self.private {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp_path, fs::Permissions::from_mode(0o600))?;
        }

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Deletes the file. A missing file is not an error.
    pub fn remove(&self) -> Result<(), AtomicJsonError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn temp_path(&self) -> Result<PathBuf, AtomicJsonError> {
        let parent = self.path.parent().ok_or_else(|| {
            AtomicJsonError::IoError(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path has no parent directory",
            ))
        })?;

        let file_name = self.path.file_name().ok_or_else(|| {
            AtomicJsonError::IoError(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path has no file name",
            ))
        })?;

        Ok(parent.join(format!(".{}.tmp", file_name.to_string_lossy())))
    }
}

/// Exclusive lock on `<file>.lock`, released when the handle closes.
///
/// The lock file itself is left in place; deleting it would let a later
/// writer lock a fresh inode while an earlier one still holds the old.
struct FileLock {
    #[allow(dead_code)]
    file: File,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self, AtomicJsonError> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        fs2::FileExt::lock_exclusive(&file)
            .map_err(|e| AtomicJsonError::LockError(format!("Failed to acquire lock: {}", e)))?;

        Ok(FileLock { file })
    }
}
