//! Single-writer run lock.

use herald_error::{HeraldResult, StorageError, StorageErrorKind};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Marker file proving that one run owns the publish path.
///
/// Acquisition creates the file exclusively; the file is removed when the
/// lock is dropped. A lock left behind by a crashed run must be removed by
/// the operator.
#[derive(Debug)]
pub struct RunLock {
    path: PathBuf,
}

impl RunLock {
    /// Take the lock at `path`.
    ///
    /// # Errors
    ///
    /// Fails with [`StorageErrorKind::LockHeld`] if the file already exists.
    pub fn acquire(path: impl Into<PathBuf>) -> HeraldResult<Self> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::AlreadyExists {
                    StorageError::new(StorageErrorKind::LockHeld(path.display().to_string()))
                } else {
                    StorageError::new(StorageErrorKind::FileWrite(format!(
                        "{}: {}",
                        path.display(),
                        e
                    )))
                }
            })?;

        // Owner pid, for the operator clearing a stale lock.
        if let Err(e) = writeln!(file, "{}", std::process::id()) {
            tracing::warn!(path = %path.display(), error = %e, "Failed to write lock owner");
        }

        tracing::debug!(path = %path.display(), "Acquired run lock");
        Ok(Self { path })
    }

    /// Location of the lock file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for RunLock {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => tracing::debug!(path = %self.path.display(), "Released run lock"),
            Err(e) => tracing::warn!(path = %self.path.display(), error = %e, "Failed to release run lock"),
        }
    }
}
