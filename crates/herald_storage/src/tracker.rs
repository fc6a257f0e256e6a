//! Idempotency record for the publish path.

use crate::RunLock;
use herald_core::PublicationRecord;
use herald_error::{HeraldResult, JsonError, StorageError, StorageErrorKind};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// On-disk layout: `{ "posted": [ { slug, tweetId, postedAt }, ... ] }`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct TrackerFile {
    #[serde(default)]
    posted: Vec<PublicationRecord>,
}

/// Append-only set of published slugs backed by one JSON file.
///
/// A slug recorded here is never considered for publication again, across
/// process restarts. Loading never fails: a missing file starts empty, and a
/// corrupt one starts empty with a warning. Each append rewrites the whole
/// file through a temp file and rename.
#[derive(Debug)]
pub struct PublicationTracker {
    path: PathBuf,
    records: Vec<PublicationRecord>,
}

impl PublicationTracker {
    /// Load the tracker at `path`.
    pub async fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let records = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => match serde_json::from_str::<TrackerFile>(&raw) {
                Ok(file) => file.posted,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Tracker file is corrupt, starting empty");
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No tracker file yet");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Tracker file is unreadable, starting empty");
                Vec::new()
            }
        };

        tracing::debug!(count = records.len(), "Loaded publication records");
        Self { path, records }
    }

    /// Take the run lock at `lock_path`, then load the tracker at `path`.
    ///
    /// The records reflect everything appended by runs that released the
    /// lock before this one acquired it. Keep the returned lock alive until
    /// the last append.
    ///
    /// # Errors
    ///
    /// Fails with [`StorageErrorKind::LockHeld`] while another run holds the
    /// lock; the tracker file is not read in that case.
    pub async fn load_exclusive(
        path: impl Into<PathBuf>,
        lock_path: impl Into<PathBuf>,
    ) -> HeraldResult<(RunLock, Self)> {
        let lock = RunLock::acquire(lock_path)?;
        let tracker = Self::load(path).await;
        Ok((lock, tracker))
    }

    /// Whether `slug` has already been published.
    pub fn contains(&self, slug: &str) -> bool {
        self.records.iter().any(|r| r.slug() == slug)
    }

    /// All records in append order.
    pub fn records(&self) -> &[PublicationRecord] {
        &self.records
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record a publication and persist the full set.
    ///
    /// The in-memory set only changes once the file has been written.
    ///
    /// # Errors
    ///
    /// Fails with [`StorageErrorKind::AlreadyExists`] if the slug is already
    /// recorded, or with a write error if the file cannot be replaced.
    #[tracing::instrument(skip(self, record), fields(slug = %record.slug()))]
    pub async fn append(&mut self, record: PublicationRecord) -> HeraldResult<()> {
        if self.contains(record.slug()) {
            return Err(
                StorageError::new(StorageErrorKind::AlreadyExists(record.slug().to_string())).into(),
            );
        }

        let mut posted = self.records.clone();
        posted.push(record);
        let file = TrackerFile { posted };
        self.save(&file).await?;
        self.records = file.posted;

        tracing::info!(count = self.records.len(), "Recorded publication");
        Ok(())
    }

    async fn save(&self, file: &TrackerFile) -> HeraldResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        let body = serde_json::to_string_pretty(file)
            .map_err(|e| JsonError::new(format!("Failed to serialize tracker: {}", e)))?;

        let temp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, format!("{body}\n")).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &self.path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            )))
        })?;

        Ok(())
    }
}
