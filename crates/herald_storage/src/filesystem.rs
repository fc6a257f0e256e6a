//! Filesystem-backed artifact store.

use crate::ArtifactStore;
use herald_core::ContentArtifact;
use herald_error::{HeraldResult, JsonError, StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Stores each artifact as `{base_path}/{slug}.json`.
///
/// Writes go to a hidden temp file unique to the writer and are then
/// hard-linked into place, which fails if the target exists. The final file
/// therefore appears complete or not at all, and only one of several
/// concurrent creators wins.
#[derive(Debug, Clone)]
pub struct FileSystemArtifactStore {
    base_path: PathBuf,
}

impl FileSystemArtifactStore {
    /// Create a store rooted at `base_path`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> HeraldResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::debug!(path = %base_path.display(), "Opened artifact store");
        Ok(Self { base_path })
    }

    /// Directory holding the artifacts.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of the artifact file for `slug`.
    fn path_for(&self, slug: &str) -> HeraldResult<PathBuf> {
        let valid = !slug.is_empty()
            && !slug.starts_with('.')
            && slug
                .chars()
                .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.');
        if !valid {
            return Err(StorageError::new(StorageErrorKind::InvalidKey(slug.to_string())).into());
        }
        Ok(self.base_path.join(format!("{slug}.json")))
    }

    async fn parse(path: &Path) -> HeraldResult<ContentArtifact> {
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::new(StorageErrorKind::NotFound(path.display().to_string()))
            } else {
                StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            }
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            StorageError::new(StorageErrorKind::Malformed {
                path: path.display().to_string(),
                message: e.to_string(),
            })
            .into()
        })
    }
}

#[async_trait::async_trait]
impl ArtifactStore for FileSystemArtifactStore {
    async fn exists(&self, slug: &str) -> HeraldResult<bool> {
        let path = self.path_for(slug)?;
        tokio::fs::try_exists(&path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
            .into()
        })
    }

    #[tracing::instrument(skip(self, artifact), fields(slug = %artifact.slug()))]
    async fn create(&self, artifact: &ContentArtifact) -> HeraldResult<()> {
        let path = self.path_for(artifact.slug())?;
        let body = serde_json::to_string_pretty(artifact)
            .map_err(|e| JsonError::new(format!("Failed to serialize artifact: {}", e)))?;

        let temp_path = self.base_path.join(format!(
            ".{}.{}.{}.json.tmp",
            artifact.slug(),
            std::process::id(),
            TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        tokio::fs::write(&temp_path, body.as_bytes()).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        let linked = tokio::fs::hard_link(&temp_path, &path).await;
        if let Err(e) = tokio::fs::remove_file(&temp_path).await {
            tracing::warn!(path = %temp_path.display(), error = %e, "Failed to remove temp file");
        }

        match linked {
            Ok(()) => {
                tracing::info!(path = %path.display(), "Saved artifact");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                Err(StorageError::new(StorageErrorKind::AlreadyExists(artifact.slug().to_string())).into())
            }
            Err(e) => Err(StorageError::new(StorageErrorKind::FileWrite(format!(
                "link {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
            .into()),
        }
    }

    async fn load(&self, slug: &str) -> HeraldResult<ContentArtifact> {
        let path = self.path_for(slug)?;
        Self::parse(&path).await
    }

    #[tracing::instrument(skip(self), fields(path = %self.base_path.display()))]
    async fn list(&self) -> HeraldResult<Vec<ContentArtifact>> {
        let mut entries = tokio::fs::read_dir(&self.base_path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                self.base_path.display(),
                e
            )))
        })?;

        let mut artifacts = Vec::new();
        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    return Err(StorageError::new(StorageErrorKind::FileRead(format!(
                        "{}: {}",
                        self.base_path.display(),
                        e
                    )))
                    .into());
                }
            };

            let path = entry.path();
            let is_artifact = path.extension().is_some_and(|ext| ext == "json")
                && !path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with('.'));
            if !is_artifact {
                continue;
            }

            match Self::parse(&path).await {
                Ok(artifact) if path.file_stem().is_some_and(|stem| stem == artifact.slug().as_str()) => {
                    artifacts.push(artifact)
                }
                Ok(artifact) => tracing::warn!(
                    path = %path.display(),
                    slug = %artifact.slug(),
                    "Skipping artifact whose slug does not match its file name"
                ),
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "Skipping malformed artifact"),
            }
        }

        artifacts.sort_by(|a, b| b.date().cmp(a.date()).then_with(|| a.slug().cmp(b.slug())));
        tracing::debug!(count = artifacts.len(), "Listed artifacts");
        Ok(artifacts)
    }
}
