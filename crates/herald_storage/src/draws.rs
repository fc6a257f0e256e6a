//! Draw dataset loading with backup fallback.

use herald_core::DrawDataset;
use herald_error::{DataError, DataErrorKind, HeraldResult};
use std::path::{Path, PathBuf};

/// Loads the draw history from a primary file, falling back to a backup.
///
/// Either file is rejected when it cannot be read, does not parse, or holds
/// no draws. Draws are returned newest first regardless of file order.
#[derive(Debug, Clone)]
pub struct DrawSource {
    primary: PathBuf,
    backup: PathBuf,
}

impl DrawSource {
    /// Create a source reading `primary`, then `backup` if that fails.
    pub fn new(primary: impl Into<PathBuf>, backup: impl Into<PathBuf>) -> Self {
        Self {
            primary: primary.into(),
            backup: backup.into(),
        }
    }

    /// Primary dataset path.
    pub fn primary(&self) -> &Path {
        &self.primary
    }

    /// Backup dataset path.
    pub fn backup(&self) -> &Path {
        &self.backup
    }

    /// Load the dataset.
    ///
    /// # Errors
    ///
    /// Fails with [`DataErrorKind::Exhausted`] when neither file is usable.
    #[tracing::instrument(skip(self), fields(primary = %self.primary.display()))]
    pub async fn load(&self) -> HeraldResult<DrawDataset> {
        match Self::read(&self.primary).await {
            Ok(dataset) => {
                tracing::debug!(draws = dataset.len(), "Loaded primary dataset");
                return Ok(dataset);
            }
            Err(e) => tracing::warn!(error = %e, "Primary dataset unusable, trying backup"),
        }

        match Self::read(&self.backup).await {
            Ok(dataset) => {
                tracing::info!(
                    backup = %self.backup.display(),
                    draws = dataset.len(),
                    "Loaded backup dataset"
                );
                Ok(dataset)
            }
            Err(e) => {
                tracing::error!(error = %e, "Backup dataset unusable");
                Err(DataError::new(DataErrorKind::Exhausted {
                    primary: self.primary.display().to_string(),
                    backup: self.backup.display().to_string(),
                })
                .into())
            }
        }
    }

    async fn read(path: &Path) -> Result<DrawDataset, DataError> {
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            DataError::new(DataErrorKind::Unreadable {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        })?;

        let dataset: DrawDataset = serde_json::from_str(&raw).map_err(|e| {
            DataError::new(DataErrorKind::Parse {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        })?;

        if dataset.is_empty() {
            return Err(DataError::new(DataErrorKind::Empty(path.display().to_string())));
        }
        Ok(dataset.normalized())
    }
}
