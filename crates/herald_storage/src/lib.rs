//! Flat keyed persistence for herald.
//!
//! Everything herald persists is a plain file:
//!
//! - **Artifacts**: one JSON document per slug (`{blog_dir}/{slug}.json`),
//!   created with create-if-absent semantics so two racing writers cannot
//!   both win.
//! - **Publication tracker**: a single JSON document listing every slug that
//!   has been distributed, rewritten wholesale on each append.
//! - **Run lock**: a marker file held for the duration of a publish run.
//! - **Draw dataset**: the read-only grounding data, with a backup copy used
//!   when the primary is unusable.
//!
//! # Example
//!
//! ```rust,no_run
//! use herald_storage::{ArtifactStore, FileSystemArtifactStore, PublicationTracker};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = FileSystemArtifactStore::new("content/blog")?;
//! let tracker = PublicationTracker::load("scripts/x-posted.json").await;
//!
//! for artifact in store.list().await? {
//!     if !tracker.contains(artifact.slug()) {
//!         println!("next up: {}", artifact.slug());
//!         break;
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod draws;
mod filesystem;
mod lock;
mod tracker;

use herald_core::ContentArtifact;
use herald_error::HeraldResult;

pub use draws::DrawSource;
pub use filesystem::FileSystemArtifactStore;
pub use herald_error::{StorageError, StorageErrorKind};
pub use lock::RunLock;
pub use tracker::PublicationTracker;

/// Keyed store of generated artifacts.
///
/// The slug is the key. Artifacts are written once and never mutated.
#[async_trait::async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Check whether an artifact with this slug has been persisted.
    async fn exists(&self, slug: &str) -> HeraldResult<bool>;

    /// Persist a new artifact.
    ///
    /// # Errors
    ///
    /// Fails with [`StorageErrorKind::AlreadyExists`] when the slug is taken;
    /// the existing artifact is left untouched.
    async fn create(&self, artifact: &ContentArtifact) -> HeraldResult<()>;

    /// Load one artifact by slug.
    async fn load(&self, slug: &str) -> HeraldResult<ContentArtifact>;

    /// Every readable artifact, newest date first.
    ///
    /// Artifacts that fail to parse, or whose slug differs from their key,
    /// are logged and skipped.
    async fn list(&self) -> HeraldResult<Vec<ContentArtifact>>;
}
