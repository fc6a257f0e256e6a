//! Herald - scheduled lottery-analysis blog pipeline
//!
//! Herald writes Korean Lotto 6/45 analysis articles with a generative text
//! service and announces them on X. Two runs share a directory of JSON
//! artifacts:
//!
//! - **generate** picks a topic, grounds a prompt on the latest draws, asks
//!   Claude for an article, validates it and saves it under a unique slug.
//! - **publish** finds the newest article not yet announced, composes a post
//!   that fits X's weighted length budget, signs it with OAuth 1.0a, sends it
//!   and records the post id.
//!
//! Both runs are idempotent: rerunning them without new data does nothing.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use chrono::Local;
//! use herald::{
//!     AnthropicClient, DrawSource, FileSystemArtifactStore, HeraldConfig,
//!     PublicationCoordinator, TopicCatalog, TopicSelector,
//! };
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = HeraldConfig::load(None)?;
//! let draws = DrawSource::new(&config.paths.data, &config.paths.backup).load().await?;
//! let store = Arc::new(FileSystemArtifactStore::new(&config.paths.blog_dir)?);
//! let driver = AnthropicClient::from_env(config.generation.api_url.as_str())?;
//!
//! let coordinator = PublicationCoordinator::new(
//!     config,
//!     TopicSelector::new(TopicCatalog::bundled()?),
//!     store,
//! );
//! let outcome = coordinator.generate(&draws, &driver, Local::now().date_naive()).await?;
//! println!("{:?}", outcome);
//! # Ok(())
//! # }
//! ```
//!
//! # Cargo Features
//!
//! - `observability` - OpenTelemetry stdout span export
//!
//! # Architecture
//!
//! - `herald_error` - Error types
//! - `herald_core` - Data types (draws, topics, artifacts, records)
//! - `herald_retry` - Bounded retry with backoff and deadlines
//! - `herald_storage` - Artifact store, publication tracker, run lock, dataset loader
//! - `herald_models` - Anthropic Messages API driver
//! - `herald_social` - X post composition, OAuth 1.0a signing and posting
//! - `herald_pipeline` - Topic selection, validation and run coordination
//!
//! This crate (`herald`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use herald_core::*;
pub use herald_error::*;
pub use herald_models::*;
pub use herald_pipeline::*;
pub use herald_retry::*;
pub use herald_social::*;
pub use herald_storage::*;
