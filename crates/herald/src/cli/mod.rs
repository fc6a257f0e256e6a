//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the herald binary.

mod commands;
mod generate;
mod publish;
mod status;

pub use commands::{Cli, Commands};
pub use generate::handle_generate;
pub use publish::handle_publish;
pub use status::{handle_check_data, handle_status};

use herald::{
    DrawSource, FileSystemArtifactStore, HeraldConfig, HeraldResult, PublicationCoordinator,
    TopicCatalog, TopicSelector,
};
use std::path::Path;
use std::sync::Arc;

/// Load configuration and topics, then wire a coordinator over the blog directory.
pub fn coordinator(
    config_path: Option<&Path>,
    topics_path: Option<&Path>,
) -> HeraldResult<PublicationCoordinator> {
    let config = HeraldConfig::load(config_path)?;
    let catalog = match topics_path {
        Some(path) => TopicCatalog::from_file(path)?,
        None => TopicCatalog::bundled()?,
    };
    let store = Arc::new(FileSystemArtifactStore::new(&config.paths.blog_dir)?);
    Ok(PublicationCoordinator::new(
        config,
        TopicSelector::new(catalog),
        store,
    ))
}

/// Dataset loader for the configured primary and backup files.
pub fn draw_source(config: &HeraldConfig) -> DrawSource {
    DrawSource::new(&config.paths.data, &config.paths.backup)
}
