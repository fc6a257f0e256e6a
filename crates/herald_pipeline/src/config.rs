//! Layered configuration.
//!
//! Sources, later overriding earlier:
//! 1. Bundled defaults (`herald.toml` shipped with this crate)
//! 2. `~/.config/herald/herald.toml`
//! 3. `./herald.toml`
//! 4. An explicit file passed by the caller
//!
//! Only the explicit file is required to exist.

use herald_error::{ConfigError, HeraldResult};
use herald_retry::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../herald.toml");

/// Filesystem locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Primary draw dataset
    pub data: PathBuf,
    /// Backup draw dataset
    pub backup: PathBuf,
    /// Directory holding one JSON file per artifact
    pub blog_dir: PathBuf,
    /// Publication tracker file
    pub tracking_file: PathBuf,
    /// Lock file held while publishing
    pub lock_file: PathBuf,
}

/// Generation service settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSettings {
    /// Model identifier
    pub model: String,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Messages API endpoint
    pub api_url: String,
    /// Deadline for one generation attempt, in seconds
    pub timeout_secs: u64,
}

impl GenerationSettings {
    /// Deadline for one generation attempt.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Distribution endpoint and message layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionConfig {
    /// Create-post endpoint
    pub endpoint: String,
    /// Deadline for one post attempt, in seconds
    pub timeout_secs: u64,
    /// Site the posts link back to
    pub site_url: String,
    /// Weighted character budget of one post
    pub max_weighted_chars: usize,
    /// Hashtag carried by every post
    pub fixed_hashtag: String,
    /// Leading emoji per artifact category
    #[serde(default)]
    pub category_emoji: BTreeMap<String, String>,
}

impl DistributionConfig {
    /// Deadline for one post attempt.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Content acceptance rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Minimum body length in characters
    pub min_length: usize,
    /// Acceptable disclaimer phrasings; at least one must appear
    pub disclaimer_markers: Vec<String>,
    /// Section heading marker; must appear at least once
    pub heading_marker: String,
}

/// Complete herald configuration.
///
/// # Example
///
/// ```no_run
/// use herald_pipeline::HeraldConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = HeraldConfig::load(None)?;
/// println!("posting to {}", config.distribution.endpoint);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeraldConfig {
    /// Filesystem locations
    pub paths: PathsConfig,
    /// Generation service settings
    pub generation: GenerationSettings,
    /// Retry policy shared by generation and distribution
    #[serde(default)]
    pub retry: RetryPolicy,
    /// Distribution settings
    pub distribution: DistributionConfig,
    /// Content acceptance rules
    pub validation: ValidationConfig,
}

impl HeraldConfig {
    /// The bundled defaults alone.
    pub fn bundled() -> HeraldResult<Self> {
        Self::build(config::Config::builder().add_source(Self::defaults()))
    }

    /// Load with precedence: explicit file > ./herald.toml > home directory > bundled.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> HeraldResult<Self> {
        debug!("Loading configuration");

        let mut builder = config::Config::builder().add_source(Self::defaults());

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/herald/herald.toml");
            builder = builder.add_source(config::File::from(home_config).required(false));
        }

        builder = builder.add_source(config::File::with_name("herald").required(false));

        if let Some(path) = explicit {
            debug!(path = %path.display(), "Adding explicit configuration file");
            builder = builder.add_source(config::File::from(path).required(true));
        }

        Self::build(builder)
    }

    fn defaults() -> config::File<config::FileSourceString, config::FileFormat> {
        config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml)
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> HeraldResult<Self> {
        builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)).into())
    }
}
