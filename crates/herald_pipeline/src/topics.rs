//! Topic catalogue.

use herald_core::TopicConfig;
use herald_error::{ConfigError, HeraldResult};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Identifier of the topic forced ahead of rotation once per round.
pub const PRIORITY_TOPIC_ID: &str = "draw-analysis";

const BUNDLED_TOPICS: &str = include_str!("../topics.toml");

#[derive(Debug, Deserialize)]
struct TopicsFile {
    #[serde(default)]
    topics: Vec<TopicConfig>,
}

/// The validated set of topics.
///
/// Always contains the priority topic and at least one rotated topic, with
/// unique identifiers.
#[derive(Debug, Clone)]
pub struct TopicCatalog {
    topics: Vec<TopicConfig>,
    priority: usize,
}

impl TopicCatalog {
    /// Build a catalogue, checking its invariants.
    pub fn new(topics: Vec<TopicConfig>) -> HeraldResult<Self> {
        {
            let mut seen = HashSet::new();
            for topic in &topics {
                if !seen.insert(topic.id().as_str()) {
                    return Err(
                        ConfigError::new(format!("Duplicate topic id: {}", topic.id())).into(),
                    );
                }
            }
        }

        let Some(priority) = topics.iter().position(|t| t.id() == PRIORITY_TOPIC_ID) else {
            return Err(ConfigError::new(format!(
                "Topic catalogue is missing the priority topic '{}'",
                PRIORITY_TOPIC_ID
            ))
            .into());
        };
        if topics.len() < 2 {
            return Err(ConfigError::new("Topic catalogue has no topics to rotate").into());
        }

        Ok(Self { topics, priority })
    }

    /// The topics shipped with herald.
    pub fn bundled() -> HeraldResult<Self> {
        Self::from_toml_str(BUNDLED_TOPICS)
    }

    /// Parse a `[[topics]]` TOML document.
    pub fn from_toml_str(raw: &str) -> HeraldResult<Self> {
        let file: TopicsFile = toml::from_str(raw)
            .map_err(|e| ConfigError::new(format!("Failed to parse topics: {}", e)))?;
        Self::new(file.topics)
    }

    /// Read a `[[topics]]` TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> HeraldResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(format!("Failed to read topics file {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&raw)
    }

    /// Every topic in file order.
    pub fn topics(&self) -> &[TopicConfig] {
        &self.topics
    }

    /// The priority topic.
    pub fn priority(&self) -> &TopicConfig {
        &self.topics[self.priority]
    }

    /// Non-priority topics in file order.
    pub fn rotation(&self) -> Vec<&TopicConfig> {
        self.topics
            .iter()
            .filter(|t| t.id() != PRIORITY_TOPIC_ID)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic(id: &str) -> TopicConfig {
        TopicConfig::new(id, "t", "p", "c", vec![])
    }

    #[test]
    fn bundled_catalogue_is_valid() {
        let catalog = TopicCatalog::bundled().unwrap();
        assert_eq!(catalog.priority().id(), PRIORITY_TOPIC_ID);
        assert!(catalog.rotation().iter().all(|t| t.id() != PRIORITY_TOPIC_ID));
        assert_eq!(catalog.rotation().len(), catalog.topics().len() - 1);
    }

    #[test]
    fn rejects_missing_priority_topic() {
        assert!(TopicCatalog::new(vec![topic("a"), topic("b")]).is_err());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let topics = vec![topic(PRIORITY_TOPIC_ID), topic("a"), topic("a")];
        assert!(TopicCatalog::new(topics).is_err());
    }

    #[test]
    fn rejects_catalogue_without_rotation() {
        assert!(TopicCatalog::new(vec![topic(PRIORITY_TOPIC_ID)]).is_err());
    }
}
