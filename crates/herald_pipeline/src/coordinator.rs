//! The two pipeline runs: generate (write path) and publish.

use crate::{ArtifactValidator, HeraldConfig, Selection, TopicSelector, build_prompt};
use chrono::{DateTime, NaiveDate, Utc};
use derive_getters::Getters;
use herald_core::{ContentArtifact, DrawDataset, GenerateRequest, PublicationRecord, derive_description};
use herald_error::{
    GenerationError, GenerationErrorKind, HeraldErrorKind, HeraldResult, StorageErrorKind,
};
use herald_models::GenerationDriver;
use herald_retry::{with_retry, with_timeout};
use herald_social::{Distributor, TweetComposer, weighted_len};
use herald_storage::{ArtifactStore, PublicationTracker};
use std::sync::Arc;
use tracing::{info, instrument, warn};

const GENERATION_LABEL: &str = "Claude API";
const DISTRIBUTION_LABEL: &str = "X API";

/// Result of a generate run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// A new artifact was validated and persisted.
    Generated(ContentArtifact),
    /// The selected slug already exists; nothing was generated.
    AlreadyExists {
        /// The slug that was found
        slug: String,
    },
}

/// Result of a publish run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// The newest unpublished artifact was posted and recorded.
    Published(PublicationRecord),
    /// Every stored artifact has already been published.
    NothingToPublish,
}

/// What a generate run would do, without calling the service.
#[derive(Debug, Clone, Getters)]
pub struct GenerationPlan {
    /// Selected topic and its rendering
    selection: Selection,
    /// Whether the slug is already persisted
    exists: bool,
    /// Full prompt that would be sent
    prompt: String,
}

/// The message a publish run would send.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct PostPreview {
    /// Artifact slug
    slug: String,
    /// Composed post text
    text: String,
    /// Weighted length of `text`
    weight: usize,
}

/// Publication state of one stored artifact.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct StatusEntry {
    /// Artifact slug
    slug: String,
    /// Artifact creation day
    date: NaiveDate,
    /// Tracker record, when published
    record: Option<PublicationRecord>,
}

/// Every stored artifact, newest first, with its publication state.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct StatusReport {
    /// One entry per readable artifact
    entries: Vec<StatusEntry>,
}

impl StatusReport {
    /// Slug the next publish run would pick.
    pub fn next_candidate(&self) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.record.is_none())
            .map(|entry| entry.slug.as_str())
    }

    /// Number of published artifacts.
    pub fn published(&self) -> usize {
        self.entries.iter().filter(|e| e.record.is_some()).count()
    }
}

/// Orchestrates the generate and publish runs over a shared artifact store.
///
/// The two runs are independent; the store is their only handoff point.
/// Existence of a slug in the store, and its membership in the tracker, are
/// the idempotency checks that make reruns no-ops.
pub struct PublicationCoordinator {
    config: HeraldConfig,
    selector: TopicSelector,
    validator: ArtifactValidator,
    composer: TweetComposer,
    store: Arc<dyn ArtifactStore>,
}

impl PublicationCoordinator {
    /// Coordinator over `store`, configured by `config`.
    pub fn new(config: HeraldConfig, selector: TopicSelector, store: Arc<dyn ArtifactStore>) -> Self {
        let distribution = &config.distribution;
        let composer = distribution.category_emoji.iter().fold(
            TweetComposer::new(distribution.site_url.as_str())
                .with_max_weight(distribution.max_weighted_chars)
                .with_fixed_hashtag(distribution.fixed_hashtag.as_str()),
            |composer, (category, emoji)| composer.with_emoji(category.as_str(), emoji.as_str()),
        );
        let validator = ArtifactValidator::new(config.validation.clone());

        Self {
            config,
            selector,
            validator,
            composer,
            store,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &HeraldConfig {
        &self.config
    }

    /// The message layout in use.
    pub fn composer(&self) -> &TweetComposer {
        &self.composer
    }

    async fn select(&self, draws: &DrawDataset, today: NaiveDate) -> HeraldResult<Selection> {
        let priority_slug = self.selector.priority_slug(draws)?;
        let priority_exists = self.store.exists(&priority_slug).await?;
        self.selector.select(draws, priority_exists, today)
    }

    /// Select a topic and report what would be generated.
    pub async fn plan_generation(
        &self,
        draws: &DrawDataset,
        today: NaiveDate,
    ) -> HeraldResult<GenerationPlan> {
        let selection = self.select(draws, today).await?;
        let exists = self.store.exists(selection.slug()).await?;
        let prompt = build_prompt(draws, selection.prompt());
        Ok(GenerationPlan {
            selection,
            exists,
            prompt,
        })
    }

    /// Write path: select, generate, validate, persist.
    ///
    /// Returns [`GenerateOutcome::AlreadyExists`] without contacting the
    /// service when the selected slug is already stored. A body that fails
    /// validation is never persisted.
    #[instrument(skip_all, fields(driver = driver.provider_name(), %today))]
    pub async fn generate(
        &self,
        draws: &DrawDataset,
        driver: &dyn GenerationDriver,
        today: NaiveDate,
    ) -> HeraldResult<GenerateOutcome> {
        let selection = self.select(draws, today).await?;
        let slug = selection.slug().clone();

        if self.store.exists(&slug).await? {
            info!(slug = %slug, "Artifact already exists, skipping");
            return Ok(GenerateOutcome::AlreadyExists { slug });
        }

        info!(slug = %slug, topic = %selection.topic().id(), title = %selection.title(), "Generating article");

        let request = GenerateRequest::builder()
            .model(self.config.generation.model.as_str())
            .max_tokens(self.config.generation.max_tokens)
            .prompt(build_prompt(draws, selection.prompt()))
            .build()
            .map_err(|e| GenerationError::new(GenerationErrorKind::Builder(e.to_string())))?;

        let deadline = self.config.generation.timeout();
        let request = &request;
        let response = with_retry(&self.config.retry, GENERATION_LABEL, || async move {
            with_timeout(deadline, GENERATION_LABEL, driver.generate(request)).await
        })
        .await?;

        let body = response.into_text()?;

        if let Err(e) = self.validator.validate(&body) {
            for violation in e.violations() {
                warn!(slug = %slug, "Validation failed: {}", violation);
            }
            return Err(e.into());
        }

        let artifact = ContentArtifact::builder()
            .slug(slug.as_str())
            .title(selection.title().as_str())
            .description(derive_description(&body, selection.title()))
            .body(body)
            .date(today)
            .category(selection.topic().category().as_str())
            .tags(selection.tags().clone())
            .build()
            .map_err(|e| GenerationError::new(GenerationErrorKind::Builder(e.to_string())))?;

        match self.store.create(&artifact).await {
            Ok(()) => {
                info!(slug = %slug, chars = artifact.body().chars().count(), "Artifact saved");
                Ok(GenerateOutcome::Generated(artifact))
            }
            Err(e) if is_already_exists(&e) => {
                warn!(slug = %slug, "Artifact was created concurrently, keeping the existing one");
                Ok(GenerateOutcome::AlreadyExists { slug })
            }
            Err(e) => Err(e),
        }
    }

    /// The newest stored artifact the tracker has not seen.
    pub async fn next_unpublished(
        &self,
        tracker: &PublicationTracker,
    ) -> HeraldResult<Option<ContentArtifact>> {
        Ok(self
            .store
            .list()
            .await?
            .into_iter()
            .find(|artifact| !tracker.contains(artifact.slug())))
    }

    /// Compose the message a publish run would send, without sending it.
    pub async fn preview(&self, tracker: &PublicationTracker) -> HeraldResult<Option<PostPreview>> {
        Ok(self.next_unpublished(tracker).await?.map(|artifact| {
            let text = self.composer.compose(&artifact);
            PostPreview {
                slug: artifact.slug().clone(),
                weight: weighted_len(&text),
                text,
            }
        }))
    }

    /// Publish path: post the newest unpublished artifact and record it.
    ///
    /// The record is appended only after the platform returns an identifier.
    #[instrument(skip_all, fields(platform = distributor.platform_name()))]
    pub async fn publish(
        &self,
        tracker: &mut PublicationTracker,
        distributor: &dyn Distributor,
        now: DateTime<Utc>,
    ) -> HeraldResult<PublishOutcome> {
        let Some(artifact) = self.next_unpublished(tracker).await? else {
            info!("No unpublished artifacts");
            return Ok(PublishOutcome::NothingToPublish);
        };

        let text = self.composer.compose(&artifact);
        info!(slug = %artifact.slug(), weight = weighted_len(&text), "Publishing artifact");

        let deadline = self.config.distribution.timeout();
        let text = text.as_str();
        let post_id = with_retry(&self.config.retry, DISTRIBUTION_LABEL, || async move {
            with_timeout(deadline, DISTRIBUTION_LABEL, distributor.post(text)).await
        })
        .await?;

        let record = PublicationRecord::published_at(artifact.slug().as_str(), post_id, now);
        tracker.append(record.clone()).await?;
        info!(slug = %record.slug(), post_id = %record.post_id(), "Published");

        Ok(PublishOutcome::Published(record))
    }

    /// Publication state of every stored artifact.
    pub async fn status(&self, tracker: &PublicationTracker) -> HeraldResult<StatusReport> {
        let entries = self
            .store
            .list()
            .await?
            .into_iter()
            .map(|artifact| StatusEntry {
                record: tracker
                    .records()
                    .iter()
                    .find(|r| r.slug() == artifact.slug())
                    .cloned(),
                slug: artifact.slug().clone(),
                date: *artifact.date(),
            })
            .collect();
        Ok(StatusReport { entries })
    }
}

fn is_already_exists(error: &herald_error::HeraldError) -> bool {
    matches!(
        error.kind(),
        HeraldErrorKind::Storage(e) if matches!(e.kind, StorageErrorKind::AlreadyExists(_))
    )
}
