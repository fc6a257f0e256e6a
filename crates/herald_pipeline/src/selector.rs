//! Topic selection.

use crate::TopicCatalog;
use crate::topics::PRIORITY_TOPIC_ID;
use chrono::{Datelike, NaiveDate};
use derive_getters::Getters;
use herald_core::{DrawDataset, SelectionContext, TopicConfig};
use herald_error::{DataError, DataErrorKind, GenerationError, GenerationErrorKind, HeraldResult};
use rand::Rng;
use tracing::debug;

const RECENT_COUNT: u32 = 20;
const DATE_RANGE_SPAN: usize = 5;

/// One resolved topic: the topic, its bindings, and everything rendered from them.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Selection {
    /// Chosen topic
    topic: TopicConfig,
    /// Bindings the templates were rendered against
    context: SelectionContext,
    /// Destination slug
    slug: String,
    /// Rendered title
    title: String,
    /// Rendered topic instructions
    prompt: String,
    /// Rendered tags
    tags: Vec<String>,
}

/// Chooses what to write next.
///
/// The priority topic wins whenever its artifact for the latest round does not
/// exist yet. Otherwise the rotated topics cycle by ISO week number.
#[derive(Debug, Clone)]
pub struct TopicSelector {
    catalog: TopicCatalog,
}

impl TopicSelector {
    /// Selector over `catalog`.
    pub fn new(catalog: TopicCatalog) -> Self {
        Self { catalog }
    }

    /// The topic catalogue.
    pub fn catalog(&self) -> &TopicCatalog {
        &self.catalog
    }

    /// Slug of the priority artifact for the latest round.
    ///
    /// # Errors
    ///
    /// Fails when the dataset holds no draws.
    pub fn priority_slug(&self, dataset: &DrawDataset) -> HeraldResult<String> {
        let latest = dataset
            .latest()
            .ok_or_else(|| DataError::new(DataErrorKind::Empty("draw dataset".to_string())))?;
        Ok(format!("{}-{}", latest.round(), PRIORITY_TOPIC_ID))
    }

    /// Index into the rotated topics for `today`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use herald_pipeline::TopicSelector;
    ///
    /// // 2024-01-08 falls in ISO week 2
    /// let day = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
    /// assert_eq!(TopicSelector::rotation_index(day, 4), 2);
    /// assert_eq!(TopicSelector::rotation_index(day, 2), 0);
    /// ```
    pub fn rotation_index(today: NaiveDate, rotated: usize) -> usize {
        today.iso_week().week() as usize % rotated.max(1)
    }

    /// Select with the thread-local random source.
    pub fn select(
        &self,
        dataset: &DrawDataset,
        priority_exists: bool,
        today: NaiveDate,
    ) -> HeraldResult<Selection> {
        self.select_with_rng(dataset, priority_exists, today, &mut rand::thread_rng())
    }

    /// Select the next topic and render it.
    ///
    /// `priority_exists` reports whether the artifact named by
    /// [`priority_slug`](Self::priority_slug) is already persisted.
    pub fn select_with_rng<R: Rng + ?Sized>(
        &self,
        dataset: &DrawDataset,
        priority_exists: bool,
        today: NaiveDate,
        rng: &mut R,
    ) -> HeraldResult<Selection> {
        let context = Self::context(dataset, today, rng)?;

        let (topic, slug) = if priority_exists {
            let rotated = self.catalog.rotation();
            let index = Self::rotation_index(today, rotated.len());
            let topic = rotated[index].clone();
            let slug = format!("{}-{}", topic.id(), today.format("%Y-%m-%d"));
            debug!(topic = %topic.id(), index, "Selected rotated topic");
            (topic, slug)
        } else {
            let topic = self.catalog.priority().clone();
            let slug = self.priority_slug(dataset)?;
            debug!(topic = %topic.id(), "Selected priority topic");
            (topic, slug)
        };

        let bindings = context.bindings();
        let title = topic.render_title(&bindings)?;
        let prompt = topic.render_prompt(&bindings)?;
        let tags = topic.render_tags(&bindings)?;

        Ok(Selection {
            topic,
            context,
            slug,
            title,
            prompt,
            tags,
        })
    }

    /// Bindings for the latest draw.
    pub fn context<R: Rng + ?Sized>(
        dataset: &DrawDataset,
        today: NaiveDate,
        rng: &mut R,
    ) -> HeraldResult<SelectionContext> {
        let latest = dataset
            .latest()
            .ok_or_else(|| DataError::new(DataErrorKind::Empty("draw dataset".to_string())))?;
        let numbers = latest.numbers().to_vec();
        let target_number = numbers[rng.gen_range(0..numbers.len())];

        let span_start = DATE_RANGE_SPAN.min(dataset.len()) - 1;
        let start = dataset.draws()[span_start].date();
        let date_range = format!("{} ~ {}", start, latest.date());

        SelectionContext::builder()
            .round(*latest.round())
            .numbers(numbers)
            .bonus(*latest.bonus())
            .next_round(latest.round() + 1)
            .recent_count(RECENT_COUNT)
            .year(today.year())
            .date_range(date_range)
            .total_draws(dataset.len())
            .target_number(target_number)
            .build()
            .map_err(|e| GenerationError::new(GenerationErrorKind::Builder(e.to_string())).into())
    }
}
