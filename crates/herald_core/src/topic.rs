//! Topic definitions.

use crate::{Bindings, render_template};
use derive_getters::Getters;
use herald_error::TemplateError;
use serde::{Deserialize, Serialize};

/// A kind of article the pipeline can produce.
///
/// Templates contain `{name}` placeholders that are resolved against a
/// [`SelectionContext`](crate::SelectionContext) at selection time.
///
/// # Examples
///
/// ```
/// use herald_core::TopicConfig;
///
/// let topic = TopicConfig::new(
///     "draw-analysis",
///     "제{round}회 로또 당첨번호 분석",
///     "{round}회 당첨번호 {numbers}를 분석해주세요.",
///     "당첨번호 분석",
///     vec!["{round}회".to_string(), "당첨번호".to_string()],
/// );
/// assert_eq!(topic.id(), "draw-analysis");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct TopicConfig {
    /// Unique topic identifier
    id: String,
    /// Title template
    title_template: String,
    /// Instruction template sent to the generation service
    prompt_template: String,
    /// Category label shown with the article
    category: String,
    /// Ordered tag templates
    #[serde(default)]
    tags: Vec<String>,
}

impl TopicConfig {
    /// Creates a topic definition.
    pub fn new(
        id: impl Into<String>,
        title_template: impl Into<String>,
        prompt_template: impl Into<String>,
        category: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title_template: title_template.into(),
            prompt_template: prompt_template.into(),
            category: category.into(),
            tags,
        }
    }

    /// Renders the title template.
    pub fn render_title(&self, bindings: &Bindings) -> Result<String, TemplateError> {
        render_template(&self.title_template, bindings)
    }

    /// Renders the prompt template.
    pub fn render_prompt(&self, bindings: &Bindings) -> Result<String, TemplateError> {
        render_template(&self.prompt_template, bindings)
    }

    /// Renders every tag template, preserving order.
    pub fn render_tags(&self, bindings: &Bindings) -> Result<Vec<String>, TemplateError> {
        self.tags
            .iter()
            .map(|tag| render_template(tag, bindings))
            .collect()
    }
}
