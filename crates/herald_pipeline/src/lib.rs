//! Publication pipeline for herald.
//!
//! Two independently triggered runs share the artifact store as their only
//! handoff point:
//!
//! - **Generate**: [`TopicSelector`] picks a topic, the generation service
//!   writes an article grounded on recent draws, [`ArtifactValidator`] gates
//!   it, and the store persists it under a unique slug.
//! - **Publish**: the newest artifact missing from the publication tracker is
//!   composed into a post, sent, and recorded.
//!
//! [`PublicationCoordinator`] drives both. Configuration comes from
//! [`HeraldConfig`], topics from [`TopicCatalog`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod coordinator;
mod prompt;
mod selector;
mod topics;
mod validator;

pub use config::{
    DistributionConfig, GenerationSettings, HeraldConfig, PathsConfig, ValidationConfig,
};
pub use coordinator::{
    GenerateOutcome, GenerationPlan, PostPreview, PublicationCoordinator, PublishOutcome,
    StatusEntry, StatusReport,
};
pub use prompt::{CONTEXT_DRAWS, build_prompt, grounding_context};
pub use selector::{Selection, TopicSelector};
pub use topics::{PRIORITY_TOPIC_ID, TopicCatalog};
pub use validator::ArtifactValidator;
