//! Core data types for the herald publication pipeline.
//!
//! This crate provides the foundation data types shared by every herald crate:
//! topic definitions and their resolved selection context, the persisted
//! content artifact and publication record, the lottery draw dataset that
//! grounds generation, and the driver-agnostic generation request/response.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod artifact;
mod context;
mod draw;
mod generation;
mod record;
mod telemetry;
mod template;
mod topic;

pub use artifact::{ContentArtifact, ContentArtifactBuilder, DESCRIPTION_MAX_CHARS, derive_description};
pub use context::{SelectionContext, SelectionContextBuilder};
pub use draw::{Draw, DrawDataset, LOTTO_MAX, LOTTO_MIN, LOTTO_PER_SET};
pub use generation::{GenerateRequest, GenerateRequestBuilder, GenerateResponse, Output};
pub use record::PublicationRecord;
pub use telemetry::init_tracing;
#[cfg(feature = "observability")]
pub use telemetry::{init_telemetry, shutdown_telemetry};
pub use template::{Bindings, render_template};
pub use topic::TopicConfig;
