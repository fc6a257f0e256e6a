//! Error types for the herald publication pipeline.
//!
//! This crate provides the foundation error types used throughout the herald workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! The top-level [`HeraldError`] is what every fallible pipeline operation returns.
//! Whether a failure is worth another attempt is decided by [`RetryableError`].
//!
//! # Examples
//!
//! ```
//! use herald_error::{ConfigError, HeraldResult};
//!
//! fn fetch_data() -> HeraldResult<String> {
//!     Err(ConfigError::new("ANTHROPIC_API_KEY is not set"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod data;
mod distribution;
mod error;
mod generation;
mod json;
mod retry;
mod storage;
mod template;
mod validation;

pub use config::ConfigError;
pub use data::{DataError, DataErrorKind};
pub use distribution::{DistributionError, DistributionErrorKind};
pub use error::{HeraldError, HeraldErrorKind, HeraldResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use json::JsonError;
pub use retry::{RetryError, RetryableError, TimeoutError};
pub use storage::{StorageError, StorageErrorKind};
pub use template::{TemplateError, TemplateErrorKind};
pub use validation::ValidationError;
