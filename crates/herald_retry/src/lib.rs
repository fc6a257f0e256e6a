//! Bounded retry and deadline wrappers.
//!
//! Every network call the pipeline makes (generation and distribution) runs
//! through [`with_retry`], usually with [`with_timeout`] inside it:
//!
//! ```no_run
//! use herald_retry::{RetryPolicy, with_retry, with_timeout};
//! use std::time::Duration;
//!
//! # async fn post() -> herald_error::HeraldResult<String> { Ok("1".into()) }
//! # async fn example() -> herald_error::HeraldResult<()> {
//! let policy = RetryPolicy::default();
//! let id = with_retry(&policy, "X API", || {
//!     with_timeout(Duration::from_secs(30), "X API", post())
//! })
//! .await?;
//! # Ok(())
//! # }
//! ```
//!
//! Delays grow as `base * 2^(attempt-1)`: 1s, 2s, 4s for the default policy.
//! Only errors classified transient by
//! [`RetryableError`](herald_error::RetryableError) are retried.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod executor;
mod policy;

pub use executor::{with_retry, with_timeout};
pub use policy::RetryPolicy;
