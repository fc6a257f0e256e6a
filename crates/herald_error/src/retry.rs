//! Retry classification and the errors raised by the retry/timeout wrappers.

use crate::HeraldError;

/// Trait for errors that support retry logic.
///
/// Transient failures (transport errors, non-2xx responses, timeouts) return
/// `true`; configuration, validation and storage failures return `false` and
/// abort a retry loop on the first occurrence.
///
/// # Examples
///
/// ```
/// use herald_error::{DistributionError, DistributionErrorKind, RetryableError};
///
/// let err = DistributionError::new(DistributionErrorKind::Rejected {
///     status: 503,
///     body: "Service unavailable".to_string(),
/// });
/// assert!(err.is_retryable());
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger another attempt.
    fn is_retryable(&self) -> bool;
}

/// An operation did not finish before its deadline.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Timeout Error: {} timed out after {}ms at line {} in {}", label, millis, line, file)]
pub struct TimeoutError {
    /// Label of the operation that timed out
    pub label: String,
    /// Deadline in milliseconds
    pub millis: u64,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl TimeoutError {
    /// Create a new timeout error with automatic location tracking.
    #[track_caller]
    pub fn new(label: impl Into<String>, millis: u64) -> Self {
        let location = std::panic::Location::caller();
        Self {
            label: label.into(),
            millis,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Every attempt of a retried operation failed.
///
/// The last underlying error is kept intact; the display adds the attempt count.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Retry Error: {} failed after {} attempt(s): {}", label, attempts, last_error)]
pub struct RetryError {
    /// Label of the retried operation
    pub label: String,
    /// Number of attempts made
    pub attempts: usize,
    /// Error returned by the final attempt
    #[error(source)]
    pub last_error: Box<HeraldError>,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl RetryError {
    /// Create a new retry-exhaustion error with automatic location tracking.
    #[track_caller]
    pub fn new(label: impl Into<String>, attempts: usize, last_error: HeraldError) -> Self {
        let location = std::panic::Location::caller();
        Self {
            label: label.into(),
            attempts,
            last_error: Box::new(last_error),
            line: location.line(),
            file: location.file(),
        }
    }
}
