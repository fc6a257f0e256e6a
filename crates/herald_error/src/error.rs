//! Top-level error wrapper types.

use crate::{
    ConfigError, DataError, DistributionError, DistributionErrorKind, GenerationError,
    GenerationErrorKind, JsonError, RetryError, RetryableError, StorageError,
    TemplateError, TimeoutError, ValidationError,
};

/// Every error condition the pipeline can surface.
///
/// # Examples
///
/// ```
/// use herald_error::{ConfigError, HeraldError};
///
/// let config_err = ConfigError::new("X_API_KEY is not set");
/// let err: HeraldError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum HeraldErrorKind {
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error (missing credentials, bad config files)
    #[from(ConfigError)]
    Config(ConfigError),
    /// Domain dataset error
    #[from(DataError)]
    Data(DataError),
    /// Storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Template rendering error
    #[from(TemplateError)]
    Template(TemplateError),
    /// Generated content rejected
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Generation service error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Distribution endpoint error
    #[from(DistributionError)]
    Distribution(DistributionError),
    /// Deadline exceeded
    #[from(TimeoutError)]
    Timeout(TimeoutError),
    /// Retries exhausted
    #[from(RetryError)]
    Retry(RetryError),
}

/// Herald error with kind discrimination.
///
/// # Examples
///
/// ```
/// use herald_error::{ConfigError, HeraldResult};
///
/// fn might_fail() -> HeraldResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Herald Error: {}", _0)]
pub struct HeraldError(Box<HeraldErrorKind>);

impl HeraldError {
    /// Create a new error from a kind.
    pub fn new(kind: HeraldErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &HeraldErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to HeraldErrorKind
impl<T> From<T> for HeraldError
where
    T: Into<HeraldErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

impl RetryableError for GenerationError {
    fn is_retryable(&self) -> bool {
        matches!(
            self.kind,
            GenerationErrorKind::Request(_)
                | GenerationErrorKind::Api { .. }
                | GenerationErrorKind::Parse(_)
        )
    }
}

impl RetryableError for DistributionError {
    fn is_retryable(&self) -> bool {
        matches!(
            self.kind,
            DistributionErrorKind::Request(_)
                | DistributionErrorKind::Rejected { .. }
                | DistributionErrorKind::MissingPostId(_)
        )
    }
}

impl RetryableError for HeraldError {
    fn is_retryable(&self) -> bool {
        match self.kind() {
            HeraldErrorKind::Timeout(_) => true,
            HeraldErrorKind::Generation(e) => e.is_retryable(),
            HeraldErrorKind::Distribution(e) => e.is_retryable(),
            _ => false,
        }
    }
}

/// Result type for herald operations.
pub type HeraldResult<T> = std::result::Result<T, HeraldError>;
