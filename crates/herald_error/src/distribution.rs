//! Distribution endpoint error types.

/// Failures posting to the social platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum DistributionErrorKind {
    /// Request could not be sent
    #[display("Distribution request failed: {}", _0)]
    Request(String),
    /// Endpoint rejected the request (non-2xx)
    #[display("X API error {}: {}", status, body)]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },
    /// Success status but no post identifier in the body
    #[display("X API returned unexpected response: {}", _0)]
    MissingPostId(String),
}

/// Distribution error with location tracking.
///
/// # Examples
///
/// ```
/// use herald_error::{DistributionError, DistributionErrorKind};
///
/// let err = DistributionError::new(DistributionErrorKind::Rejected {
///     status: 429,
///     body: "Too Many Requests".to_string(),
/// });
/// assert!(format!("{}", err).contains("429"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Distribution Error: {} at line {} in {}", kind, line, file)]
pub struct DistributionError {
    /// The kind of error that occurred
    pub kind: DistributionErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DistributionError {
    /// Create a new distribution error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DistributionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
