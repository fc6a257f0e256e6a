//! Generation service error types.

/// Failures talking to the generative text service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// Request could not be sent
    #[display("Generation request failed: {}", _0)]
    Request(String),
    /// Service answered with a non-success status
    #[display("Generation API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body
        message: String,
    },
    /// Response body could not be parsed
    #[display("Failed to parse generation response: {}", _0)]
    Parse(String),
    /// Response carried no content elements
    #[display("Generation response contained no content")]
    MissingContent,
    /// First content element was not text
    #[display("Unexpected generation content type: {}", _0)]
    UnexpectedContentType(String),
    /// Text element was empty
    #[display("Generation response text was empty")]
    EmptyText,
    /// Request or artifact could not be assembled
    #[display("Builder error: {}", _0)]
    Builder(String),
}

/// Generation error with location tracking.
///
/// # Examples
///
/// ```
/// use herald_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::MissingContent);
/// assert!(format!("{}", err).contains("no content"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new generation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
