//! Content validation error types.

use std::fmt;

/// Generated content was rejected by the acceptance rules.
///
/// Carries every violation found; none of them is ever retried.
///
/// # Examples
///
/// ```
/// use herald_error::ValidationError;
///
/// let err = ValidationError::new(vec!["Missing AI disclaimer".to_string()]);
/// assert_eq!(err.violations().len(), 1);
/// assert!(format!("{}", err).contains("Missing AI disclaimer"));
/// ```
#[derive(Debug, Clone)]
pub struct ValidationError {
    violations: Vec<String>,
    line: u32,
    file: &'static str,
}

impl ValidationError {
    /// Create a new validation error with automatic location tracking.
    #[track_caller]
    pub fn new(violations: Vec<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            violations,
            line: location.line(),
            file: location.file(),
        }
    }

    /// The individual rule violations.
    pub fn violations(&self) -> &[String] {
        &self.violations
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Validation Error: content rejected ({}) at line {} in {}",
            self.violations.join("; "),
            self.line,
            self.file
        )
    }
}

impl std::error::Error for ValidationError {}
