//! Domain dataset error types.

/// Reasons a draw dataset cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum DataErrorKind {
    /// File could not be read
    #[display("Unreadable dataset {}: {}", path, message)]
    Unreadable {
        /// Dataset path
        path: String,
        /// I/O message
        message: String,
    },
    /// File parsed but carries no draws
    #[display("Dataset {} contains no draws", _0)]
    Empty(String),
    /// File is not valid dataset JSON
    #[display("Failed to parse dataset {}: {}", path, message)]
    Parse {
        /// Dataset path
        path: String,
        /// Parser message
        message: String,
    },
    /// Draw records violate integrity rules (violations joined with `; `)
    #[display("Dataset integrity check failed: {}", _0)]
    Integrity(String),
    /// Neither primary nor backup could be loaded
    #[display("Failed to load draw data from both {} and {}", primary, backup)]
    Exhausted {
        /// Primary dataset path
        primary: String,
        /// Backup dataset path
        backup: String,
    },
}

/// Dataset error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Data Error: {} at line {} in {}", kind, line, file)]
pub struct DataError {
    /// The kind of error that occurred
    pub kind: DataErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DataError {
    /// Create a new dataset error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DataErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
