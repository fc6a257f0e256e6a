//! Storage error types.

/// Kinds of storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Failed to create storage directory
    #[display("Failed to create storage directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write file
    #[display("Failed to write file: {}", _0)]
    FileWrite(String),
    /// Failed to read file
    #[display("Failed to read file: {}", _0)]
    FileRead(String),
    /// No record stored under the key
    #[display("Record not found: {}", _0)]
    NotFound(String),
    /// A record already exists under the key
    #[display("Record already exists: {}", _0)]
    AlreadyExists(String),
    /// Stored record could not be parsed
    #[display("Malformed record {}: {}", path, message)]
    Malformed {
        /// Path of the offending file
        path: String,
        /// Parser message
        message: String,
    },
    /// Key cannot be used as a file name
    #[display("Invalid record key: {}", _0)]
    InvalidKey(String),
    /// Another run holds the single-writer lock
    #[display("Lock held by another run: {}", _0)]
    LockHeld(String),
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use herald_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::NotFound("100-draw-analysis".to_string()));
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
