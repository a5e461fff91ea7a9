//! Error types for the projects library.
//!
//! This module provides the error hierarchy for storage, service and parsing
//! operations, using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with a projects error.
///
/// # Examples
///
/// ```
/// use projects::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the projects library.
#[derive(Debug, Error)]
pub enum Error {
    /// A value could not be bound into a statement placeholder.
    #[error("cannot bind parameter {position}: {message}")]
    Bind {
        /// One-based placeholder position.
        position: usize,
        /// Why the bind failed.
        message: String,
    },

    /// A result row could not be mapped into an entity.
    #[error("cannot extract {entity} from row: {message}")]
    Extract {
        /// Entity being decoded.
        entity: String,
        /// Why the row could not be decoded.
        message: String,
    },

    /// No generated identifier was available after an insert.
    #[error("no generated identifier available for table '{table}'")]
    MissingInsertId {
        /// The table that was inserted into.
        table: String,
    },

    /// A statement failed to execute.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The requested entity does not exist.
    #[error("{resource} does not exist")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// User input could not be parsed.
    #[error("{input} is not a valid {expected}")]
    Parse {
        /// The offending input.
        input: String,
        /// What the input was expected to be.
        expected: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

impl Error {
    /// Builds the error reported when a project identifier does not resolve.
    ///
    /// # Examples
    ///
    /// ```
    /// use projects::Error;
    ///
    /// let err = Error::project_not_found(7);
    /// assert!(err.is_not_found());
    /// assert_eq!(err.to_string(), "project with ID=7 does not exist");
    /// ```
    #[must_use]
    pub fn project_not_found(project_id: i64) -> Self {
        Self::NotFound {
            resource: format!("project with ID={project_id}"),
        }
    }

    /// Check if the error means "valid operation, no such entity".
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if the database stayed locked past the busy timeout.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            Self::Database(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::DatabaseBusy
        )
    }

    /// Check if the error originated in the storage layer.
    #[must_use]
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            Self::Bind { .. }
                | Self::Extract { .. }
                | Self::MissingInsertId { .. }
                | Self::Database(_)
                | Self::UnsupportedSchemaVersion { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_error() {
        let err = Error::Bind {
            position: 3,
            message: "statement has 2 placeholders".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("parameter 3"));
        assert!(display.contains("2 placeholders"));
        assert!(err.is_storage());
    }

    #[test]
    fn test_extract_error() {
        let err = Error::Extract {
            entity: "project".to_string(),
            message: "Invalid column name: project_name".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("cannot extract project"));
        assert!(display.contains("project_name"));
    }

    #[test]
    fn test_not_found_error() {
        let err = Error::project_not_found(12);
        assert!(err.is_not_found());
        assert!(!err.is_storage());
        assert_eq!(err.to_string(), "project with ID=12 does not exist");
    }

    #[test]
    fn test_parse_error_names_input() {
        let err = Error::Parse {
            input: "twelve".to_string(),
            expected: "decimal number".to_string(),
        };
        assert_eq!(err.to_string(), "twelve is not a valid decimal number");
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "project_name".to_string(),
            message: "must be non-empty".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("project_name"));
    }

    #[test]
    fn test_database_error_conversion() {
        let err: Error = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(err.to_string().starts_with("database error"));
        assert!(err.is_storage());
    }

    #[test]
    fn test_busy_error() {
        let busy = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_BUSY),
            None,
        );
        assert!(Error::Database(busy).is_busy());
        assert!(!Error::project_not_found(1).is_busy());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
    }

    #[test]
    fn test_unsupported_schema_version_error() {
        let err = Error::UnsupportedSchemaVersion {
            expected: 1,
            found: 2,
        };
        let display = format!("{err}");
        assert!(display.contains("expected 1"));
        assert!(display.contains("found 2"));
    }
}
