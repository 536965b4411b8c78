//! # Error Types
//!
//! Structured error types for prelim_core. The design engine itself is
//! infallible (every member search has a deterministic fallback); these
//! errors cover the fallible surface around it: input validation, the
//! project store, and serialization.
//!
//! ## Example
//!
//! ```rust
//! use prelim_core::errors::{DesignError, DesignResult};
//!
//! fn validate_floors(floors: u32) -> DesignResult<()> {
//!     if floors == 0 {
//!         return Err(DesignError::invalid_input(
//!             "floors",
//!             floors.to_string(),
//!             "Building must have at least one floor",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for prelim_core operations
pub type DesignResult<T> = Result<T, DesignError>;

/// Structured error type for validation and persistence operations.
///
/// Each variant carries enough context for a consumer to report or handle
/// the failure programmatically.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum DesignError {
    /// An input value is invalid (out of range, inconsistent, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Grid arrays do not match the declared bay counts
    #[error("Grid shape mismatch for '{field}': expected {expected}, found {found}")]
    GridShapeMismatch {
        field: String,
        expected: usize,
        found: usize,
    },

    /// A stored project was not found
    #[error("Project not found: {id}")]
    ProjectNotFound { id: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// File is locked by another user/process
    #[error("File locked: '{path}' is locked by {locked_by} since {locked_at}")]
    FileLocked {
        path: String,
        locked_by: String,
        locked_at: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl DesignError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        DesignError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a GridShapeMismatch error
    pub fn grid_shape(field: impl Into<String>, expected: usize, found: usize) -> Self {
        DesignError::GridShapeMismatch {
            field: field.into(),
            expected,
            found,
        }
    }

    /// Create a ProjectNotFound error
    pub fn project_not_found(id: impl Into<String>) -> Self {
        DesignError::ProjectNotFound { id: id.into() }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        DesignError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileLocked error
    pub fn file_locked(
        path: impl Into<String>,
        locked_by: impl Into<String>,
        locked_at: impl Into<String>,
    ) -> Self {
        DesignError::FileLocked {
            path: path.into(),
            locked_by: locked_by.into(),
            locked_at: locked_at.into(),
        }
    }

    /// Check if this is a recoverable error (e.g., can retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, DesignError::FileLocked { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            DesignError::InvalidInput { .. } => "INVALID_INPUT",
            DesignError::GridShapeMismatch { .. } => "GRID_SHAPE_MISMATCH",
            DesignError::ProjectNotFound { .. } => "PROJECT_NOT_FOUND",
            DesignError::FileError { .. } => "FILE_ERROR",
            DesignError::FileLocked { .. } => "FILE_LOCKED",
            DesignError::SerializationError { .. } => "SERIALIZATION_ERROR",
            DesignError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error =
            DesignError::invalid_input("floors", "0", "Building must have at least one floor");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: DesignError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            DesignError::project_not_found("abc").error_code(),
            "PROJECT_NOT_FOUND"
        );
        assert_eq!(
            DesignError::grid_shape("x_spacings_m", 3, 2).error_code(),
            "GRID_SHAPE_MISMATCH"
        );
    }

    #[test]
    fn test_recoverable() {
        let locked = DesignError::file_locked("p.plm", "someone", "now");
        assert!(locked.is_recoverable());
        assert!(!DesignError::project_not_found("x").is_recoverable());
    }
}
