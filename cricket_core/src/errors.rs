//! # Error Types
//!
//! Structured error types for cricket_core. Every store operation returns a
//! [`CatalogResult`], so the GUI and CLI can show the failing operation, the
//! file involved, and the underlying reason.
//!
//! ## Example
//!
//! ```rust
//! use cricket_core::errors::{CatalogError, CatalogResult};
//!
//! fn parse_direction(raw: &str) -> CatalogResult<bool> {
//!     match raw {
//!         "up" => Ok(true),
//!         "down" => Ok(false),
//!         other => Err(CatalogError::invalid_input("direction", other, "expected 'up' or 'down'")),
//!     }
//! }
//!
//! assert!(parse_direction("sideways").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for cricket_core operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Structured error type for catalog operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CatalogError {
    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// The data file exists but does not hold a valid record list
    #[error("Parse error in '{path}': {reason}")]
    Parse { path: String, reason: String },

    /// JSON serialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// A user-supplied value could not be interpreted
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },
}

impl CatalogError {
    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CatalogError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a Parse error
    pub fn parse(path: impl Into<String>, reason: impl Into<String>) -> Self {
        CatalogError::Parse {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CatalogError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CatalogError::FileError { .. } => "FILE_ERROR",
            CatalogError::Parse { .. } => "PARSE_ERROR",
            CatalogError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CatalogError::InvalidInput { .. } => "INVALID_INPUT",
        }
    }
}
