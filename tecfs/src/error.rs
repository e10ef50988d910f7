//! Error types for the tecfs library.
//!
//! Path operations themselves report failure by value (empty paths, `false`).
//! This module covers the fallible surfaces around them: configuration
//! loading, strict path validation and the I/O those perform, using
//! `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with a tecfs error.
///
/// # Examples
///
/// ```
/// use tecfs::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("assets/".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the tecfs library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path failed validation.
    #[error("invalid path '{path}': {reason}")]
    InvalidPath {
        /// The offending path text.
        path: String,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },
}

impl Error {
    /// Check if error indicates a missing resource.
    ///
    /// # Examples
    ///
    /// ```
    /// use tecfs::Error;
    ///
    /// let err = Error::NotFound { resource: "assets directory".into() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// Check if error is a path validation failure.
    #[must_use]
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, Self::InvalidPath { .. })
    }
}
