//! # Error Types
//!
//! Structured error types for beam_core. Every error names the field or
//! quantity that caused it, so a caller can point the user at the offending
//! input without parsing the message.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{BeamError, BeamResult};
//!
//! fn validate_length(length: f64) -> BeamResult<()> {
//!     if length <= 0.0 {
//!         return Err(BeamError::invalid_input(
//!             "length",
//!             length.to_string(),
//!             "Beam length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_length(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type BeamResult<T> = Result<T, BeamError>;

/// Structured error type for beam analysis.
///
/// Validation failures are raised before any computation starts, so an
/// error never comes with a partially computed curve.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BeamError {
    /// A beam or load parameter is invalid (out of range, reversed span, NaN)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The sample positions handed to the sweep are unusable
    #[error("Invalid sample positions: {reason}")]
    InvalidSamples { reason: String },

    /// The sweep produced a non-finite value (overflow from huge inputs)
    #[error("Non-finite {quantity} at x = {position}")]
    NonFiniteResult { quantity: String, position: f64 },

    /// Settings file could not be parsed or holds bad values
    #[error("Configuration error in '{path}': {reason}")]
    ConfigError { path: String, reason: String },

    /// JSON/CSV serialization or deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },
}

impl BeamError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        BeamError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidSamples error
    pub fn invalid_samples(reason: impl Into<String>) -> Self {
        BeamError::InvalidSamples {
            reason: reason.into(),
        }
    }

    /// Create a NonFiniteResult error
    pub fn non_finite(quantity: impl Into<String>, position: f64) -> Self {
        BeamError::NonFiniteResult {
            quantity: quantity.into(),
            position,
        }
    }

    /// Create a ConfigError
    pub fn config(path: impl Into<String>, reason: impl Into<String>) -> Self {
        BeamError::ConfigError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        BeamError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True when the error came from the caller's input rather than from
    /// the environment (files, settings) or from numeric overflow.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            BeamError::InvalidInput { .. } | BeamError::InvalidSamples { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BeamError::InvalidInput { .. } => "INVALID_INPUT",
            BeamError::InvalidSamples { .. } => "INVALID_SAMPLES",
            BeamError::NonFiniteResult { .. } => "NON_FINITE_RESULT",
            BeamError::ConfigError { .. } => "CONFIG_ERROR",
            BeamError::SerializationError { .. } => "SERIALIZATION_ERROR",
            BeamError::FileError { .. } => "FILE_ERROR",
        }
    }
}

impl From<serde_json::Error> for BeamError {
    fn from(err: serde_json::Error) -> Self {
        BeamError::SerializationError {
            reason: err.to_string(),
        }
    }
}
