//! Error handling and error types for cardinal-rust.
//!
//! Every fallible operation in the crate returns [`Result`], and invalid input
//! is rejected before any random state is consumed.

use std::io;
use thiserror::Error;

/// Main error type for the cardinal library.
#[derive(Error, Debug)]
pub enum CardinalError {
    /// Configuration and validation errors
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration problem
        message: String,
    },

    /// Invalid input arguments
    #[error("Invalid argument: {parameter} = {value}, {reason}")]
    InvalidArgument {
        /// Name of the offending argument
        parameter: String,
        /// Value that was provided
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// Out of bounds access
    #[error("Index out of bounds: index {index}, length {length}")]
    IndexOutOfBounds {
        /// Index that was requested
        index: usize,
        /// Length of the indexed collection
        length: usize,
    },

    /// File I/O errors
    #[error("I/O error: {source}")]
    IO {
        /// Underlying I/O error
        #[from]
        source: io::Error,
    },

    /// JSON serialization errors
    #[error("JSON error: {source}")]
    Json {
        /// Underlying serde_json error
        #[from]
        source: serde_json::Error,
    },
}

/// Type alias for Results using CardinalError
pub type Result<T> = std::result::Result<T, CardinalError>;

impl CardinalError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        CardinalError::Config {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<P, V, R>(parameter: P, value: V, reason: R) -> Self
    where
        P: Into<String>,
        V: Into<String>,
        R: Into<String>,
    {
        CardinalError::InvalidArgument {
            parameter: parameter.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an index out of bounds error
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        CardinalError::IndexOutOfBounds { index, length }
    }

    /// Check if this error is recoverable.
    ///
    /// None of the current failure modes can be fixed by retrying the same
    /// call; the caller has to change its input or configuration.
    pub fn is_recoverable(&self) -> bool {
        match self {
            CardinalError::Config { .. } => false,
            CardinalError::InvalidArgument { .. } => false,
            CardinalError::IndexOutOfBounds { .. } => false,
            CardinalError::IO { .. } => true,
            CardinalError::Json { .. } => false,
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            CardinalError::Config { .. } => "config",
            CardinalError::InvalidArgument { .. } => "invalid_argument",
            CardinalError::IndexOutOfBounds { .. } => "index_out_of_bounds",
            CardinalError::IO { .. } => "io",
            CardinalError::Json { .. } => "json",
        }
    }
}
