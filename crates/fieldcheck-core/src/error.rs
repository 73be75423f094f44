//! Error types for the fieldcheck core library
//!
//! This module defines the structural errors that abort a validation pass
//! before any rule runs, using thiserror for ergonomic error definitions.
//! Content failures discovered by the rules are never errors; they are
//! accumulated in an [`ErrorReport`](crate::report::ErrorReport) instead.

use thiserror::Error;

/// Main error type for fieldcheck operations
#[derive(Error, Debug)]
pub enum Error {
    /// Input is not a well-formed JSON object at the top level
    #[error("JSON decode error: {message}")]
    Decode {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Decoded fields cannot populate the caller's destination type
    #[error("Field binding error: {message}")]
    Bind {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Failure report could not be serialized
    #[error("Report encoding error: {message}")]
    Encode {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;
