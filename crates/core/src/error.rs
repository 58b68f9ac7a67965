//! Error types for stepmap
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! # Categories
//!
//! | Category | Variants | Description |
//! |----------|----------|-------------|
//! | Vocabulary | `UnknownAction`, `InvalidValue` | Step cannot be understood |
//! | References | `StaleOccurrence`, `UnsupportedBranch` | Occurrences do not fit the flat list |
//! | Validation | `InvalidTitle`, `InvalidInput` | Bad caller input |
//! | Location | `Parse`, `InvalidSuiteTitle` | Suite errors with their test/step position |
//! | System | `Serialization`, `Config`, `Io` | Infrastructure errors |

use crate::action::Action;
use crate::occurrence::Occurrence;
use crate::title::TitleError;
use std::io;
use thiserror::Error;

/// Result type alias for stepmap operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for stepmap
#[derive(Debug, Error)]
pub enum Error {
    /// Action outside the supported vocabulary
    #[error("unknown action '{action}'")]
    UnknownAction {
        /// The action string as received
        action: String,
    },

    /// Payload shape does not fit the action
    #[error("invalid value for '{action}': {reason}")]
    InvalidValue {
        /// Action the payload was supplied for
        action: Action,
        /// What was wrong with the payload
        reason: String,
    },

    /// A new test cannot be branched from these occurrences
    #[error("cannot branch a new test from {count} occurrences: {reason}")]
    UnsupportedBranch {
        /// Number of occurrences supplied
        count: usize,
        /// Why branching was refused
        reason: String,
    },

    /// Occurrence no longer addresses a valid step of the current flat list
    #[error("stale occurrence {occurrence}: {reason}")]
    StaleOccurrence {
        /// The offending occurrence
        occurrence: Occurrence,
        /// What did not match
        reason: String,
    },

    /// Title rejected on retitle
    #[error("invalid title: {0}")]
    InvalidTitle(#[from] TitleError),

    /// Invalid operation input
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the input
        reason: String,
    },

    /// Title rejected while reading a suite
    #[error("test {test_index}: invalid title: {source}")]
    InvalidSuiteTitle {
        /// Index of the test in the suite
        test_index: usize,
        /// Why the title was rejected
        #[source]
        source: TitleError,
    },

    /// Step-level error with its position in a suite
    #[error("test {test_index}, step {step_index}: {source}")]
    Parse {
        /// Index of the test in the suite
        test_index: usize,
        /// Index of the step in the test
        step_index: usize,
        /// Underlying error
        #[source]
        source: Box<Error>,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Create an `InvalidInput` error
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Create a `StaleOccurrence` error
    pub fn stale(occurrence: Occurrence, reason: impl Into<String>) -> Self {
        Error::StaleOccurrence {
            occurrence,
            reason: reason.into(),
        }
    }

    /// Attach a test/step position to this error
    pub fn at(self, test_index: usize, step_index: usize) -> Self {
        Error::Parse {
            test_index,
            step_index,
            source: Box::new(self),
        }
    }

    /// Innermost error, looking through `Parse` wrappers
    pub fn root(&self) -> &Error {
        match self {
            Error::Parse { source, .. } => source.root(),
            other => other,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
