//! Error types for command execution.
//!
//! All errors from command execution are represented by the [`Error`] enum.
//! Unlike the engine's error, this one is plain data: it can be cloned,
//! compared and sent across the presentation boundary as JSON.

use serde::{Deserialize, Serialize};

/// Command execution errors.
///
/// # Categories
///
/// | Category | Variants | Description |
/// |----------|----------|-------------|
/// | Step | `UnknownAction`, `InvalidValue` | Step does not fit the action vocabulary |
/// | Position | `StaleOccurrence`, `UnsupportedBranch` | Occurrences do not address the current list |
/// | Validation | `InvalidTitle`, `InvalidInput` | Bad command input |
/// | Document | `Parse`, `InvalidSuiteTitle`, `Serialization` | Suite JSON could not be read or written |
/// | System | `Config`, `Io`, `Internal` | Infrastructure errors |
///
/// # Example
///
/// ```ignore
/// use stepmap_executor::{Command, Error, Executor};
///
/// match executor.execute(cmd) {
///     Ok(output) => { /* render the tree */ }
///     Err(Error::StaleOccurrence { reason, .. }) => {
///         println!("Tree out of date: {}", reason);
///     }
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Step ====================
    /// Action outside the supported vocabulary
    #[error("unknown action '{action}'")]
    UnknownAction { action: String },

    /// Payload shape does not fit the action
    #[error("invalid value for '{action}': {reason}")]
    InvalidValue { action: String, reason: String },

    // ==================== Position ====================
    /// Occurrence no longer addresses the current list
    #[error("stale occurrence {test_index}:{step_index}: {reason}")]
    StaleOccurrence {
        test_index: usize,
        step_index: usize,
        reason: String,
    },

    /// A new test cannot be branched from these occurrences
    #[error("cannot branch a new test from {count} occurrences: {reason}")]
    UnsupportedBranch { count: usize, reason: String },

    // ==================== Validation ====================
    /// Title rejected
    #[error("invalid title: {reason}")]
    InvalidTitle { reason: String },

    /// Title of a test in a loaded suite rejected
    #[error("test {test_index}: invalid title: {reason}")]
    InvalidSuiteTitle { test_index: usize, reason: String },

    /// Invalid command input
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    // ==================== Document ====================
    /// Bad step inside a suite document
    #[error("test {test_index}, step {step_index}: {reason}")]
    Parse {
        test_index: usize,
        step_index: usize,
        reason: String,
    },

    /// JSON encoding or decoding failed
    #[error("serialization error: {reason}")]
    Serialization { reason: String },

    // ==================== System ====================
    /// Configuration error
    #[error("configuration error: {reason}")]
    Config { reason: String },

    /// I/O error
    #[error("I/O error: {reason}")]
    Io { reason: String },

    /// Internal error (bug)
    #[error("internal error: {reason}")]
    Internal { reason: String },
}

/// Result type for command execution
pub type Result<T> = std::result::Result<T, Error>;
