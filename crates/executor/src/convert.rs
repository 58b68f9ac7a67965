//! Error conversion from engine error types.
//!
//! This module provides the conversion from [`stepmap_core::Error`] to the
//! executor's [`Error`] type.

use crate::Error;

/// Convert an engine error to an executor error.
///
/// Positions are kept as typed fields; nested causes are flattened to their
/// message.
impl From<stepmap_core::Error> for Error {
    fn from(err: stepmap_core::Error) -> Self {
        use stepmap_core::Error as Core;

        match err {
            Core::UnknownAction { action } => Error::UnknownAction { action },
            Core::InvalidValue { action, reason } => Error::InvalidValue {
                action: action.to_string(),
                reason,
            },
            Core::UnsupportedBranch { count, reason } => Error::UnsupportedBranch { count, reason },
            Core::StaleOccurrence { occurrence, reason } => Error::StaleOccurrence {
                test_index: occurrence.test_index,
                step_index: occurrence.step_index,
                reason,
            },
            Core::InvalidTitle(e) => Error::InvalidTitle {
                reason: e.to_string(),
            },
            Core::InvalidSuiteTitle { test_index, source } => Error::InvalidSuiteTitle {
                test_index,
                reason: source.to_string(),
            },
            Core::InvalidInput { reason } => Error::InvalidInput { reason },
            Core::Parse {
                test_index,
                step_index,
                source,
            } => Error::Parse {
                test_index,
                step_index,
                reason: source.to_string(),
            },
            Core::Serialization(reason) => Error::Serialization { reason },
            Core::Config(reason) => Error::Config { reason },
            Core::Io(e) => Error::Io {
                reason: e.to_string(),
            },
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization {
            reason: err.to_string(),
        }
    }
}
