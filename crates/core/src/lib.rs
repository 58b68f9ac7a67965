//! Core types for stepmap
//!
//! This crate defines the foundational types used throughout the system:
//! - Action: The fixed vocabulary of browser-test actions
//! - Step: One action with its typed payload (tagged union keyed by action)
//! - StepValue / StepUpdate: Loose wire payload and partial step updates
//! - Test / TestSuite: A titled step sequence and the persisted `{ "data": [...] }` document
//! - Occurrence: Back-reference to a (test, step) position in the flat list
//! - Title validation
//! - Canonical keys: The serialized identity used to merge shared steps
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod action;
pub mod canonical;
pub mod error;
pub mod occurrence;
pub mod step;
pub mod suite;
pub mod title;

pub use action::Action;
pub use canonical::{canonical_key, canonicalize};
pub use error::{Error, Result};
pub use occurrence::Occurrence;
pub use step::{RawStep, Step, StepUpdate, StepValue, WaitFor};
pub use suite::{Test, TestSuite};
pub use title::{validate_title, TitleError, MAX_TITLE_LENGTH};
