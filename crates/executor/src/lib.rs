//! # stepmap executor
//!
//! Serializable command interface to the stepmap editor.
//!
//! The presentation layer talks to the editor through this crate. It provides:
//! - [`Command`]/[`Output`] - the instruction set and its results, as JSON
//! - [`Executor`] - owns the editor and dispatches commands
//! - [`Error`] - plain-data errors that survive serialization
//!
//! ## Quick Start
//!
//! ```text
//! use stepmap_executor::{Command, Executor, Output, TestSuite};
//!
//! let mut executor = Executor::default();
//! executor.execute(Command::Load { suite: TestSuite::from_json(&json)? })?;
//!
//! let output = executor.execute_json(r#"{"EditTitle":{"test_index":0,"title":"search"}}"#)?;
//! ```

#![warn(missing_docs)]

mod command;
mod convert;
mod error;
mod executor;
mod output;

#[cfg(test)]
mod tests;

pub use command::Command;
pub use error::{Error, Result};
pub use executor::Executor;
pub use output::Output;

pub use stepmap_core::{Action, Occurrence, Step, StepUpdate, StepValue, Test, TestSuite, WaitFor};
pub use stepmap_engine::{AddMode, BranchPolicy, DeleteMode, EditorConfig};
