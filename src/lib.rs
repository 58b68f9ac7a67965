//! stepmap - Shared-prefix tree editor for automated browser-test suites
//!
//! A browser-test suite is a flat list of titled tests, each a list of steps
//! such as `wait 2`, `type "Hello World"` or `click`. stepmap merges tests
//! that start with the same steps into one tree, so a shared step is shown
//! once, and lets that tree be edited while the flat list stays the single
//! source of truth.
//!
//! # Quick Start
//!
//! ```ignore
//! use stepmap::{Command, Executor, Output, TestSuite};
//!
//! let mut executor = Executor::default();
//! let suite = TestSuite::from_json(&std::fs::read_to_string("suite.json")?)?;
//!
//! // Every command answers with the rebuilt tree
//! let tree = executor.execute(Command::Load { suite })?;
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Executor`], which provides a command-based
//! API over the [`Editor`]. The editor can also be driven directly, together
//! with its dialogue [`Draft`]s, when a borrowed [`Tree`] is all the caller
//! needs.

// Re-export the public API from stepmap-executor
pub use stepmap_executor::*;

pub use stepmap_core::{canonical_key, canonicalize, validate_title, TitleError};
pub use stepmap_engine::{familize, Draft, DraftKind, Editor, Node, Terminal, Tree};
