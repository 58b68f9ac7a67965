//! Command enum defining all editor operations.
//!
//! Commands are the instruction set the presentation layer sends to the
//! editor. Every operation that changes or reads the flat test list is a
//! variant of this enum.
//!
//! Commands are:
//! - **Self-contained**: the occurrences a command refers to travel with it,
//!   together with the revision of the tree they were read from
//! - **Serializable**: can be converted to/from JSON
//! - **Pure data**: no callbacks or handles into the tree

use serde::{Deserialize, Serialize};
use stepmap_core::{Occurrence, Step, StepUpdate, TestSuite};
use stepmap_engine::{AddMode, DeleteMode};

/// A command is a self-contained, serializable editor operation.
///
/// Occurrences are the ones the rendered tree exposes on each node, and
/// `revision` is the one reported with that tree in `Output::Tree`. A command
/// whose revision is not the editor's current one is refused with
/// `StaleOccurrence` before anything changes.
///
/// # Example
///
/// ```ignore
/// use stepmap_executor::{AddMode, Command, Occurrence, Step};
///
/// let cmd = Command::AddStepAfter {
///     revision: 3,
///     occurrences: vec![Occurrence::new(0, 0), Occurrence::new(1, 0)],
///     mode: AddMode::Insert,
///     step: Step::Click,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    // ==================== Document ====================
    /// Replace the flat list with a suite.
    /// Returns: `Output::Tree`
    Load { suite: TestSuite },

    /// Read the current flat list.
    /// Returns: `Output::Suite`
    GetSuite,

    /// Read the current tree.
    /// Returns: `Output::Tree`
    GetTree,

    // ==================== Mutations ====================
    /// Add a step after a node, either into every test through it or as a
    /// new branching test.
    /// Returns: `Output::Tree`
    AddStepAfter {
        revision: u64,
        occurrences: Vec<Occurrence>,
        mode: AddMode,
        step: Step,
    },

    /// Append a new single-step test.
    /// Returns: `Output::Tree`
    AddNewTest { step: Step },

    /// Change the step at every occurrence of a node.
    /// Returns: `Output::Tree`
    EditStep {
        revision: u64,
        occurrences: Vec<Occurrence>,
        #[serde(default)]
        update: StepUpdate,
    },

    /// Retitle one test.
    /// Returns: `Output::Tree`
    EditTitle { test_index: usize, title: String },

    /// Delete a node's step, or the node and everything below it.
    /// Returns: `Output::Tree`
    DeleteStep {
        revision: u64,
        occurrences: Vec<Occurrence>,
        mode: DeleteMode,
    },
}

impl Command {
    /// Name of the command, for logging
    pub fn name(&self) -> &'static str {
        match self {
            Command::Load { .. } => "Load",
            Command::GetSuite => "GetSuite",
            Command::GetTree => "GetTree",
            Command::AddStepAfter { .. } => "AddStepAfter",
            Command::AddNewTest { .. } => "AddNewTest",
            Command::EditStep { .. } => "EditStep",
            Command::EditTitle { .. } => "EditTitle",
            Command::DeleteStep { .. } => "DeleteStep",
        }
    }

    /// Whether the command changes the flat list
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Command::GetSuite | Command::GetTree)
    }
}
