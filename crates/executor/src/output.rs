//! Output enum for command execution results.
//!
//! Every command produces exactly one output type. Mutations always answer
//! with the rebuilt tree so the presentation layer can re-render at once.

use serde::{Deserialize, Serialize};
use stepmap_core::TestSuite;

/// Successful command execution results.
///
/// Each [`Command`](crate::Command) variant maps to exactly one `Output`
/// variant, documented on the command.
///
/// The tree is carried in its JSON form: a map from canonical key to node,
/// each node listing `action`, `value`, `title`, `terminals`, `occurrences`
/// and `children` in sibling order. Its `revision` is the one commands must
/// send back with occurrences taken from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    /// Rebuilt tree and the list revision it was built at
    Tree {
        revision: u64,
        tree: serde_json::Value,
    },

    /// Flat test list
    Suite(TestSuite),
}

impl Output {
    /// The tree, if this output carries one
    pub fn as_tree(&self) -> Option<&serde_json::Value> {
        match self {
            Output::Tree { tree, .. } => Some(tree),
            Output::Suite(_) => None,
        }
    }

    /// Revision of the tree, if this output carries one
    pub fn revision(&self) -> Option<u64> {
        match self {
            Output::Tree { revision, .. } => Some(*revision),
            Output::Suite(_) => None,
        }
    }

    /// The suite, if this output carries one
    pub fn as_suite(&self) -> Option<&TestSuite> {
        match self {
            Output::Suite(suite) => Some(suite),
            Output::Tree { .. } => None,
        }
    }
}
