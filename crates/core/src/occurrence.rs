//! Occurrences: back-references into the flat test list
//!
//! An occurrence names one step of one test by position. It is only
//! meaningful for the flat list it was taken from; any mutation of that list
//! may invalidate it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a step within the flat test list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    /// Index of the test in the flat list
    pub test_index: usize,
    /// Index of the step within that test
    pub step_index: usize,
}

impl Occurrence {
    /// Create a new occurrence
    pub const fn new(test_index: usize, step_index: usize) -> Self {
        Occurrence {
            test_index,
            step_index,
        }
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.test_index, self.step_index)
    }
}

impl From<(usize, usize)> for Occurrence {
    fn from((test_index, step_index): (usize, usize)) -> Self {
        Occurrence::new(test_index, step_index)
    }
}
