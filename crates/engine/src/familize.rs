//! Trie builder
//!
//! `familize` folds a flat list of tests into a shared-prefix tree. Tests are
//! visited in list order and steps in test order; a cursor starts at the root
//! for every test and descends one level per step:
//!
//! 1. Compute the step's canonical key.
//! 2. At the cursor's level, create the node on first sight or append this
//!    occurrence to the existing one.
//! 3. If the step is the test's last, record the test as a terminal of the node.
//! 4. Move the cursor to the node's children.
//!
//! Runs in O(total steps) and is deterministic: the same list always yields
//! the same keys, sibling order and occurrence order.
//!
//! Identical tests end on the same node. Every one of their titles is kept on
//! that node's terminal list; none is dropped.

use crate::tree::{Level, Tree};
use stepmap_core::{Occurrence, Test};
use tracing::{debug, warn};

/// Build the familized tree of a flat test list
pub fn familize(tests: &[Test]) -> Tree {
    let mut roots = Level::default();
    let mut step_count = 0usize;

    for (test_index, test) in tests.iter().enumerate() {
        let mut level = &mut roots;
        for (step_index, step) in test.steps.iter().enumerate() {
            let node = level.entry(step, Occurrence::new(test_index, step_index));
            if test.is_terminal(step_index) {
                node.push_terminal(test_index, &test.title);
            }
            level = node.children_mut();
        }
        step_count += test.steps.len();
    }

    let tree = Tree::new(roots, tests.len());

    for group in tree.duplicate_groups() {
        warn!(
            target: "stepmap::familize",
            tests = ?group,
            "Identical tests share one terminal node"
        );
    }

    debug!(
        target: "stepmap::familize",
        tests = tests.len(),
        steps = step_count,
        nodes = tree.node_count(),
        "Tree rebuilt"
    );

    tree
}
