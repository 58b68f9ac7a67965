//! Mutation engine
//!
//! The [`Editor`] owns the flat test list, which is the single source of
//! truth, and the familized tree derived from it. Every operation:
//!
//! 1. validates its occurrences against the current list,
//! 2. applies the change to a scratch copy of the list,
//! 3. commits the copy only if every step succeeded,
//! 4. rebuilds the tree from scratch and returns it.
//!
//! A failed operation leaves both the list and the tree exactly as they were.
//!
//! ## Shared editing
//!
//! A node of the tree stands for the same step in several tests. Passing its
//! occurrences to `edit_step`, `delete_step` or `add_step_after` (insert mode)
//! changes **every** one of those tests. This is how one visual node is edited,
//! not aliasing: after the rebuild the edited steps may still merge, merge
//! with a sibling they now equal, or split apart.
//!
//! ## Occurrence validation
//!
//! Occurrences are positions, so they go stale when the list changes. Every
//! operation that takes occurrences also takes the [`Editor::revision`] of the
//! tree they were read from, and rejects its input with `StaleOccurrence`
//! when that revision is not the current one. Positions that merely still fit
//! the shifted list are refused too. On top of that every occurrence must be
//! in range and all of them must address the same step path, the way a node
//! of the current tree does. Nothing is clamped or guessed.

use crate::config::{BranchPolicy, EditorConfig};
use crate::familize::familize;
use crate::tree::Tree;
use serde::{Deserialize, Serialize};
use stepmap_core::{
    validate_title, Error, Occurrence, Result, Step, StepUpdate, Test, TestSuite,
};
use tracing::{debug, info, warn};

/// How `add_step_after` places the new step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddMode {
    /// Start a new test that shares the prefix up to the node
    New,
    /// Insert the step after the node in every test running through it
    Insert,
}

/// How `delete_step` removes a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeleteMode {
    /// Remove only the step; later steps move up
    This,
    /// Remove the step and everything after it
    Branch,
}

/// Flat test list, its tree, and the operations that edit them
#[derive(Debug, Clone)]
pub struct Editor {
    tests: Vec<Test>,
    tree: Tree,
    config: EditorConfig,
    revision: u64,
}

impl Default for Editor {
    fn default() -> Self {
        Editor::new(EditorConfig::default())
    }
}

impl Editor {
    /// Create an editor with an empty list
    pub fn new(config: EditorConfig) -> Self {
        Editor {
            tests: Vec::new(),
            tree: Tree::default(),
            config,
            revision: 0,
        }
    }

    /// Create an editor over an existing list
    pub fn with_tests(tests: Vec<Test>, config: EditorConfig) -> Self {
        let mut editor = Editor::new(config);
        editor.tests = tests;
        editor.rebuild();
        editor
    }

    /// Replace the whole list and rebuild.
    ///
    /// Counts as a change: drafts opened before the load go stale.
    pub fn load(&mut self, tests: Vec<Test>) -> &Tree {
        info!(target: "stepmap::editor", tests = tests.len(), "Loading test list");
        self.tests = tests;
        self.revision += 1;
        self.rebuild()
    }

    /// Replace the whole list from a suite document and rebuild
    pub fn load_suite(&mut self, suite: TestSuite) -> &Tree {
        self.load(suite.into_tests())
    }

    /// The flat list
    pub fn tests(&self) -> &[Test] {
        &self.tests
    }

    /// The current tree
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Active configuration
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Counter bumped by every committed change to the list.
    ///
    /// Occurrences read from [`Editor::tree`] are only valid for the revision
    /// current at the time of reading.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Snapshot of the list as a suite document
    pub fn suite(&self) -> TestSuite {
        TestSuite::new(self.tests.clone())
    }

    /// Consume the editor, returning the list as a suite document
    pub fn into_suite(self) -> TestSuite {
        TestSuite::new(self.tests)
    }

    /// Add `step` after the node the occurrences point at.
    ///
    /// - `New`: copy the prefix ending at the node into a new test with the
    ///   default title and append `step`. With several occurrences the prefix
    ///   is common to all of them; under `BranchPolicy::Reject` this is
    ///   refused with `UnsupportedBranch`.
    /// - `Insert`: splice `step` right after the node in every test.
    pub fn add_step_after(
        &mut self,
        revision: u64,
        occurrences: &[Occurrence],
        mode: AddMode,
        step: Step,
    ) -> Result<&Tree> {
        self.check_occurrences(revision, occurrences)?;

        match mode {
            AddMode::New => {
                if occurrences.len() > 1 && self.config.branch_policy == BranchPolicy::Reject {
                    let err = Error::UnsupportedBranch {
                        count: occurrences.len(),
                        reason: "branching a shared node is disabled by branch_policy".to_string(),
                    };
                    return Err(self.reject("add_step_after(new)", err));
                }

                let title = self.config.default_title.clone();
                self.apply("add_step_after(new)", |tests| {
                    let origin = occurrences[0];
                    let mut steps = tests[origin.test_index].steps[..=origin.step_index].to_vec();
                    steps.push(step);
                    tests.push(Test::new(title, steps));
                    Ok(())
                })
            }
            AddMode::Insert => self.apply("add_step_after(insert)", |tests| {
                for occurrence in occurrences {
                    tests[occurrence.test_index]
                        .steps
                        .insert(occurrence.step_index + 1, step.clone());
                }
                Ok(())
            }),
        }
    }

    /// Append a new test made of exactly `step`
    pub fn add_new_test(&mut self, step: Step) -> Result<&Tree> {
        let title = self.config.default_title.clone();
        self.apply("add_new_test", |tests| {
            tests.push(Test::new(title, vec![step]));
            Ok(())
        })
    }

    /// Apply a partial update to the step at every occurrence.
    ///
    /// The updated step is computed and validated for every occurrence
    /// before any of them is written. An update that changes nothing is not
    /// a change: the revision stays put.
    pub fn edit_step(
        &mut self,
        revision: u64,
        occurrences: &[Occurrence],
        update: &StepUpdate,
    ) -> Result<&Tree> {
        self.check_occurrences(revision, occurrences)?;
        if update.is_empty() {
            debug!(target: "stepmap::editor", revision, "Empty step update, nothing to apply");
            return Ok(&self.tree);
        }
        self.apply("edit_step", |tests| {
            for occurrence in occurrences {
                let step = &mut tests[occurrence.test_index].steps[occurrence.step_index];
                *step = step.updated(update)?;
            }
            Ok(())
        })
    }

    /// Set the title of one test.
    ///
    /// Empty, whitespace-only, over-long or control-character titles are
    /// rejected with `InvalidTitle` and the list is left untouched.
    pub fn edit_title(&mut self, test_index: usize, title: &str) -> Result<&Tree> {
        if test_index >= self.tests.len() {
            return Err(self.reject(
                "edit_title",
                Error::stale(
                    Occurrence::new(test_index, 0),
                    format!("test index out of range ({} tests)", self.tests.len()),
                ),
            ));
        }
        if let Err(e) = validate_title(title) {
            return Err(self.reject("edit_title", e.into()));
        }

        self.apply("edit_title", |tests| {
            tests[test_index].title = title.to_string();
            Ok(())
        })
    }

    /// Delete the step at every occurrence.
    ///
    /// - `This`: remove just the step; the rest of the test moves up onto the
    ///   previous step (or the root).
    /// - `Branch`: truncate the test at the step.
    ///
    /// Only the referenced tests change. With `prune_empty_tests` set, tests
    /// left without steps are removed from the list.
    pub fn delete_step(
        &mut self,
        revision: u64,
        occurrences: &[Occurrence],
        mode: DeleteMode,
    ) -> Result<&Tree> {
        self.check_occurrences(revision, occurrences)?;
        let prune = self.config.prune_empty_tests;
        self.apply("delete_step", |tests| {
            for occurrence in occurrences {
                let steps = &mut tests[occurrence.test_index].steps;
                match mode {
                    DeleteMode::This => {
                        steps.remove(occurrence.step_index);
                    }
                    DeleteMode::Branch => steps.truncate(occurrence.step_index),
                }
            }
            if prune {
                tests.retain(|t| !t.steps.is_empty());
            }
            Ok(())
        })
    }

    /// Validate that the occurrences were read at `revision` and address one
    /// step path of the current list.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the list is empty or names a test twice
    /// - `StaleOccurrence` if `revision` is not the current revision, an index
    ///   is out of range, or the occurrences do not share the same steps up to
    ///   and including the referenced one
    pub fn check_occurrences(&self, revision: u64, occurrences: &[Occurrence]) -> Result<()> {
        self.resolve(revision, occurrences)
            .map_err(|e| self.reject("check_occurrences", e))
    }

    fn resolve(&self, revision: u64, occurrences: &[Occurrence]) -> Result<()> {
        let first = occurrences
            .first()
            .ok_or_else(|| Error::invalid_input("no occurrences given"))?;
        if revision != self.revision {
            return Err(Error::stale(
                *first,
                format!(
                    "read at revision {}, the list is now at revision {}",
                    revision, self.revision
                ),
            ));
        }

        let mut seen = Vec::with_capacity(occurrences.len());
        let mut path: Option<&[Step]> = None;

        for &occurrence in occurrences {
            if seen.contains(&occurrence.test_index) {
                return Err(Error::invalid_input(format!(
                    "test {} referenced more than once",
                    occurrence.test_index
                )));
            }
            seen.push(occurrence.test_index);

            let test = self.tests.get(occurrence.test_index).ok_or_else(|| {
                Error::stale(
                    occurrence,
                    format!("test index out of range ({} tests)", self.tests.len()),
                )
            })?;
            if occurrence.step_index >= test.steps.len() {
                return Err(Error::stale(
                    occurrence,
                    format!("step index out of range ({} steps)", test.steps.len()),
                ));
            }

            let prefix = &test.steps[..=occurrence.step_index];
            match path {
                None => path = Some(prefix),
                Some(expected) if expected == prefix => {}
                Some(_) => {
                    return Err(Error::stale(
                        occurrence,
                        format!("does not share the steps of occurrence {}", first),
                    ))
                }
            }
        }
        Ok(())
    }

    /// Run `op` against a scratch copy of the list and commit it on success
    fn apply<F>(&mut self, operation: &'static str, op: F) -> Result<&Tree>
    where
        F: FnOnce(&mut Vec<Test>) -> Result<()>,
    {
        let mut scratch = self.tests.clone();
        if let Err(e) = op(&mut scratch) {
            return Err(self.reject(operation, e));
        }

        self.tests = scratch;
        self.revision += 1;
        debug!(
            target: "stepmap::editor",
            operation,
            revision = self.revision,
            tests = self.tests.len(),
            "Change committed"
        );
        Ok(self.rebuild())
    }

    pub(crate) fn reject(&self, operation: &'static str, err: Error) -> Error {
        warn!(target: "stepmap::editor", operation, error = %err, "Change rejected");
        err
    }

    fn rebuild(&mut self) -> &Tree {
        self.tree = familize(&self.tests);
        &self.tree
    }
}
