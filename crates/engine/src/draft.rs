//! Dialogue drafts
//!
//! Edits are made in a dialogue: the editor opens it with a prefilled step or
//! title, the user changes what they want, and the dialogue either commits
//! once with the final values or is dismissed. A [`Draft`] is that open
//! dialogue. [`Editor::commit`] consumes it, so a draft commits at most once;
//! dropping it is cancellation and leaves the list untouched.
//!
//! The committed values arrive as a [`StepUpdate`], whose `None` fields mean
//! "keep the prefilled value". For a retitle the new title is the update's
//! text value.
//!
//! Opening a draft on a node takes the revision its occurrences were read
//! at, like the direct operations do. The draft then remembers the revision
//! it was opened at. If another change was committed in between, a draft
//! that refers to positions in the list is refused with `StaleOccurrence`
//! instead of being applied to positions that may have moved.

use crate::editor::{AddMode, DeleteMode, Editor};
use crate::tree::Tree;
use stepmap_core::{Error, Occurrence, Result, Step, StepUpdate, StepValue, TitleError};
use tracing::debug;

/// The operation a draft will perform on commit
#[derive(Debug, Clone, PartialEq)]
pub enum DraftKind {
    /// `add_step_after` with the committed step
    AddStepAfter {
        /// Node to add after
        occurrences: Vec<Occurrence>,
        /// Placement
        mode: AddMode,
    },
    /// `add_new_test` with the committed step
    AddNewTest,
    /// `edit_step` with the committed update
    EditStep {
        /// Node to edit
        occurrences: Vec<Occurrence>,
    },
    /// `edit_title` with the committed text
    EditTitle {
        /// Test to retitle
        test_index: usize,
    },
    /// `delete_step` once confirmed
    DeleteStep {
        /// Node to delete
        occurrences: Vec<Occurrence>,
        /// Deletion mode
        mode: DeleteMode,
    },
}

impl DraftKind {
    /// First position the operation depends on, if any
    fn anchor(&self) -> Option<Occurrence> {
        match self {
            DraftKind::AddStepAfter { occurrences, .. }
            | DraftKind::EditStep { occurrences }
            | DraftKind::DeleteStep { occurrences, .. } => occurrences.first().copied(),
            DraftKind::EditTitle { test_index } => Some(Occurrence::new(*test_index, 0)),
            DraftKind::AddNewTest => None,
        }
    }
}

/// An open, uncommitted dialogue
#[derive(Debug, Clone, PartialEq)]
#[must_use = "a draft does nothing until it is committed"]
pub struct Draft {
    kind: DraftKind,
    step: Option<Step>,
    title: Option<String>,
    revision: u64,
}

impl Draft {
    /// The pending operation
    pub fn kind(&self) -> &DraftKind {
        &self.kind
    }

    /// Step shown in the dialogue, for step drafts
    pub fn step(&self) -> Option<&Step> {
        self.step.as_ref()
    }

    /// Title shown in the dialogue, for retitle drafts
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// List revision the draft was opened at
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl Editor {
    fn draft(&self, kind: DraftKind, step: Option<Step>, title: Option<String>) -> Draft {
        Draft {
            kind,
            step,
            title,
            revision: self.revision(),
        }
    }

    /// Open a dialogue for adding a step after a node
    pub fn draft_add_step_after(
        &self,
        revision: u64,
        occurrences: &[Occurrence],
        mode: AddMode,
    ) -> Result<Draft> {
        self.check_occurrences(revision, occurrences)?;
        let kind = DraftKind::AddStepAfter {
            occurrences: occurrences.to_vec(),
            mode,
        };
        Ok(self.draft(kind, Some(self.config().default_step()?), None))
    }

    /// Open a dialogue for a new single-step test
    pub fn draft_add_new_test(&self) -> Result<Draft> {
        Ok(self.draft(DraftKind::AddNewTest, Some(self.config().default_step()?), None))
    }

    /// Open a dialogue for editing a node, prefilled with its current step
    pub fn draft_edit_step(&self, revision: u64, occurrences: &[Occurrence]) -> Result<Draft> {
        self.check_occurrences(revision, occurrences)?;
        let first = occurrences[0];
        let step = self.tests()[first.test_index].steps[first.step_index].clone();
        let kind = DraftKind::EditStep {
            occurrences: occurrences.to_vec(),
        };
        Ok(self.draft(kind, Some(step), None))
    }

    /// Open a dialogue for retitling a test, prefilled with its current title
    pub fn draft_edit_title(&self, test_index: usize) -> Result<Draft> {
        let test = self.tests().get(test_index).ok_or_else(|| {
            Error::stale(
                Occurrence::new(test_index, 0),
                format!("test index out of range ({} tests)", self.tests().len()),
            )
        })?;
        let title = test.title.clone();
        Ok(self.draft(DraftKind::EditTitle { test_index }, None, Some(title)))
    }

    /// Open a confirmation dialogue for deleting a node
    pub fn draft_delete_step(
        &self,
        revision: u64,
        occurrences: &[Occurrence],
        mode: DeleteMode,
    ) -> Result<Draft> {
        self.check_occurrences(revision, occurrences)?;
        let kind = DraftKind::DeleteStep {
            occurrences: occurrences.to_vec(),
            mode,
        };
        Ok(self.draft(kind, None, None))
    }

    /// Commit a draft with the dialogue's final values.
    ///
    /// Performs exactly one mutation and rebuild.
    pub fn commit(&mut self, draft: Draft, update: StepUpdate) -> Result<&Tree> {
        if draft.revision != self.revision() {
            if let Some(occurrence) = draft.kind.anchor() {
                let err = Error::stale(
                    occurrence,
                    format!(
                        "list changed since the dialogue was opened (revision {} -> {})",
                        draft.revision,
                        self.revision()
                    ),
                );
                return Err(self.reject("commit", err));
            }
        }

        debug!(target: "stepmap::editor", kind = ?draft.kind, "Committing draft");

        let Draft {
            kind,
            step,
            revision,
            ..
        } = draft;

        match kind {
            DraftKind::AddStepAfter { occurrences, mode } => {
                let step = committed_step(step, &update)?;
                self.add_step_after(revision, &occurrences, mode, step)
            }
            DraftKind::AddNewTest => {
                let step = committed_step(step, &update)?;
                self.add_new_test(step)
            }
            DraftKind::EditStep { occurrences } => {
                self.edit_step(revision, &occurrences, &update)
            }
            DraftKind::EditTitle { test_index } => match update.value {
                None => Ok(self.tree()),
                Some(StepValue::Text(new_title)) => self.edit_title(test_index, &new_title),
                Some(other) => Err(TitleError::NotText { kind: other.kind() }.into()),
            },
            DraftKind::DeleteStep { occurrences, mode } => {
                self.delete_step(revision, &occurrences, mode)
            }
        }
    }
}

fn committed_step(prefilled: Option<Step>, update: &StepUpdate) -> Result<Step> {
    let prefilled = prefilled.ok_or_else(|| Error::invalid_input("draft has no step"))?;
    prefilled.updated(update)
}
