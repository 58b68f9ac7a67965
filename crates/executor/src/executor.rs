//! The Executor - single entry point to the editor.
//!
//! The Executor owns the [`Editor`] and routes each command to the matching
//! editor operation, converting the result to an [`Output`].

use stepmap_engine::{Editor, EditorConfig};
use tracing::{debug, warn};

use crate::{Command, Error, Output, Result};

/// The command executor - single entry point to the editor.
///
/// Unlike the editor's own methods, `execute` never hands out a borrow of the
/// tree: the tree is snapshotted into the output, so the caller can keep it
/// while issuing the next command.
///
/// # Example
///
/// ```ignore
/// use stepmap_executor::{Command, Executor, Step};
///
/// let mut executor = Executor::default();
///
/// let output = executor.execute(Command::AddNewTest { step: Step::wait(2) })?;
///
/// let revision = output.revision().unwrap_or_default();
/// let results = executor.execute_many(vec![Command::GetTree, Command::GetSuite]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Executor {
    editor: Editor,
}

impl Executor {
    /// Create an executor over an empty list
    pub fn new(config: EditorConfig) -> Self {
        Self {
            editor: Editor::new(config),
        }
    }

    /// Execute a single command.
    ///
    /// Returns the command result or an error. A failed command leaves the
    /// list unchanged.
    pub fn execute(&mut self, cmd: Command) -> Result<Output> {
        let name = cmd.name();
        let mutation = cmd.is_mutation();
        debug!(target: "stepmap::executor", command = name, mutation, "Executing command");

        let result = self.dispatch(cmd);
        match &result {
            Err(e) => {
                warn!(target: "stepmap::executor", command = name, error = %e, "Command failed")
            }
            Ok(_) if mutation => debug!(
                target: "stepmap::executor",
                command = name,
                revision = self.editor.revision(),
                "List changed"
            ),
            Ok(_) => {}
        }
        result
    }

    fn dispatch(&mut self, cmd: Command) -> Result<Output> {
        match cmd {
            Command::Load { suite } => {
                self.editor.load_suite(suite);
            }
            Command::GetSuite => return Ok(Output::Suite(self.editor.suite())),
            Command::GetTree => {}
            Command::AddStepAfter {
                revision,
                occurrences,
                mode,
                step,
            } => {
                self.editor
                    .add_step_after(revision, &occurrences, mode, step)?;
            }
            Command::AddNewTest { step } => {
                self.editor.add_new_test(step)?;
            }
            Command::EditStep {
                revision,
                occurrences,
                update,
            } => {
                self.editor.edit_step(revision, &occurrences, &update)?;
            }
            Command::EditTitle { test_index, title } => {
                self.editor.edit_title(test_index, &title)?;
            }
            Command::DeleteStep {
                revision,
                occurrences,
                mode,
            } => {
                self.editor.delete_step(revision, &occurrences, mode)?;
            }
        }
        tree_output(&self.editor)
    }

    /// Execute multiple commands sequentially.
    ///
    /// Returns all results in the same order as the input commands.
    /// Execution continues even if some commands fail.
    pub fn execute_many(&mut self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }

    /// Parse a JSON command and execute it.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the text is not a command.
    pub fn execute_json(&mut self, json: &str) -> Result<Output> {
        let cmd: Command = serde_json::from_str(json)?;
        self.execute(cmd)
    }

    /// Get a reference to the underlying editor.
    pub fn editor(&self) -> &Editor {
        &self.editor
    }
}

fn tree_output(editor: &Editor) -> Result<Output> {
    let tree = serde_json::to_value(editor.tree()).map_err(|e| Error::Internal {
        reason: format!("tree snapshot failed: {}", e),
    })?;
    Ok(Output::Tree {
        revision: editor.revision(),
        tree,
    })
}
