//! Editor configuration via `stepmap.toml`
//!
//! Holds the defaults the editor applies when it creates tests and steps, and
//! the policies for the cases the flat-list model leaves open.

use serde::{Deserialize, Serialize};
use std::path::Path;
use stepmap_core::{validate_title, Action, Error, Result, Step, StepValue};

/// Config file name
pub const CONFIG_FILE_NAME: &str = "stepmap.toml";

/// Title given to tests the editor creates
pub const DEFAULT_TITLE: &str = "New Untitled Test";

/// What `add_step_after` in `New` mode does with a shared node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BranchPolicy {
    /// Branch from the common prefix of all occurrences
    #[default]
    Fork,
    /// Refuse with `UnsupportedBranch`
    Reject,
}

/// Step the editor prefills when a new step is added
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultStep {
    /// Action identifier
    pub action: Action,
    /// Payload
    #[serde(default, skip_serializing_if = "is_none_value")]
    pub value: StepValue,
}

fn is_none_value(value: &StepValue) -> bool {
    matches!(value, StepValue::None)
}

impl Default for DefaultStep {
    fn default() -> Self {
        DefaultStep {
            action: Action::Type,
            value: StepValue::Text("New Step".to_string()),
        }
    }
}

/// Editor configuration loaded from `stepmap.toml`.
///
/// # Example
///
/// ```toml
/// default_title = "New Untitled Test"
/// branch_policy = "fork"
/// prune_empty_tests = false
///
/// [default_step]
/// action = "type"
/// value = "New Step"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Title of tests created by the editor
    #[serde(default = "default_title")]
    pub default_title: String,
    /// Behaviour of `add_step_after` in `New` mode on shared nodes
    #[serde(default)]
    pub branch_policy: BranchPolicy,
    /// Drop tests left without steps after a delete. Off by default: an
    /// emptied test keeps its place and title in the list.
    #[serde(default)]
    pub prune_empty_tests: bool,
    /// Step prefilled for additions
    #[serde(default)]
    pub default_step: DefaultStep,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_title: default_title(),
            branch_policy: BranchPolicy::default(),
            prune_empty_tests: false,
            default_step: DefaultStep::default(),
        }
    }
}

impl EditorConfig {
    /// Check that the defaults produce a valid title and step.
    ///
    /// # Errors
    ///
    /// Returns `Config` naming the offending setting.
    pub fn validate(&self) -> Result<()> {
        validate_title(&self.default_title)
            .map_err(|e| Error::Config(format!("default_title: {}", e)))?;
        self.default_step()
            .map_err(|e| Error::Config(format!("default_step: {}", e)))?;
        Ok(())
    }

    /// The prefilled step as a typed step
    pub fn default_step(&self) -> Result<Step> {
        Step::from_parts(self.default_step.action, self.default_step.value.clone())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# stepmap editor configuration
#
# Title given to tests created by the editor.
default_title = "New Untitled Test"

# Adding a step after a node shared by several tests, as a new test:
#   "fork"   = branch from the shared prefix (default)
#   "reject" = refuse, the step must be inserted into every test instead
branch_policy = "fork"

# Remove tests that have no steps left after a delete (default: false).
# When off, an emptied test keeps its title and position in the list.
prune_empty_tests = false

# Step prefilled in the editor when a step is added.
[default_step]
action = "type"
value = "New Step"
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content).map_err(|e| {
            Error::Config(format!("config file '{}': {}", path.display(), e))
        })?;
        Ok(config)
    }

    /// Parse and validate config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: EditorConfig =
            toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
