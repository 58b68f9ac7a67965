//! Tests and the persisted suite document
//!
//! The flat list of tests is the single source of truth of the editor. On
//! disk it is wrapped in a `data` field:
//!
//! ```json
//! { "data": [ { "title": "search", "steps": [ { "action": "wait", "value": 2 } ] } ] }
//! ```
//!
//! Loading goes through an untyped pass first so that an unknown action or a
//! malformed payload is reported with the test and step it was found at.
//! Titles are held to the same rules as a retitle, so every loaded title can
//! be saved back unchanged.

use crate::error::{Error, Result};
use crate::step::{RawStep, Step};
use crate::title::validate_title;
use serde::{Deserialize, Serialize};

/// One titled browser test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Test {
    /// Display title
    pub title: String,
    /// Steps in execution order
    pub steps: Vec<Step>,
}

impl Test {
    /// Create a new test
    pub fn new(title: impl Into<String>, steps: Vec<Step>) -> Self {
        Test {
            title: title.into(),
            steps,
        }
    }

    /// Index of the last step, if any
    pub fn last_index(&self) -> Option<usize> {
        self.steps.len().checked_sub(1)
    }

    /// Whether `step_index` is this test's last step
    pub fn is_terminal(&self, step_index: usize) -> bool {
        self.last_index() == Some(step_index)
    }

    /// Whether two tests run exactly the same steps
    pub fn same_steps(&self, other: &Test) -> bool {
        self.steps == other.steps
    }
}

/// Persisted suite document: `{ "data": [ Test ] }`
///
/// Deserializing checks steps and titles the same way [`TestSuite::from_json`]
/// does.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSuite")]
pub struct TestSuite {
    /// Flat list of tests
    pub data: Vec<Test>,
}

#[derive(Deserialize)]
struct RawSuite {
    data: Vec<RawTest>,
}

#[derive(Deserialize)]
struct RawTest {
    title: String,
    #[serde(default)]
    steps: Vec<RawStep>,
}

impl TestSuite {
    /// Wrap a flat list of tests
    pub fn new(data: Vec<Test>) -> Self {
        TestSuite { data }
    }

    /// Parse a suite from JSON
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the document is not shaped like a suite,
    /// `Parse` (wrapping `UnknownAction` or `InvalidValue`) for a bad step and
    /// `InvalidSuiteTitle` for a title a retitle would refuse.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawSuite = serde_json::from_str(json)?;
        TestSuite::try_from(raw)
    }

    /// Serialize to compact JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Tests in list order
    pub fn tests(&self) -> &[Test] {
        &self.data
    }

    /// Consume the suite, returning the flat list
    pub fn into_tests(self) -> Vec<Test> {
        self.data
    }

    /// Number of tests
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the suite has no tests
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl TryFrom<RawSuite> for TestSuite {
    type Error = Error;

    fn try_from(raw: RawSuite) -> Result<Self> {
        let data = raw
            .data
            .into_iter()
            .enumerate()
            .map(|(test_index, test)| {
                validate_title(&test.title)
                    .map_err(|source| Error::InvalidSuiteTitle { test_index, source })?;
                let steps = test
                    .steps
                    .into_iter()
                    .enumerate()
                    .map(|(step_index, step)| {
                        Step::try_from(step).map_err(|e| e.at(test_index, step_index))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(Test::new(test.title, steps))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(TestSuite { data })
    }
}

impl From<Vec<Test>> for TestSuite {
    fn from(data: Vec<Test>) -> Self {
        TestSuite::new(data)
    }
}
