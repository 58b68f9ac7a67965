//! Shared test utilities for all integration test suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from any test's main.rs.

#![allow(dead_code)]
#![allow(unused_imports)]

use std::io;
use std::sync::{Arc, Mutex, Once};

use tracing_subscriber::util::SubscriberInitExt;

use proptest::prelude::*;
pub use stepmap_core::{Action, Occurrence, Step, StepUpdate, StepValue, Test, TestSuite, WaitFor};
pub use stepmap_engine::{familize, AddMode, DeleteMode, Editor, EditorConfig, Tree};

// ============================================================================
// Initialization
// ============================================================================

static INIT_TRACING: Once = Once::new();

/// Route `tracing` output through the test harness so it shows for failing tests.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

/// In-memory sink for log output
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` and return the warnings it logged on this thread
pub fn captured_warnings(f: impl FnOnce()) -> String {
    let capture = LogCapture::default();
    let writer = capture.clone();
    let guard = tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::WARN)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish()
        .set_default();
    f();
    drop(guard);
    capture.contents()
}

// ============================================================================
// Fixtures
// ============================================================================

/// Two search-bar tests sharing their first two steps
pub const SEARCH_SUITE: &str = r#"{
  "data": [
    {
      "title": "test search-bar input 1",
      "steps": [
        { "action": "wait", "value": 2 },
        { "action": "select", "value": "input.js-search-input" },
        { "action": "type", "value": "Hello World" }
      ]
    },
    {
      "title": "test search-bar input 5",
      "steps": [
        { "action": "wait", "value": 2 },
        { "action": "select", "value": "input.js-search-input" },
        { "action": "click" }
      ]
    }
  ]
}"#;

/// Build a test
pub fn test(title: &str, steps: Vec<Step>) -> Test {
    Test::new(title, steps)
}

/// `A: wait 2, type "Hello World"` and `B: wait 2, type "Hello Mars"`
pub fn hello_tests() -> Vec<Test> {
    vec![
        test("A", vec![Step::wait(2), Step::type_text("Hello World")]),
        test("B", vec![Step::wait(2), Step::type_text("Hello Mars")]),
    ]
}

/// Editor over `tests` with the default config
pub fn editor(tests: Vec<Test>) -> Editor {
    init_tracing();
    Editor::with_tests(tests, EditorConfig::default())
}

/// Occurrences of the node at `path` (canonical keys from the root)
pub fn occurrences_at(tree: &Tree, path: &[&str]) -> Vec<Occurrence> {
    tree.find(path)
        .unwrap_or_else(|| panic!("no node at {:?}", path))
        .occurrences()
        .to_vec()
}

/// Steps of a test, read back from the tree
pub fn reconstruct(tree: &Tree, test_index: usize) -> Vec<Step> {
    tree.walk(test_index)
        .into_iter()
        .map(|node| node.step().clone())
        .collect()
}

// ============================================================================
// Strategies
// ============================================================================

/// Steps drawn from a small alphabet so that generated tests share prefixes
pub fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (1u64..4).prop_map(Step::wait),
        Just(Step::Click),
        Just(Step::Hover),
        prop_oneof![Just("#a"), Just("#b")].prop_map(Step::select),
        prop_oneof![Just("foo"), Just("bar")].prop_map(Step::type_text),
        Just(Step::Drag(vec!["0,0".to_string(), "10,10".to_string()])),
    ]
}

/// A flat list of up to eight tests of up to five steps
pub fn arb_tests() -> impl Strategy<Value = Vec<Test>> {
    prop::collection::vec(
        (
            "[a-z]{1,8}",
            prop::collection::vec(arb_step(), 0..5),
        )
            .prop_map(|(title, steps)| Test::new(title, steps)),
        0..8,
    )
}

/// A flat list whose tests all have at least one step and no two are identical
pub fn arb_distinct_tests() -> impl Strategy<Value = Vec<Test>> {
    arb_tests().prop_map(|tests| {
        let mut distinct: Vec<Test> = Vec::new();
        for t in tests {
            if !t.steps.is_empty() && !distinct.iter().any(|d| d.same_steps(&t)) {
                distinct.push(t);
            }
        }
        distinct
    })
}
