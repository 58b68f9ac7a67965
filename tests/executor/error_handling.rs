//! Error Handling Tests
//!
//! Engine errors reach the caller as plain data with their positions intact.

use crate::common::*;
use stepmap::{BranchPolicy, Command, EditorConfig, Error, Executor};

fn executor_with(config: EditorConfig) -> Executor {
    init_tracing();
    let mut executor = Executor::new(config);
    executor
        .execute(Command::Load {
            suite: TestSuite::new(hello_tests()),
        })
        .unwrap();
    executor
}

#[test]
fn stale_occurrence_reports_position() {
    let mut executor = executor_with(EditorConfig::default());
    let err = executor
        .execute(Command::DeleteStep {
            revision: 1,
            occurrences: vec![Occurrence::new(0, 9)],
            mode: DeleteMode::Branch,
        })
        .unwrap_err();

    match err {
        Error::StaleOccurrence {
            test_index,
            step_index,
            ..
        } => assert_eq!((test_index, step_index), (0, 9)),
        other => panic!("Expected StaleOccurrence, got {:?}", other),
    }
}

#[test]
fn unsupported_branch_under_reject_policy() {
    let mut executor = executor_with(EditorConfig {
        branch_policy: BranchPolicy::Reject,
        ..EditorConfig::default()
    });
    let err = executor
        .execute(Command::AddStepAfter {
            revision: 1,
            occurrences: vec![Occurrence::new(0, 0), Occurrence::new(1, 0)],
            mode: AddMode::New,
            step: Step::Click,
        })
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedBranch { count: 2, .. }));
}

#[test]
fn invalid_input_and_title() {
    let mut executor = executor_with(EditorConfig::default());

    let err = executor
        .execute(Command::EditStep {
            revision: 1,
            occurrences: vec![],
            update: StepUpdate::value(1u64),
        })
        .unwrap_err();
    assert!(matches!(err, Error::InvalidInput { .. }));

    let err = executor
        .execute(Command::EditTitle {
            test_index: 0,
            title: String::new(),
        })
        .unwrap_err();
    assert!(matches!(err, Error::InvalidTitle { .. }));
}

#[test]
fn invalid_value_names_the_action() {
    let mut executor = executor_with(EditorConfig::default());
    let err = executor
        .execute(Command::EditStep {
            revision: 1,
            occurrences: vec![Occurrence::new(0, 0), Occurrence::new(1, 0)],
            update: StepUpdate::replace(Action::Swipe, 3u64),
        })
        .unwrap_err();

    assert_eq!(
        err,
        Error::InvalidValue {
            action: "swipe".to_string(),
            reason: "expected a list of coordinates, got a number".to_string(),
        }
    );
}

#[test]
fn errors_serialize() {
    let mut executor = executor_with(EditorConfig::default());
    let err = executor
        .execute(Command::EditTitle {
            test_index: 5,
            title: "x".to_string(),
        })
        .unwrap_err();

    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["StaleOccurrence"]["test_index"], 5);
}

#[test]
fn failed_commands_keep_the_list() {
    let mut executor = executor_with(EditorConfig::default());
    let before = executor.execute(Command::GetSuite).unwrap();

    let _ = executor.execute(Command::DeleteStep {
        revision: 1,
        occurrences: vec![Occurrence::new(0, 1), Occurrence::new(1, 1)],
        mode: DeleteMode::This,
    });

    assert_eq!(executor.execute(Command::GetSuite).unwrap(), before);
}

#[test]
fn suite_with_a_bad_title_is_not_loaded() {
    let mut executor = executor_with(EditorConfig::default());
    let before = executor.execute(Command::GetSuite).unwrap();

    let err = executor
        .execute_json(r#"{"Load":{"suite":{"data":[{"title":"","steps":[{"action":"click"}]}]}}}"#)
        .unwrap_err();
    match err {
        Error::Serialization { reason } => assert!(reason.contains("test 0: invalid title")),
        other => panic!("Expected Serialization, got {:?}", other),
    }
    assert_eq!(executor.execute(Command::GetSuite).unwrap(), before);
    assert_eq!(executor.editor().revision(), 1);
}
