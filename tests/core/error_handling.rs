//! Error shape tests: positions and messages a caller can show.

use crate::common::*;
use std::error::Error as _;
use stepmap_core::{Error, TitleError};

#[test]
fn parse_error_names_test_and_step() {
    let json = r#"{"data":[{"title":"a","steps":[{"action":"click"},{"action":"wait","value":["1"]}]}]}"#;
    let err = TestSuite::from_json(json).unwrap_err();

    assert!(err.to_string().starts_with("test 0, step 1: "));
    assert!(matches!(
        err.root(),
        Error::InvalidValue { action: Action::Wait, .. }
    ));
    assert!(err.source().is_some());
}

#[test]
fn stale_occurrence_message() {
    let err = Error::stale(Occurrence::new(2, 5), "step index out of range (3 steps)");
    assert_eq!(
        err.to_string(),
        "stale occurrence 2:5: step index out of range (3 steps)"
    );
}

#[test]
fn title_errors_convert() {
    let err: Error = TitleError::Blank.into();
    assert!(matches!(err, Error::InvalidTitle(TitleError::Blank)));
    assert!(err.to_string().starts_with("invalid title"));
}

#[test]
fn step_update_wire_shape() {
    let update: StepUpdate = serde_json::from_str(r#"{"value":"Hello"}"#).unwrap();
    assert_eq!(update, StepUpdate::value("Hello"));
    assert_eq!(serde_json::to_string(&StepUpdate::unchanged()).unwrap(), "{}");
}
