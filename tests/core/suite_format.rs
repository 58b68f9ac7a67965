//! Persisted suite document tests.

use crate::common::*;
use stepmap_core::Error;

#[test]
fn search_suite_loads() {
    let suite = TestSuite::from_json(SEARCH_SUITE).unwrap();

    assert_eq!(suite.len(), 2);
    assert_eq!(suite.tests()[1].title, "test search-bar input 5");
    assert_eq!(
        suite.tests()[1].steps,
        vec![Step::wait(2), Step::select("input.js-search-input"), Step::Click]
    );
}

#[test]
fn pretty_output_reloads_to_the_same_suite() {
    let suite = TestSuite::from_json(SEARCH_SUITE).unwrap();
    let pretty = suite.to_json_pretty().unwrap();
    assert_eq!(TestSuite::from_json(&pretty).unwrap(), suite);
}

#[test]
fn valueless_steps_are_written_without_value() {
    let suite = TestSuite::new(vec![test("a", vec![Step::Click, Step::Hover])]);
    let json: serde_json::Value = serde_json::from_str(&suite.to_json().unwrap()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "data": [ { "title": "a", "steps": [ { "action": "click" }, { "action": "hover" } ] } ]
        })
    );
}

#[test]
fn null_value_is_accepted_for_click() {
    let json = r#"{"data":[{"title":"a","steps":[{"action":"click","value":null}]}]}"#;
    let suite = TestSuite::from_json(json).unwrap();
    assert_eq!(suite.tests()[0].steps, vec![Step::Click]);
}

#[test]
fn missing_steps_is_an_empty_test() {
    let suite = TestSuite::from_json(r#"{"data":[{"title":"draft"}]}"#).unwrap();
    assert!(suite.tests()[0].steps.is_empty());
}

#[test]
fn selector_wait_survives_reload() {
    let suite = TestSuite::new(vec![test(
        "a",
        vec![Step::Wait(WaitFor::Selector("#spinner".to_string()))],
    )]);
    let reloaded = TestSuite::from_json(&suite.to_json().unwrap()).unwrap();
    assert_eq!(reloaded, suite);
}

#[test]
fn not_a_suite_is_a_serialization_error() {
    let err = TestSuite::from_json(r#"{"tests":[]}"#).unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));

    let err = TestSuite::from_json("not json").unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
}

#[test]
fn loaded_titles_follow_the_retitle_rules() {
    let json = r#"{"data":[{"title":"line one\nline two","steps":[{"action":"click"}]}]}"#;
    let err = TestSuite::from_json(json).unwrap_err();
    assert!(matches!(err, Error::InvalidSuiteTitle { test_index: 0, .. }));

    // whatever loads can be written back unchanged through a retitle
    let suite = TestSuite::from_json(SEARCH_SUITE).unwrap();
    let mut editor = editor(suite.into_tests());
    for test_index in 0..editor.tests().len() {
        let title = editor.tests()[test_index].title.clone();
        editor.edit_title(test_index, &title).unwrap();
    }
    assert_eq!(editor.tests()[1].title, "test search-bar input 5");
}
