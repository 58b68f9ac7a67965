//! Canonical key tests over the untyped action/payload surface.

use crate::common::*;
use stepmap_core::{canonical_key, canonicalize, Error};

#[test]
fn keys_for_the_search_bar_steps() {
    assert_eq!(canonicalize("wait", &2u64.into()).unwrap(), "Wait 2s");
    assert_eq!(
        canonicalize("select", &"input.js-search-input".into()).unwrap(),
        "Select input.js-search-input"
    );
    assert_eq!(canonicalize("click", &StepValue::None).unwrap(), "Click");
    assert_eq!(
        canonicalize("type", &"Hello World".into()).unwrap(),
        "Type Hello World"
    );
}

#[test]
fn every_action_has_a_key() {
    let cases: Vec<(&str, StepValue, &str)> = vec![
        ("wait", "#app".into(), "Wait for #app"),
        ("hover", StepValue::None, "Hover"),
        ("goto", "https://example.com".into(), "Go to https://example.com"),
        ("viewport", "800x600".into(), "Viewport 800x600"),
        ("media", "print".into(), "Media print"),
        ("keyboard", "Enter".into(), "Press Enter"),
        (
            "drag",
            vec!["0,0".to_string(), "5,5".to_string()].into(),
            r#"Drag ["0,0", "5,5"]"#,
        ),
        (
            "swipe",
            vec!["0,0".to_string(), "5,5".to_string()].into(),
            r#"Swipe ["0,0", "5,5"]"#,
        ),
    ];
    for (action, value, key) in cases {
        assert_eq!(canonicalize(action, &value).unwrap(), key, "action {}", action);
    }
}

#[test]
fn click_and_hover_ignore_payload() {
    assert_eq!(canonicalize("click", &"ignored".into()).unwrap(), "Click");
    assert_eq!(canonicalize("hover", &3u64.into()).unwrap(), "Hover");
}

#[test]
fn duration_and_selector_waits_never_collide() {
    // a selector that reads like a duration still gets its own key
    let seconds = canonical_key(&Step::wait(2));
    let selector = canonicalize("wait", &"2s".into()).unwrap();
    assert_ne!(seconds, selector);
}

#[test]
fn typed_text_cannot_forge_another_action() {
    let typed = canonical_key(&Step::type_text("Click"));
    assert_ne!(typed, canonical_key(&Step::Click));

    let split = canonical_key(&Step::Drag(vec!["a\", \"b".to_string()]));
    let pair = canonical_key(&Step::Drag(vec!["a".to_string(), "b".to_string()]));
    assert_ne!(split, pair);
}

#[test]
fn unknown_action_is_rejected() {
    let err = canonicalize("scroll", &1u64.into()).unwrap_err();
    assert!(matches!(err, Error::UnknownAction { ref action } if action == "scroll"));
    assert_eq!(err.to_string(), "unknown action 'scroll'");
}

#[test]
fn wrong_payload_shape_is_rejected() {
    assert!(matches!(
        canonicalize("type", &2u64.into()),
        Err(Error::InvalidValue { action: Action::Type, .. })
    ));
    assert!(matches!(
        canonicalize("wait", &StepValue::None),
        Err(Error::InvalidValue { action: Action::Wait, .. })
    ));
    assert!(matches!(
        canonicalize("drag", &"0,0".into()),
        Err(Error::InvalidValue { action: Action::Drag, .. })
    ));
}

#[test]
fn step_display_is_its_key() {
    let step = Step::select("#search");
    assert_eq!(step.to_string(), step.key());
}
